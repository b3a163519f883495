pub mod frame;
pub mod graphics;
pub mod host;
pub mod input;

use std::thread;
use std::time::Duration;

use crossbeam_channel::bounded;
use log::info;
use winit::event_loop::EventLoop;

use graphics::backend::State;
use graphics::{Context, Texture, TextureFactory};
use input::InputState;

/// A game that can be hosted by [`run`].
///
/// `screen_width`, `screen_height` and `fps` are fixed constants for the
/// lifetime of the game. `init` runs once, before the first update, and is
/// the only place textures can be created; failure there aborts startup.
/// `update` advances game state by one fixed tick and `draw` records the
/// current state into a draw context. The host guarantees that `update` and
/// `draw` are never called concurrently.
pub trait Game {
    fn screen_width(&self) -> u32;
    fn screen_height(&self) -> u32;
    fn fps(&self) -> u32;
    fn init(&mut self, textures: &mut dyn TextureFactory) -> anyhow::Result<()>;
    fn update(&mut self, input: InputState);
    fn draw(&self, ctx: &mut dyn Context, offscreen: &Texture);
}

/// Open a window scaled from the game's screen size and run the game until
/// the window is closed. Diverges on success; startup failures are returned.
pub fn run<G>(mut game: G, title: &str, scale: u32) -> anyhow::Result<()>
where
    G: Game + Send + 'static,
{
    env_logger::init();

    let event_loop = EventLoop::new();
    let window = host::build_window(
        &event_loop,
        title,
        game.screen_width() * scale,
        game.screen_height() * scale,
    )?;
    let mut state = futures::executor::block_on(State::new(
        &window,
        game.screen_width(),
        game.screen_height(),
        scale,
    ))?;
    game.init(&mut state)?;

    let offscreen = state.offscreen();
    let fps = game.fps();
    info!(
        "running {}x{} at {} fps, scale {}",
        game.screen_width(),
        game.screen_height(),
        fps,
        scale
    );

    let (pointer_tx, pointer_rx) = bounded(host::POINTER_QUEUE);
    let (input_tx, input_rx) = bounded(0);
    let (draw_tx, draw_rx) = bounded(0);
    let ticks = crossbeam_channel::tick(Duration::from_secs(1) / fps);

    thread::spawn(move || input::forward(pointer_rx, input_tx));
    let frame_loop = frame::FrameLoop::new(game, offscreen, input_rx, ticks, draw_rx);
    thread::spawn(move || frame_loop.run());

    host::run(event_loop, window, state, pointer_tx, draw_tx)
}
