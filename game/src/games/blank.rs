use engine::graphics::{Context, Texture, TextureFactory};
use engine::input::InputState;
use engine::Game;

/// Draws nothing at all; the screen stays cleared.
pub struct Blank;

impl Blank {
    pub fn new() -> Self {
        Blank
    }
}

impl Game for Blank {
    fn screen_width(&self) -> u32 {
        320
    }

    fn screen_height(&self) -> u32 {
        240
    }

    fn fps(&self) -> u32 {
        60
    }

    fn init(&mut self, _textures: &mut dyn TextureFactory) -> anyhow::Result<()> {
        Ok(())
    }

    fn update(&mut self, _input: InputState) {}

    fn draw(&self, _ctx: &mut dyn Context, _offscreen: &Texture) {}
}
