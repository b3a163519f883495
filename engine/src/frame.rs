use std::time::Instant;

use crossbeam_channel::{select, Receiver, Sender};
use log::debug;

use crate::graphics::{DrawList, Texture};
use crate::input::InputState;
use crate::Game;

/// A display refresh asking for one frame. The frame loop answers by
/// sending the recorded draw list back over this channel; both sides block
/// until the handoff completes.
pub type DrawRequest = Sender<DrawList>;

/// The coordinating task that serializes update and draw against a single
/// game's state.
///
/// All three event sources are plain receivers handed in by the caller, so
/// the loop can be driven deterministically in tests without a window or a
/// timer.
pub struct FrameLoop<G> {
    game: G,
    offscreen: Texture,
    input: Receiver<InputState>,
    ticks: Receiver<Instant>,
    draws: Receiver<DrawRequest>,
    held: InputState,
}

impl<G: Game> FrameLoop<G> {
    pub fn new(
        game: G,
        offscreen: Texture,
        input: Receiver<InputState>,
        ticks: Receiver<Instant>,
        draws: Receiver<DrawRequest>,
    ) -> Self {
        FrameLoop {
            game,
            offscreen,
            input,
            ticks,
            draws,
            held: InputState::default(),
        }
    }

    pub fn run(mut self) {
        debug!("frame loop running");
        while self.step() {}
        debug!("frame loop stopped");
    }

    /// Wait for whichever event source is ready and service it. Returns
    /// false once any peer has hung up; teardown is process exit.
    fn step(&mut self) -> bool {
        select! {
            recv(self.input) -> state => match state {
                Ok(state) => self.held = state,
                Err(_) => return false,
            },
            recv(self.ticks) -> tick => match tick {
                Ok(_) => {
                    self.game.update(self.held);
                    // A press is seen by at most one tick.
                    self.held = InputState::default();
                }
                Err(_) => return false,
            },
            recv(self.draws) -> reply => match reply {
                Ok(reply) => {
                    let mut list = DrawList::new();
                    self.game.draw(&mut list, &self.offscreen);
                    if reply.send(list).is_err() {
                        return false;
                    }
                }
                Err(_) => return false,
            },
        }
        true
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graphics::{Color, Context, DrawCommand, TextureFactory, TextureId};

    /// Records what the frame loop feeds it. Each draw marks the current
    /// update count in a rect's x coordinate.
    struct Probe {
        updates: u64,
        seen: Vec<InputState>,
    }

    impl Probe {
        fn new() -> Self {
            Probe {
                updates: 0,
                seen: Vec::new(),
            }
        }
    }

    impl Game for Probe {
        fn screen_width(&self) -> u32 {
            16
        }

        fn screen_height(&self) -> u32 {
            16
        }

        fn fps(&self) -> u32 {
            60
        }

        fn init(&mut self, _textures: &mut dyn TextureFactory) -> anyhow::Result<()> {
            Ok(())
        }

        fn update(&mut self, input: InputState) {
            self.updates += 1;
            self.seen.push(input);
        }

        fn draw(&self, ctx: &mut dyn Context, _offscreen: &Texture) {
            ctx.draw_rect(
                self.updates as f64,
                0.0,
                1.0,
                1.0,
                Color::from_rgb(255, 255, 255, 255),
            );
        }
    }

    struct Harness {
        frame_loop: FrameLoop<Probe>,
        input: Sender<InputState>,
        ticks: Sender<Instant>,
        draws: Sender<DrawRequest>,
    }

    fn harness() -> Harness {
        let (input_tx, input_rx) = crossbeam_channel::unbounded();
        let (tick_tx, tick_rx) = crossbeam_channel::unbounded();
        let (draw_tx, draw_rx) = crossbeam_channel::unbounded();
        let offscreen = Texture {
            id: TextureId(0),
            width: 16,
            height: 16,
        };
        Harness {
            frame_loop: FrameLoop::new(Probe::new(), offscreen, input_rx, tick_rx, draw_rx),
            input: input_tx,
            ticks: tick_tx,
            draws: draw_tx,
        }
    }

    fn tap(x: i32, y: i32) -> InputState {
        InputState { tapped: true, x, y }
    }

    /// Request a frame and return the x coordinate the probe drew, i.e.
    /// the update count the draw observed.
    fn request_draw(h: &mut Harness) -> f64 {
        let (reply_tx, reply_rx) = crossbeam_channel::bounded(1);
        h.draws.send(reply_tx).unwrap();
        assert!(h.frame_loop.step());
        let list = reply_rx.recv().unwrap();
        match list.commands() {
            [DrawCommand::Rect { x, .. }] => *x,
            other => panic!("unexpected draw list: {:?}", other),
        }
    }

    #[test]
    fn one_update_per_tick() {
        let mut h = harness();
        for _ in 0..5 {
            h.ticks.send(Instant::now()).unwrap();
            assert!(h.frame_loop.step());
        }
        assert_eq!(h.frame_loop.game.updates, 5);
    }

    #[test]
    fn press_is_seen_by_exactly_one_tick() {
        let mut h = harness();
        h.input.send(tap(10, 20)).unwrap();
        assert!(h.frame_loop.step());
        for _ in 0..3 {
            h.ticks.send(Instant::now()).unwrap();
            assert!(h.frame_loop.step());
        }
        assert_eq!(
            h.frame_loop.game.seen,
            vec![tap(10, 20), InputState::default(), InputState::default()]
        );
    }

    #[test]
    fn later_input_overwrites_earlier() {
        let mut h = harness();
        h.input.send(tap(1, 1)).unwrap();
        assert!(h.frame_loop.step());
        h.input.send(tap(2, 2)).unwrap();
        assert!(h.frame_loop.step());
        h.ticks.send(Instant::now()).unwrap();
        assert!(h.frame_loop.step());
        assert_eq!(h.frame_loop.game.seen, vec![tap(2, 2)]);
    }

    #[test]
    fn draw_observes_most_recent_update() {
        let mut h = harness();
        for _ in 0..2 {
            h.ticks.send(Instant::now()).unwrap();
            assert!(h.frame_loop.step());
        }
        assert_eq!(request_draw(&mut h), 2.0);

        h.ticks.send(Instant::now()).unwrap();
        assert!(h.frame_loop.step());
        assert_eq!(request_draw(&mut h), 3.0);
    }

    #[test]
    fn one_draw_list_per_request() {
        let mut h = harness();
        let (reply_tx, reply_rx) = crossbeam_channel::bounded(1);
        h.draws.send(reply_tx).unwrap();
        assert!(h.frame_loop.step());
        assert!(reply_rx.recv().is_ok());
        assert!(reply_rx.recv().is_err());
    }

    #[test]
    fn stops_when_peers_hang_up() {
        let mut h = harness();
        drop(h.input);
        drop(h.ticks);
        drop(h.draws);
        assert!(!h.frame_loop.step());
    }
}
