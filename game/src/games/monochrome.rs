use engine::graphics::{Color, Context, Texture, TextureFactory};
use engine::input::InputState;
use engine::Game;

/// Fills the screen with a gray level sweeping between black and white.
/// A tap reverses the sweep direction.
pub struct Monochrome {
    shade: i32,
    direction: i32,
}

impl Monochrome {
    pub fn new() -> Self {
        Monochrome {
            shade: 0,
            direction: 1,
        }
    }
}

impl Game for Monochrome {
    fn screen_width(&self) -> u32 {
        256
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

    fn update(&mut self, input: InputState) {
        if input.tapped {
            self.direction = -self.direction;
        }
        self.shade += self.direction;
        if self.shade < 0 {
            self.shade = 0;
            self.direction = 1;
        } else if self.shade > 255 {
            self.shade = 255;
            self.direction = -1;
        }
    }

    fn draw(&self, ctx: &mut dyn Context, _offscreen: &Texture) {
        let shade = self.shade as u8;
        ctx.fill(Color::from_rgb(shade, shade, shade, 255));
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sweeps_one_level_per_tick() {
        let mut game = Monochrome::new();
        for _ in 0..10 {
            game.update(InputState::default());
        }
        assert_eq!(game.shade, 10);
    }

    #[test]
    fn bounces_off_white() {
        let mut game = Monochrome::new();
        for _ in 0..300 {
            game.update(InputState::default());
        }
        // 255 reached at tick 255; tick 256 clamps and reverses; 44 more
        // ticks sweep back down.
        assert_eq!(game.shade, 211);
        assert_eq!(game.direction, -1);
    }

    #[test]
    fn tap_reverses_direction_once() {
        let mut game = Monochrome::new();
        for _ in 0..10 {
            game.update(InputState::default());
        }
        game.update(InputState {
            tapped: true,
            x: 0,
            y: 0,
        });
        assert_eq!(game.shade, 9);
        // The press was consumed; neutral ticks keep the new direction.
        game.update(InputState::default());
        assert_eq!(game.shade, 8);
    }
}
