use std::f64::consts::PI;

use anyhow::Context as _;
use engine::graphics::matrix::{ColorMatrix, GeometryMatrix};
use engine::graphics::{Color, Context, Texture, TextureFactory};
use engine::input::InputState;
use engine::Game;

/// The default demo: the sprite spinning about its center, one tenth of a
/// turn per second.
pub struct Rotating {
    texture: Option<Texture>,
    x: u64,
}

impl Rotating {
    pub fn new() -> Self {
        Rotating {
            texture: None,
            x: 0,
        }
    }

    fn angle(&self) -> f64 {
        self.x as f64 * 2.0 * PI / f64::from(self.fps() * 10)
    }
}

impl Game for Rotating {
    fn screen_width(&self) -> u32 {
        256
    }

    fn screen_height(&self) -> u32 {
        240
    }

    fn fps(&self) -> u32 {
        60
    }

    fn init(&mut self, textures: &mut dyn TextureFactory) -> anyhow::Result<()> {
        let image = image::open("sprite.png").context("failed to open sprite.png")?;
        self.texture = Some(textures.texture_from_image(&image)?);
        Ok(())
    }

    fn update(&mut self, _input: InputState) {
        self.x += 1;
    }

    fn draw(&self, ctx: &mut dyn Context, _offscreen: &Texture) {
        ctx.fill(Color::from_rgb(128, 128, 255, 255));

        let texture = match self.texture {
            Some(texture) => texture,
            None => return,
        };
        let (tx, ty) = (f64::from(texture.width), f64::from(texture.height));
        let mut geometry = GeometryMatrix::identity();
        geometry.translate(-tx / 2.0, -ty / 2.0);
        geometry.rotate(self.angle());
        geometry.translate(tx / 2.0, ty / 2.0);
        let center_x = f64::from(self.screen_width()) / 2.0;
        let center_y = f64::from(self.screen_height()) / 2.0;
        geometry.translate(center_x - tx / 2.0, center_y - ty / 2.0);

        ctx.draw_texture(texture.id, geometry, ColorMatrix::identity());
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn advances_one_step_per_tick() {
        let mut game = Rotating::new();
        for _ in 0..7 {
            game.update(InputState::default());
        }
        assert_eq!(game.x, 7);
    }

    #[test]
    fn half_turn_after_five_seconds_of_ticks() {
        let mut game = Rotating::new();
        for _ in 0..300 {
            game.update(InputState::default());
        }
        assert!((game.angle() - PI).abs() < 1e-12);
    }

    #[test]
    fn simulated_time_is_exact() {
        let mut game = Rotating::new();
        for _ in 0..90 {
            game.update(InputState::default());
        }
        let elapsed = game.x as f64 / f64::from(game.fps());
        assert_eq!(elapsed, 1.5);
    }
}
