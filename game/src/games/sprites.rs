use anyhow::Context as _;
use engine::graphics::matrix::{ColorMatrix, GeometryMatrix};
use engine::graphics::{Color, Context, Texture, TextureFactory};
use engine::input::InputState;
use engine::Game;

const COUNT: usize = 50;

struct Sprite {
    x: i32,
    y: i32,
    vx: i32,
    vy: i32,
}

impl Sprite {
    /// Move one step and reflect off the screen edges.
    fn update(&mut self, max_x: i32, max_y: i32) {
        self.x += self.vx;
        self.y += self.vy;
        if self.x < 0 || self.x > max_x {
            self.vx = -self.vx;
            self.x = self.x.clamp(0, max_x);
        }
        if self.y < 0 || self.y > max_y {
            self.vy = -self.vy;
            self.y = self.y.clamp(0, max_y);
        }
    }
}

/// A fleet of bouncing copies of the sprite texture.
pub struct Sprites {
    texture: Option<Texture>,
    sprites: Vec<Sprite>,
}

impl Sprites {
    pub fn new() -> Self {
        Sprites {
            texture: None,
            sprites: Vec::new(),
        }
    }

    /// Playable area for a sprite's top-left corner.
    fn bounds(&self) -> (i32, i32) {
        let texture = self.texture.expect("init has not run");
        (
            self.screen_width() as i32 - texture.width as i32,
            self.screen_height() as i32 - texture.height as i32,
        )
    }
}

impl Game for Sprites {
    fn screen_width(&self) -> u32 {
        320
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

        let (max_x, max_y) = self.bounds();
        // Deterministic spread; no physics, just distinct phases.
        self.sprites = (0..COUNT)
            .map(|i| {
                let i = i as i32;
                let dir_x = if i % 2 == 0 { 1 } else { -1 };
                let dir_y = if i % 3 == 0 { 1 } else { -1 };
                Sprite {
                    x: (i * 47) % max_x,
                    y: (i * 31) % max_y,
                    vx: dir_x * (1 + i % 3),
                    vy: dir_y * (1 + i % 2),
                }
            })
            .collect();
        Ok(())
    }

    fn update(&mut self, _input: InputState) {
        let (max_x, max_y) = self.bounds();
        for sprite in &mut self.sprites {
            sprite.update(max_x, max_y);
        }
    }

    fn draw(&self, ctx: &mut dyn Context, _offscreen: &Texture) {
        ctx.fill(Color::from_rgb(32, 32, 32, 255));

        let texture = match self.texture {
            Some(texture) => texture,
            None => return,
        };
        for sprite in &self.sprites {
            let mut geometry = GeometryMatrix::identity();
            geometry.translate(f64::from(sprite.x), f64::from(sprite.y));
            ctx.draw_texture(texture.id, geometry, ColorMatrix::identity());
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sprite() -> Sprite {
        Sprite {
            x: 10,
            y: 10,
            vx: 3,
            vy: -2,
        }
    }

    #[test]
    fn moves_by_velocity_each_tick() {
        let mut s = sprite();
        s.update(100, 100);
        assert_eq!((s.x, s.y), (13, 8));
    }

    #[test]
    fn reflects_off_edges() {
        let mut s = Sprite {
            x: 0,
            y: 0,
            vx: -3,
            vy: -2,
        };
        s.update(100, 100);
        assert_eq!((s.x, s.y), (0, 0));
        assert_eq!((s.vx, s.vy), (3, 2));
    }

    #[test]
    fn stays_in_bounds() {
        let mut s = sprite();
        for _ in 0..10_000 {
            s.update(97, 83);
            assert!((0..=97).contains(&s.x));
            assert!((0..=83).contains(&s.y));
        }
    }
}
