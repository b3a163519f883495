use engine::graphics::{Color, Context, Texture, TextureFactory};
use engine::input::InputState;
use engine::Game;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One random rectangle appears per tick, oldest first out once the
/// backlog is full.
const BACKLOG: usize = 512;

struct Rect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    color: Color,
}

pub struct Rects {
    rects: Vec<Rect>,
    rng: StdRng,
}

impl Rects {
    pub fn new() -> Self {
        Rects {
            rects: Vec::new(),
            rng: StdRng::from_entropy(),
        }
    }
}

impl Game for Rects {
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

    fn update(&mut self, _input: InputState) {
        let (w, h) = (self.screen_width(), self.screen_height());
        let width = self.rng.gen_range(8..=64);
        let height = self.rng.gen_range(8..=64);
        let x = self.rng.gen_range(0..w - width);
        let y = self.rng.gen_range(0..h - height);
        let color = Color::from_rgb(self.rng.gen(), self.rng.gen(), self.rng.gen(), 255);

        if self.rects.len() == BACKLOG {
            self.rects.remove(0);
        }
        self.rects.push(Rect {
            x: f64::from(x),
            y: f64::from(y),
            width: f64::from(width),
            height: f64::from(height),
            color,
        });
    }

    fn draw(&self, ctx: &mut dyn Context, _offscreen: &Texture) {
        ctx.fill(Color::from_rgb(0, 0, 0, 255));
        for rect in &self.rects {
            ctx.draw_rect(rect.x, rect.y, rect.width, rect.height, rect.color);
        }
    }
}
