mod games;

use std::env;

use games::{Blank, Monochrome, Rects, Rotating, Sprites};

const SCALE: u32 = 2;

fn main() -> anyhow::Result<()> {
    let name = env::args().nth(1).unwrap_or_default();
    match name.as_str() {
        "blank" => engine::run(Blank::new(), "Blank", SCALE),
        "monochrome" => engine::run(Monochrome::new(), "Monochrome", SCALE),
        "rects" => engine::run(Rects::new(), "Rects", SCALE),
        "sprites" => engine::run(Sprites::new(), "Sprites", SCALE),
        // Anything else, including no argument, runs the default demo.
        _ => engine::run(Rotating::new(), "Rotating", SCALE),
    }
}
