mod blank;
mod monochrome;
mod rects;
mod rotating;
mod sprites;

pub use blank::Blank;
pub use monochrome::Monochrome;
pub use rects::Rects;
pub use rotating::Rotating;
pub use sprites::Sprites;
