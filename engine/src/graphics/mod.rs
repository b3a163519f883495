pub mod backend;
pub mod color;
pub mod matrix;

pub use color::Color;

use matrix::{ColorMatrix, GeometryMatrix};

/// Opaque device-assigned texture id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub(crate) usize);

/// A texture handle plus its dimensions. Handles are created by the device
/// at init time and are read-only from the game's perspective.
#[derive(Debug, Clone, Copy)]
pub struct Texture {
    pub id: TextureId,
    pub width: u32,
    pub height: u32,
}

/// Creates textures from decoded images. Implemented by the graphics
/// device; only available during [`crate::Game::init`].
pub trait TextureFactory {
    fn texture_from_image(&mut self, image: &image::DynamicImage) -> anyhow::Result<Texture>;
}

/// Per-frame drawing interface handed to [`crate::Game::draw`].
pub trait Context {
    /// Fill the whole screen with a color.
    fn fill(&mut self, color: Color);
    /// Fill an axis-aligned rectangle.
    fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color);
    /// Draw a texture under a geometry and color transform.
    fn draw_texture(&mut self, texture: TextureId, geometry: GeometryMatrix, color: ColorMatrix);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Fill(Color),
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    },
    Texture {
        texture: TextureId,
        geometry: GeometryMatrix,
        color: ColorMatrix,
    },
}

/// An ordered record of one frame's draw calls.
///
/// Draw calls are recorded on the frame-loop thread and replayed by the
/// device on the thread that owns the rendering context, so the two threads
/// only ever exchange plain data.
#[derive(Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        DrawList::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

impl Context for DrawList {
    fn fill(&mut self, color: Color) {
        self.commands.push(DrawCommand::Fill(color));
    }

    fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn draw_texture(&mut self, texture: TextureId, geometry: GeometryMatrix, color: ColorMatrix) {
        self.commands.push(DrawCommand::Texture {
            texture,
            geometry,
            color,
        });
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn records_commands_in_call_order() {
        let mut list = DrawList::new();
        list.fill(Color::from_rgb(1, 2, 3, 255));
        list.draw_rect(4.0, 5.0, 6.0, 7.0, Color::from_rgb(8, 9, 10, 255));
        list.draw_texture(
            TextureId(3),
            GeometryMatrix::identity(),
            ColorMatrix::identity(),
        );

        assert_eq!(
            list.commands(),
            &[
                DrawCommand::Fill(Color::from_rgb(1, 2, 3, 255)),
                DrawCommand::Rect {
                    x: 4.0,
                    y: 5.0,
                    width: 6.0,
                    height: 7.0,
                    color: Color::from_rgb(8, 9, 10, 255),
                },
                DrawCommand::Texture {
                    texture: TextureId(3),
                    geometry: GeometryMatrix::identity(),
                    color: ColorMatrix::identity(),
                },
            ]
        );
    }
}
