//! WebGPU rendering module
//!
//! Sprites are drawn as textured quads built on the CPU each frame.

pub mod shapes;
pub mod sprite_pipeline;
pub mod texture;
pub mod vertex;

pub use sprite_pipeline::SpriteRenderState;
pub use texture::TextureData;

use crate::sprite::Sprite;

/// A render target the frame loop draws into
pub trait Canvas {
    type Error;

    /// Start a new frame filled with `color` (linear RGBA)
    fn clear(&mut self, color: [f32; 4]);

    /// Queue a sprite; later draws land on top
    fn draw(&mut self, sprite: &Sprite);

    /// Present everything drawn since the last `clear`
    fn display(&mut self) -> Result<(), Self::Error>;
}
