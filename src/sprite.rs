//! Sprite transform state
//!
//! Plain data, independent of the GPU: a texture reference plus position,
//! origin and rotation in screen space (Y down, rotation in degrees,
//! clockwise-positive).

use glam::Vec2;

/// Reference to a texture uploaded to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle {
    /// Renderer-assigned index
    pub id: u32,
    pub width: u32,
    pub height: u32,
}

impl TextureHandle {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    fn from_points(points: &[Vec2]) -> Self {
        let min = points.iter().copied().reduce(Vec2::min).unwrap_or(Vec2::ZERO);
        let max = points.iter().copied().reduce(Vec2::max).unwrap_or(Vec2::ZERO);
        Self {
            left: min.x,
            top: min.y,
            width: max.x - min.x,
            height: max.y - min.y,
        }
    }
}

/// A textured quad with its own transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    texture: TextureHandle,
    position: Vec2,
    origin: Vec2,
    /// Degrees, clockwise
    rotation: f32,
}

impl Sprite {
    pub fn new(texture: TextureHandle) -> Self {
        Self {
            texture,
            position: Vec2::ZERO,
            origin: Vec2::ZERO,
            rotation: 0.0,
        }
    }

    pub fn texture(&self) -> TextureHandle {
        self.texture
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn set_rotation(&mut self, degrees: f32) {
        self.rotation = degrees;
    }

    /// Untransformed texture rectangle
    pub fn local_bounds(&self) -> Rect {
        let size = self.texture.size();
        Rect {
            left: 0.0,
            top: 0.0,
            width: size.x,
            height: size.y,
        }
    }

    /// Map a local point to screen space
    pub fn transform_point(&self, local: Vec2) -> Vec2 {
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        let p = local - self.origin;
        // Y points down, so this matrix turns clockwise on screen
        Vec2::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos) + self.position
    }

    /// Quad corners in screen space: top-left, top-right, bottom-right,
    /// bottom-left (in texture terms)
    pub fn corners(&self) -> [Vec2; 4] {
        let size = self.texture.size();
        [
            self.transform_point(Vec2::ZERO),
            self.transform_point(Vec2::new(size.x, 0.0)),
            self.transform_point(size),
            self.transform_point(Vec2::new(0.0, size.y)),
        ]
    }

    /// Bounding box of the transformed quad
    pub fn global_bounds(&self) -> Rect {
        Rect::from_points(&self.corners())
    }

    /// Centre the origin on the texture
    pub fn center_origin(&mut self) {
        let bounds = self.local_bounds();
        self.origin = bounds.size() / 2.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texture(width: u32, height: u32) -> TextureHandle {
        TextureHandle { id: 0, width, height }
    }

    fn assert_close(a: Vec2, b: Vec2) {
        assert!((a - b).length() < 1e-3, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_new_sprite_bounds_are_texture_size() {
        let sprite = Sprite::new(texture(64, 32));
        let bounds = sprite.global_bounds();
        assert_eq!(bounds.size(), Vec2::new(64.0, 32.0));
        assert_eq!((bounds.left, bounds.top), (0.0, 0.0));
    }

    #[test]
    fn test_centered_origin_places_center_at_position() {
        let mut sprite = Sprite::new(texture(64, 32));
        sprite.center_origin();
        sprite.set_position(Vec2::new(100.0, 50.0));

        let bounds = sprite.global_bounds();
        assert_eq!(bounds.left, 68.0);
        assert_eq!(bounds.top, 34.0);
        assert_close(sprite.transform_point(Vec2::new(32.0, 16.0)), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_positive_rotation_is_clockwise_on_screen() {
        let mut sprite = Sprite::new(texture(10, 10));
        sprite.set_rotation(90.0);
        // Local +X maps to screen +Y (down): a clockwise quarter turn
        assert_close(sprite.transform_point(Vec2::new(10.0, 0.0)), Vec2::new(0.0, 10.0));
    }

    #[test]
    fn test_rotated_bounds_grow() {
        let mut sprite = Sprite::new(texture(20, 20));
        sprite.center_origin();
        sprite.set_rotation(45.0);
        let bounds = sprite.global_bounds();
        let diagonal = 20.0 * std::f32::consts::SQRT_2;
        assert!((bounds.width - diagonal).abs() < 1e-3);
        assert!((bounds.height - diagonal).abs() < 1e-3);
    }
}
