//! Quad generation for sprites

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::sprite::Sprite;

/// Convert screen pixels (origin top-left, Y down) to normalized device
/// coordinates (origin centre, Y up)
#[inline]
pub fn screen_to_ndc(p: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(p.x / viewport.x * 2.0 - 1.0, 1.0 - p.y / viewport.y * 2.0)
}

/// Two triangles covering the sprite's transformed quad
pub fn sprite_quad(sprite: &Sprite, viewport: Vec2) -> [Vertex; 6] {
    let [tl, tr, br, bl] = sprite.corners().map(|c| screen_to_ndc(c, viewport));
    let v = |p: Vec2, u: f32, w: f32| Vertex::new(p.x, p.y, u, w, colors::WHITE);

    [
        v(tl, 0.0, 0.0),
        v(bl, 0.0, 1.0),
        v(br, 1.0, 1.0),
        v(tl, 0.0, 0.0),
        v(br, 1.0, 1.0),
        v(tr, 1.0, 0.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprite::TextureHandle;

    const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn test_screen_corners_map_to_ndc_corners() {
        assert_eq!(screen_to_ndc(Vec2::ZERO, VIEWPORT), Vec2::new(-1.0, 1.0));
        assert_eq!(screen_to_ndc(VIEWPORT, VIEWPORT), Vec2::new(1.0, -1.0));
        assert_eq!(screen_to_ndc(VIEWPORT / 2.0, VIEWPORT), Vec2::ZERO);
    }

    #[test]
    fn test_full_screen_sprite_covers_viewport() {
        let sprite = Sprite::new(TextureHandle {
            id: 0,
            width: 800,
            height: 600,
        });
        let quad = sprite_quad(&sprite, VIEWPORT);

        assert_eq!(quad[0].position, [-1.0, 1.0]);
        assert_eq!(quad[0].uv, [0.0, 0.0]);
        assert_eq!(quad[2].position, [1.0, -1.0]);
        assert_eq!(quad[2].uv, [1.0, 1.0]);
        assert_eq!(quad[5].position, [1.0, 1.0]);
        assert_eq!(quad[5].uv, [1.0, 0.0]);
    }

    #[test]
    fn test_quarter_turn_moves_top_right_corner_down() {
        let mut sprite = Sprite::new(TextureHandle {
            id: 0,
            width: 100,
            height: 100,
        });
        sprite.center_origin();
        sprite.set_position(VIEWPORT / 2.0);
        sprite.set_rotation(90.0);

        let quad = sprite_quad(&sprite, VIEWPORT);
        // Texture top-right corner (uv 1,0) ends up bottom-right on screen
        let tr = Vec2::from(quad[5].position);
        let expected = screen_to_ndc(Vec2::new(450.0, 350.0), VIEWPORT);
        assert!((tr - expected).length() < 1e-4, "{:?} != {:?}", tr, expected);
    }
}
