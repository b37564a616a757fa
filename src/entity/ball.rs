//! Falling balls

use glam::Vec2;
use parking_lot::Mutex;

use super::{Entity, FrameContext};
use crate::consts::*;
use crate::sim::{BodyDesc, BodyHandle, ColliderShape, Space};
use crate::sprite::{Sprite, TextureHandle};
use crate::{flip_y, radians_to_sprite_degrees};

/// A bouncy circular body with a sprite that follows its rotation
pub struct Ball {
    id: usize,
    body: BodyHandle,
    sprite: Mutex<Sprite>,
}

impl Ball {
    /// Create a ball at screen `position` and register its body with `space`
    pub fn new(id: usize, space: &mut Space, position: Vec2, texture: TextureHandle) -> Self {
        let mut sprite = Sprite::new(texture);
        let size = sprite.global_bounds().size();
        sprite.center_origin();
        sprite.set_position(position);

        let body = space.add_body(BodyDesc {
            position: flip_y(position),
            shape: ColliderShape::Circle { radius: size.x / 2.0 },
            mass: BODY_MASS,
            elasticity: BALL_ELASTICITY,
        });

        Self {
            id,
            body,
            sprite: Mutex::new(sprite),
        }
    }

    /// Spawn order, starting at 0
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn body(&self) -> BodyHandle {
        self.body
    }
}

impl Entity for Ball {
    fn update(&self, ctx: &mut FrameContext<'_>) {
        let position = flip_y(ctx.space.position(self.body));
        let rotation = radians_to_sprite_degrees(ctx.space.angle(self.body));

        let mut sprite = self.sprite.lock();
        sprite.set_position(position);
        sprite.set_rotation(rotation);
    }

    fn sprite(&self) -> Sprite {
        *self.sprite.lock()
    }
}
