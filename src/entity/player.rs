//! The keyboard-controlled player

use glam::Vec2;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use super::{Entity, FrameContext};
use crate::consts::*;
use crate::flip_y;
use crate::platform::Key;
use crate::sim::{BodyDesc, BodyHandle, ColliderShape, Space};
use crate::sprite::{Sprite, TextureHandle};

/// Ordered key bindings: up, down, left, right.
///
/// "Down" is bound but has no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings(pub [Key; 4]);

impl KeyBindings {
    pub const ARROWS: Self = Self([Key::Up, Key::Down, Key::Left, Key::Right]);

    pub fn up(&self) -> Key {
        self.0[0]
    }

    pub fn left(&self) -> Key {
        self.0[2]
    }

    pub fn right(&self) -> Key {
        self.0[3]
    }
}

/// The player: a box body that never rotates
pub struct Player {
    body: BodyHandle,
    keys: KeyBindings,
    sprite: Mutex<Sprite>,
}

impl Player {
    /// Create the player at `position` and register its body with `space`.
    ///
    /// The body is placed at `position` as given (no Y flip), unlike
    /// [`Ball::new`](super::Ball::new); the first update flips it for display.
    pub fn new(space: &mut Space, position: Vec2, keys: KeyBindings, texture: TextureHandle) -> Self {
        let mut sprite = Sprite::new(texture);
        let size = sprite.global_bounds().size();
        sprite.center_origin();
        sprite.set_position(position);

        let body = space.add_body(BodyDesc {
            position,
            shape: ColliderShape::Box {
                width: size.x,
                height: size.y,
            },
            mass: BODY_MASS,
            elasticity: 0.0,
        });

        Self {
            body,
            keys,
            sprite: Mutex::new(sprite),
        }
    }

    pub fn body(&self) -> BodyHandle {
        self.body
    }
}

impl Entity for Player {
    fn update(&self, ctx: &mut FrameContext<'_>) {
        let space = &mut *ctx.space;

        space.set_angle(self.body, 0.0);
        self.sprite
            .lock()
            .set_position(flip_y(space.position(self.body)));

        let v = space.velocity(self.body);
        if ctx.keys.is_pressed(self.keys.up()) {
            space.set_velocity(self.body, Vec2::new(v.x, JUMP_VELOCITY));
        }
        if ctx.keys.is_pressed(self.keys.left()) {
            space.add_velocity(self.body, Vec2::new(-STRAFE_DELTA, 0.0));
        }
        if ctx.keys.is_pressed(self.keys.right()) {
            space.add_velocity(self.body, Vec2::new(STRAFE_DELTA, 0.0));
        }
    }

    fn sprite(&self) -> Sprite {
        *self.sprite.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::test_support::{HeldKeys, texture};
    use crate::sim::create_world;
    use proptest::prelude::*;

    fn spawn_player(space: &mut Space) -> Player {
        Player::new(
            space,
            Vec2::new(400.0, 0.0),
            KeyBindings::ARROWS,
            texture(0, 32, 48),
        )
    }

    fn update(player: &Player, space: &mut Space, keys: &HeldKeys) {
        player.update(&mut FrameContext { space, keys });
    }

    #[test]
    fn test_collider_matches_sprite_bounds() {
        let mut space = create_world();
        let player = spawn_player(&mut space);

        let sprite = player.sprite();
        assert_eq!(sprite.origin(), Vec2::new(16.0, 24.0));
        assert_eq!(sprite.position(), Vec2::new(400.0, 0.0));
        // Body stored with raw Y
        assert_eq!(space.position(player.body()), Vec2::new(400.0, 0.0));
        assert!((space.mass(player.body()) - BODY_MASS).abs() < 1e-4);
    }

    #[test]
    fn test_down_has_no_effect() {
        let mut space = create_world();
        let player = spawn_player(&mut space);
        space.set_velocity(player.body(), Vec2::new(3.0, -7.0));

        update(&player, &mut space, &HeldKeys::of(&[Key::Down]));
        assert_eq!(space.velocity(player.body()), Vec2::new(3.0, -7.0));
    }

    #[test]
    fn test_up_and_right_combine() {
        let mut space = create_world();
        let player = spawn_player(&mut space);
        space.set_velocity(player.body(), Vec2::new(5.0, -120.0));

        update(&player, &mut space, &HeldKeys::of(&[Key::Up, Key::Right]));
        assert_eq!(
            space.velocity(player.body()),
            Vec2::new(5.0 + STRAFE_DELTA, JUMP_VELOCITY)
        );
    }

    #[test]
    fn test_wasd_bindings() {
        let mut space = create_world();
        let wasd = KeyBindings([Key::W, Key::S, Key::A, Key::D]);
        let player = Player::new(&mut space, Vec2::ZERO, wasd, texture(0, 8, 8));

        update(&player, &mut space, &HeldKeys::of(&[Key::A]));
        assert_eq!(space.velocity(player.body()).x, -STRAFE_DELTA);

        // Arrow keys are not bound here
        update(&player, &mut space, &HeldKeys::of(&[Key::Left]));
        assert_eq!(space.velocity(player.body()).x, -STRAFE_DELTA);
    }

    proptest! {
        #[test]
        fn prop_render_position_flipped_and_rotation_zero(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
            angle in -3.0f32..3.0,
        ) {
            let mut space = create_world();
            let player = spawn_player(&mut space);
            space.set_position(player.body(), Vec2::new(x, y));
            space.set_angle(player.body(), angle);

            update(&player, &mut space, &HeldKeys::default());

            let sprite = player.sprite();
            prop_assert_eq!(sprite.position(), Vec2::new(x, -y));
            prop_assert_eq!(sprite.rotation(), 0.0);
            prop_assert_eq!(space.angle(player.body()), 0.0);
        }

        #[test]
        fn prop_up_sets_vertical_velocity(
            vx in -500.0f32..500.0,
            vy in -500.0f32..500.0,
        ) {
            let mut space = create_world();
            let player = spawn_player(&mut space);
            space.set_velocity(player.body(), Vec2::new(vx, vy));

            update(&player, &mut space, &HeldKeys::of(&[Key::Up]));

            prop_assert_eq!(space.velocity(player.body()), Vec2::new(vx, JUMP_VELOCITY));
        }

        #[test]
        fn prop_left_and_right_cancel(
            vx in -500.0f32..500.0,
            vy in -500.0f32..500.0,
        ) {
            let mut space = create_world();
            let player = spawn_player(&mut space);
            space.set_velocity(player.body(), Vec2::new(vx, vy));

            update(&player, &mut space, &HeldKeys::of(&[Key::Left, Key::Right]));

            let v = space.velocity(player.body());
            prop_assert!((v.x - vx).abs() < 1e-3);
            prop_assert_eq!(v.y, vy);
        }
    }
}
