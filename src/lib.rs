//! Ball Drop - a small 2D physics demo
//!
//! Core modules:
//! - `sim`: Physics space and world setup (rapier2d, no rendering dependencies)
//! - `entity`: Player and ball entities pairing a body with a sprite
//! - `spawner`: Background thread dropping balls into the world
//! - `game`: Per-frame loop (step, sync, draw)
//! - `renderer`: wgpu sprite pipeline
//! - `platform`: Keyboard state and frame pacing

pub mod entity;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod spawner;
pub mod sprite;

pub use game::Game;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one step per rendered frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Playfield dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Downward acceleration in simulation space (Y-up, pixels/s²)
    pub const GRAVITY: f32 = -900.0;

    /// Mass shared by the player and every ball
    pub const BODY_MASS: f32 = 1.0;
    /// Ball bounciness
    pub const BALL_ELASTICITY: f32 = 0.95;

    /// Vertical velocity set (not added) while "up" is held
    pub const JUMP_VELOCITY: f32 = 400.0;
    /// Horizontal velocity added per frame while "left"/"right" is held
    pub const STRAFE_DELTA: f32 = 10.0;

    /// Delay between ball spawns
    pub const SPAWN_INTERVAL_MS: u64 = 500;
}

/// Mirror a point across the X axis.
///
/// Simulation space is Y-up, screen space is Y-down; the same flip maps in
/// both directions.
#[inline]
pub fn flip_y(v: Vec2) -> Vec2 {
    Vec2::new(v.x, -v.y)
}

/// Convert a simulation angle (radians, counter-clockwise) to a sprite
/// rotation (degrees, clockwise)
#[inline]
pub fn radians_to_sprite_degrees(angle: f32) -> f32 {
    180.0 / std::f32::consts::PI * -angle
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_flip_y_is_involution() {
        let p = Vec2::new(12.5, -340.0);
        assert_eq!(flip_y(p), Vec2::new(12.5, 340.0));
        assert_eq!(flip_y(flip_y(p)), p);
    }

    #[test]
    fn test_sprite_degrees_sign() {
        assert_eq!(radians_to_sprite_degrees(0.0), 0.0);
        assert!((radians_to_sprite_degrees(PI / 2.0) + 90.0).abs() < 1e-4);
        assert!((radians_to_sprite_degrees(-PI) - 180.0).abs() < 1e-4);
    }
}
