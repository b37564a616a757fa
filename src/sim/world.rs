//! World setup: gravity and the static playfield boundary

use glam::Vec2;

use super::space::Space;
use crate::consts::*;

/// Boundary segments in simulation space: floor, left wall, right wall.
///
/// The playfield spans `y ∈ [-SCREEN_HEIGHT, 0]` so that flipping Y lands it
/// exactly on screen.
pub fn boundary_segments() -> [(Vec2, Vec2); 3] {
    let bottom_left = Vec2::new(0.0, -SCREEN_HEIGHT);
    let bottom_right = Vec2::new(SCREEN_WIDTH, -SCREEN_HEIGHT);
    [
        (bottom_left, bottom_right),
        (bottom_left, Vec2::new(0.0, 0.0)),
        (bottom_right, Vec2::new(SCREEN_WIDTH, 0.0)),
    ]
}

/// Create the simulation space with gravity and the static boundary.
///
/// Call once per game, before any entity is created.
pub fn create_world() -> Space {
    let mut space = Space::new(Vec2::new(0.0, GRAVITY));
    space.add_static_segments(&boundary_segments());
    log::info!(
        "World created: {}x{} playfield, gravity {}",
        SCREEN_WIDTH,
        SCREEN_HEIGHT,
        GRAVITY
    );
    space
}
