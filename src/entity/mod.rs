//! Game entities
//!
//! An entity pairs a body in the physics space with a sprite. The body is
//! owned by the space; the entity keeps only its handle. Sprites sit behind a
//! mutex so entities can be updated through shared references while the ball
//! collection is read-locked.

pub mod ball;
pub mod player;

pub use ball::Ball;
pub use player::{KeyBindings, Player};

use crate::platform::KeyState;
use crate::sim::Space;
use crate::sprite::Sprite;

/// Everything an entity may touch during its per-frame update
pub struct FrameContext<'a> {
    pub space: &'a mut Space,
    pub keys: &'a dyn KeyState,
}

/// Per-frame contract shared by every entity kind
pub trait Entity {
    /// Sync the sprite from the simulation (and apply input, if any)
    fn update(&self, ctx: &mut FrameContext<'_>);

    /// Snapshot of the sprite as of the last update
    fn sprite(&self) -> Sprite;
}
