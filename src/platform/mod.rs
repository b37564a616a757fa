//! Platform abstraction layer
//!
//! Handles the windowing-library specifics the game logic should not see:
//! - Keyboard state (`input`)
//! - Frame pacing and FPS tracking (`time`)

pub mod input;
pub mod time;

pub use input::{Key, KeyState, Keyboard};
pub use time::{FpsCounter, FrameLimiter};
