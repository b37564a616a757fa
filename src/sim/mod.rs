//! Simulation module
//!
//! Physics lives here, with no rendering or platform dependencies:
//! - Fixed timestep only
//! - Y-up coordinates, pixels as the length unit
//! - The space is passed explicitly; there is no global world

pub mod space;
pub mod world;

pub use space::{BodyDesc, BodyHandle, ColliderShape, SharedSpace, Space};
pub use world::{boundary_segments, create_world};
