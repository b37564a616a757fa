//! Background ball spawner
//!
//! A dedicated thread appends one ball to the shared collection per period.
//! The collection only grows: balls (and their bodies) live until the
//! process exits.
//!
//! Lock order is collection, then space. The frame loop takes them in the
//! same order when updating balls.

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use glam::Vec2;
use parking_lot::RwLock;

use crate::entity::Ball;
use crate::sim::SharedSpace;
use crate::sprite::TextureHandle;

/// Balls in spawn order, shared between the spawner (writer) and the frame
/// loop (reader)
pub type SharedBalls = Arc<RwLock<Vec<Ball>>>;

pub struct Spawner {
    space: SharedSpace,
    balls: SharedBalls,
    origin: Vec2,
    texture: TextureHandle,
    period: Duration,
}

impl Spawner {
    pub fn new(
        space: SharedSpace,
        balls: SharedBalls,
        origin: Vec2,
        texture: TextureHandle,
        period: Duration,
    ) -> Self {
        Self {
            space,
            balls,
            origin,
            texture,
            period,
        }
    }

    /// Append one ball; returns its id
    pub fn spawn_once(&self) -> usize {
        let mut balls = self.balls.write();
        let id = balls.len();
        let ball = {
            let mut space = self.space.lock();
            Ball::new(id, &mut space, self.origin, self.texture)
        };
        balls.push(ball);
        id
    }

    /// Run the spawn loop on its own thread, forever
    pub fn start(self) -> io::Result<JoinHandle<()>> {
        log::info!(
            "Spawner started: one ball every {:?} at ({}, {})",
            self.period,
            self.origin.x,
            self.origin.y
        );
        thread::Builder::new()
            .name("ball-spawner".to_string())
            .spawn(move || {
                loop {
                    let id = self.spawn_once();
                    log::debug!("Spawned ball {}", id);
                    thread::sleep(self.period);
                }
            })
    }
}
