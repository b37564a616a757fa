//! Frame loop
//!
//! One `frame()` call: step the space by a fixed 1/60 s, sync the player and
//! every ball, then clear, draw and present. The window layer reports a close
//! request through [`Game::close`]; after that no frame runs again.

use std::time::Duration;

use glam::Vec2;

use crate::consts::SIM_DT;
use crate::entity::{Entity, FrameContext, Player};
use crate::platform::KeyState;
use crate::renderer::Canvas;
use crate::settings::Settings;
use crate::sim::{SharedSpace, create_world};
use crate::spawner::{SharedBalls, Spawner};
use crate::sprite::TextureHandle;

/// Window lifecycle as seen by the frame loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    Open,
    /// Terminal
    Closed,
}

/// Result of a single `frame()` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Presented,
    /// Window already closed; nothing was stepped or drawn
    Closed,
}

pub struct Game {
    space: SharedSpace,
    player: Player,
    balls: SharedBalls,
    state: WindowState,
    clear_color: [f32; 4],
    frames: u64,
}

impl Game {
    /// Build the world and the player
    pub fn new(settings: &Settings, player_texture: TextureHandle) -> Self {
        let mut space = create_world();
        let player = Player::new(
            &mut space,
            settings.player_start,
            settings.player_keys,
            player_texture,
        );

        Self {
            space: space.shared(),
            player,
            balls: SharedBalls::default(),
            state: WindowState::Open,
            clear_color: settings.clear_color,
            frames: 0,
        }
    }

    /// Spawner feeding this game's ball collection
    pub fn spawner(&self, origin: Vec2, texture: TextureHandle, period: Duration) -> Spawner {
        Spawner::new(
            self.space.clone(),
            self.balls.clone(),
            origin,
            texture,
            period,
        )
    }

    pub fn space(&self) -> &SharedSpace {
        &self.space
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn balls(&self) -> &SharedBalls {
        &self.balls
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == WindowState::Open
    }

    /// Frames presented so far
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Handle a window close request
    pub fn close(&mut self) {
        if self.state == WindowState::Open {
            log::info!(
                "Window closed after {} frames ({} physics steps)",
                self.frames,
                self.space.lock().step_count()
            );
            self.state = WindowState::Closed;
        }
    }

    /// Run one frame
    pub fn frame<C: Canvas>(
        &mut self,
        keys: &dyn KeyState,
        canvas: &mut C,
    ) -> Result<FrameStatus, C::Error> {
        if self.state == WindowState::Closed {
            return Ok(FrameStatus::Closed);
        }

        // The player is never touched by the spawner: no collection lock
        {
            let mut space = self.space.lock();
            space.step(SIM_DT);
            self.player.update(&mut FrameContext {
                space: &mut space,
                keys,
            });
        }

        // Read lock held through drawing so update and draw see the same balls
        let balls = self.balls.read();
        {
            let mut space = self.space.lock();
            let mut ctx = FrameContext {
                space: &mut space,
                keys,
            };
            for ball in balls.iter() {
                ball.update(&mut ctx);
            }
        }

        canvas.clear(self.clear_color);
        canvas.draw(&self.player.sprite());
        for ball in balls.iter() {
            canvas.draw(&ball.sprite());
        }
        drop(balls);

        canvas.display()?;
        self.frames += 1;
        Ok(FrameStatus::Presented)
    }
}
