//! Frame pacing
//!
//! winit has no frame-rate cap of its own; the event loop sleeps until
//! [`FrameLimiter::next_deadline`] and only then requests a redraw.

use std::time::{Duration, Instant};

/// Caps the frame rate at a fixed number of frames per second
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    period: Duration,
    next_deadline: Instant,
}

impl FrameLimiter {
    pub fn new(fps: u32, now: Instant) -> Self {
        Self {
            period: Duration::from_secs(1) / fps.max(1),
            next_deadline: now,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Earliest instant the next frame may start
    pub fn next_deadline(&self) -> Instant {
        self.next_deadline
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_deadline
    }

    /// Start a frame if one is due. Early requests (redraws the window
    /// system asks for on its own) are refused and leave the schedule as is.
    pub fn try_begin_frame(&mut self, now: Instant) -> bool {
        if !self.is_due(now) {
            return false;
        }
        self.begin_frame(now);
        true
    }

    /// Record the start of a frame and schedule the next one
    pub fn begin_frame(&mut self, now: Instant) {
        let scheduled = self.next_deadline + self.period;
        // More than a frame behind: resync instead of bursting to catch up
        self.next_deadline = if scheduled < now {
            now + self.period
        } else {
            scheduled
        };
    }
}

/// Rolling frames-per-second over the last 60 frames
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame_times: [Option<Instant>; 60],
    frame_index: usize,
    fps: u32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frame_times: [None; 60],
            frame_index: 0,
            fps: 0,
        }
    }

    /// Record a presented frame; returns true once per full window of frames
    pub fn record(&mut self, now: Instant) -> bool {
        let window = self.frame_times.len();
        self.frame_times[self.frame_index] = Some(now);
        self.frame_index = (self.frame_index + 1) % window;

        // Oldest sample is the one about to be overwritten
        if let Some(oldest) = self.frame_times[self.frame_index] {
            let elapsed = now.duration_since(oldest).as_secs_f64();
            if elapsed > 0.0 {
                self.fps = ((window - 1) as f64 / elapsed).round() as u32;
            }
        }
        self.frame_index == 0
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}
