//! Fixed-timestep frame loop.
//!
//! Camera animation and LOD cross-fades advance in fixed 60 Hz steps taken
//! from an accumulator, independent of how fast frames are produced.
//! [`FramePacer`] caps the frame rate when a target is configured.

use std::time::{Duration, Instant};
use tracing::warn;

/// Fixed simulation timestep: 60 Hz.
pub const FIXED_DT: f64 = 1.0 / 60.0;

/// Longest frame time fed into the accumulator.
/// Longer frames are clamped and the simulation slows down instead.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Accumulator state for the fixed-step update.
///
/// Call [`tick`](Self::tick) once per frame before drawing.
pub struct GameLoop {
    previous_time: Instant,
    accumulator: f64,
    total_sim_time: f64,
    frame_count: u64,
    update_count: u64,
}

impl GameLoop {
    /// Creates a new `GameLoop` starting from the current instant.
    pub fn new() -> Self {
        Self {
            previous_time: Instant::now(),
            accumulator: 0.0,
            total_sim_time: 0.0,
            frame_count: 0,
            update_count: 0,
        }
    }

    /// Measure the time since the previous tick and run the due updates.
    ///
    /// Returns the number of updates run.
    pub fn tick(&mut self, update_fn: impl FnMut(f64)) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.previous_time).as_secs_f64();
        self.previous_time = now;
        self.advance(frame_time, update_fn)
    }

    /// Run the updates due after `frame_time` seconds.
    ///
    /// `update_fn(FIXED_DT)` is called zero or more times; the count is returned.
    pub fn advance(&mut self, frame_time: f64, mut update_fn: impl FnMut(f64)) -> u32 {
        let mut frame_time = frame_time.max(0.0);
        if frame_time > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            frame_time = MAX_FRAME_TIME;
        }

        self.accumulator += frame_time;
        let mut steps = 0;
        while self.accumulator >= FIXED_DT {
            update_fn(FIXED_DT);
            self.total_sim_time += FIXED_DT;
            self.accumulator -= FIXED_DT;
            steps += 1;
        }

        self.update_count += u64::from(steps);
        self.frame_count += 1;
        steps
    }

    /// Returns the total number of frames ticked.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Returns the total number of simulation update steps executed.
    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Returns the total simulation time in seconds.
    pub fn total_sim_time(&self) -> f64 {
        self.total_sim_time
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}

/// Sleeps between frames to hold a target frame rate.
pub struct FramePacer {
    frame_time: Option<Duration>,
    next_deadline: Instant,
}

impl FramePacer {
    /// A pacer for `target_fps` frames per second; 0 disables pacing.
    pub fn new(target_fps: u32) -> Self {
        let frame_time =
            (target_fps > 0).then(|| Duration::from_secs_f64(1.0 / target_fps as f64));
        Self {
            frame_time,
            next_deadline: Instant::now(),
        }
    }

    /// Duration of one frame, `None` when unpaced.
    pub fn frame_time(&self) -> Option<Duration> {
        self.frame_time
    }

    /// Block until the next frame is due.
    ///
    /// A frame that overran its slot starts the schedule over instead of
    /// rushing to catch up.
    pub fn wait(&mut self) {
        let Some(frame_time) = self.frame_time else {
            return;
        };
        let now = Instant::now();
        if self.next_deadline > now {
            std::thread::sleep(self.next_deadline - now);
            self.next_deadline += frame_time;
        } else {
            self.next_deadline = now + frame_time;
        }
    }
}
