//! Frame rate and per-level visibility counts for periodic logging.

use std::fmt;
use std::time::{Duration, Instant};

use lodview_scene::ActiveLevel;

/// How many nodes showed each level in one frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LevelSummary {
    /// Count per level index.
    pub per_level: Vec<usize>,
    /// Nodes outside every range.
    pub hidden: usize,
}

impl LevelSummary {
    /// Count the selection of one frame.
    pub fn from_active(active: &[ActiveLevel]) -> Self {
        let mut summary = Self::default();
        for selection in active {
            match selection.level {
                Some(index) => {
                    if summary.per_level.len() <= index {
                        summary.per_level.resize(index + 1, 0);
                    }
                    summary.per_level[index] += 1;
                }
                None => summary.hidden += 1,
            }
        }
        summary
    }

    /// Nodes drawn at any level.
    pub fn visible(&self) -> usize {
        self.per_level.iter().sum()
    }
}

impl fmt::Display for LevelSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, count) in self.per_level.iter().enumerate() {
            write!(f, "L{index}:{count} ")?;
        }
        write!(f, "hidden:{}", self.hidden)
    }
}

/// Counts frames and reports the rate once per interval.
pub struct FrameStats {
    interval: Option<Duration>,
    window_start: Instant,
    frames: u32,
}

impl FrameStats {
    /// Report every `interval_s` seconds. Zero, negative, non-finite or
    /// unrepresentable intervals disable reporting.
    pub fn new(interval_s: f32) -> Self {
        Self::starting_at(interval_s, Instant::now())
    }

    /// As [`new`](Self::new) with an explicit start time.
    pub fn starting_at(interval_s: f32, start: Instant) -> Self {
        let interval = (interval_s > 0.0)
            .then(|| Duration::try_from_secs_f32(interval_s).ok())
            .flatten();
        Self {
            interval,
            window_start: start,
            frames: 0,
        }
    }

    /// Count a frame finished at `now`. Returns frames per second when an
    /// interval has elapsed, then starts a new one.
    pub fn record_frame(&mut self, now: Instant) -> Option<f64> {
        let interval = self.interval?;
        self.frames += 1;
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < interval {
            return None;
        }
        let fps = self.frames as f64 / elapsed.as_secs_f64();
        self.frames = 0;
        self.window_start = now;
        Some(fps)
    }
}
