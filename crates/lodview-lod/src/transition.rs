//! Optional cross-fade between LOD levels.
//!
//! Selection itself is a hard cutover. [`LodCrossfade`] sits beside it: the
//! renderer reports which level index each object selected this frame, and
//! the tracker turns index changes into timed transitions with alpha weights
//! for the outgoing and incoming representation.

use std::collections::HashMap;
use std::hash::Hash;

/// The transition state of one tracked object.
#[derive(Clone, Debug, PartialEq)]
pub enum LodTransitionState {
    /// No transition in progress.
    Stable {
        /// Currently active level, `None` when nothing is visible.
        level: Option<usize>,
    },
    /// Fading from one level to another.
    Transitioning {
        /// Level being faded out.
        from: Option<usize>,
        /// Level being faded in.
        to: Option<usize>,
        /// Progress from 0.0 (just started) to 1.0 (complete).
        progress: f32,
    },
}

/// Tracks level changes per object and produces cross-fade weights.
///
/// A duration of zero disables fading: every change completes immediately.
pub struct LodCrossfade<K> {
    duration: f32,
    states: HashMap<K, LodTransitionState>,
}

impl<K: Copy + Eq + Hash> LodCrossfade<K> {
    /// Create a tracker whose transitions last `duration` seconds.
    pub fn new(duration: f32) -> Self {
        Self {
            duration: duration.max(0.0),
            states: HashMap::new(),
        }
    }

    /// Configured transition duration in seconds.
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Report the level selected for `id` this frame.
    ///
    /// Returns `true` when this starts a new transition.
    pub fn observe(&mut self, id: K, level: Option<usize>) -> bool {
        let current = match self.states.get(&id) {
            None => {
                self.states.insert(id, LodTransitionState::Stable { level });
                return false;
            }
            Some(LodTransitionState::Stable { level }) => *level,
            Some(LodTransitionState::Transitioning { to, .. }) => *to,
        };

        if current == level {
            return false;
        }

        let next = if self.duration > 0.0 {
            LodTransitionState::Transitioning {
                from: current,
                to: level,
                progress: 0.0,
            }
        } else {
            LodTransitionState::Stable { level }
        };
        self.states.insert(id, next);
        self.duration > 0.0
    }

    /// Advance every running transition by `dt` seconds.
    ///
    /// Returns the ids whose transitions completed during this step.
    pub fn update(&mut self, dt: f32) -> Vec<K> {
        let mut completed = Vec::new();
        for (id, state) in &mut self.states {
            if let LodTransitionState::Transitioning { to, progress, .. } = state {
                *progress += dt / self.duration;
                if *progress >= 1.0 {
                    completed.push(*id);
                    *state = LodTransitionState::Stable { level: *to };
                }
            }
        }
        completed
    }

    /// Current state of `id`, if it has been observed.
    pub fn state(&self, id: &K) -> Option<&LodTransitionState> {
        self.states.get(id)
    }

    /// `(outgoing_alpha, incoming_alpha)` for `id`, both in `[0, 1]`.
    pub fn alphas(&self, id: &K) -> (f32, f32) {
        match self.states.get(id) {
            Some(LodTransitionState::Transitioning { progress, .. }) => {
                let t = smooth_step(*progress);
                (1.0 - t, t)
            }
            _ => (0.0, 1.0),
        }
    }

    /// Number of objects currently mid-transition.
    pub fn transitioning_count(&self) -> usize {
        self.states
            .values()
            .filter(|s| matches!(s, LodTransitionState::Transitioning { .. }))
            .count()
    }

    /// Stop tracking `id`.
    pub fn remove(&mut self, id: &K) {
        self.states.remove(id);
    }
}

/// Hermite smooth step.
pub fn smooth_step(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
