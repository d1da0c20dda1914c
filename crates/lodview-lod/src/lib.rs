//! Level-of-detail sets: ranged representations selected by view distance, plus cross-fade tracking.

mod error;
mod lod_set;
mod transition;

pub use error::LodError;
pub use lod_set::{LevelEntry, LodSet, LodSetBuilder, distance_to_viewpoint};
pub use transition::{LodCrossfade, LodTransitionState, smooth_step};
