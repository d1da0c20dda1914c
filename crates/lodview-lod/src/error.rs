//! LOD construction errors.

/// Errors raised while building a [`LodSet`](crate::LodSet).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LodError {
    /// No levels were supplied.
    #[error("a LOD set needs at least one level")]
    Empty,

    /// A level's range is empty, inverted, negative or NaN.
    #[error("level {index} has invalid range [{min}, {max})")]
    InvalidLevelRange {
        /// Position of the offending level in build order.
        index: usize,
        /// Supplied minimum distance.
        min: f32,
        /// Supplied maximum distance.
        max: f32,
    },
}
