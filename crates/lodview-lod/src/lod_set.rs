//! Distance-ranged LOD sets with first-match selection.

use glam::Vec3;
use tracing::warn;

use crate::error::LodError;

/// One detail level: a representation visible on `[min_distance, max_distance)`.
#[derive(Clone, Debug, PartialEq)]
pub struct LevelEntry<R> {
    /// The representation shown while this level is active.
    pub representation: R,
    /// Inclusive lower bound of the view distance.
    pub min_distance: f32,
    /// Exclusive upper bound of the view distance.
    pub max_distance: f32,
}

impl<R> LevelEntry<R> {
    /// Whether `distance` falls inside this level's half-open range.
    pub fn contains(&self, distance: f32) -> bool {
        self.min_distance <= distance && distance < self.max_distance
    }
}

/// An immutable, ordered set of detail levels for one logical object.
///
/// Levels are kept in the order they were supplied. Selection scans them in
/// that order and returns the first whose range contains the distance, so
/// when ranges overlap the earlier level wins.
#[derive(Clone, Debug, PartialEq)]
pub struct LodSet<R> {
    levels: Vec<LevelEntry<R>>,
}

impl<R> LodSet<R> {
    /// Build a set from `(representation, min_distance, max_distance)` triples.
    ///
    /// # Errors
    ///
    /// Returns [`LodError::Empty`] when no level is given and
    /// [`LodError::InvalidLevelRange`] when a level does not satisfy
    /// `0 <= min < max`.
    pub fn build(levels: impl IntoIterator<Item = (R, f32, f32)>) -> Result<Self, LodError> {
        let mut builder = LodSetBuilder::new();
        for (representation, min, max) in levels {
            builder = builder.level(representation, min, max);
        }
        builder.build()
    }

    /// Return the representation for a viewer at `distance`, or `None` if the
    /// distance falls outside every level.
    pub fn select(&self, distance: f32) -> Option<&R> {
        self.select_index(distance)
            .map(|i| &self.levels[i].representation)
    }

    /// Index of the level that [`select`](Self::select) would return.
    pub fn select_index(&self, distance: f32) -> Option<usize> {
        debug_assert!(
            distance.is_nan() || distance >= 0.0,
            "distance must be non-negative"
        );
        self.levels.iter().position(|level| level.contains(distance))
    }

    /// All levels in stored order.
    pub fn levels(&self) -> &[LevelEntry<R>] {
        &self.levels
    }

    /// Number of levels.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always `false` for a built set; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// The `[min, max)` range of the level at `index`.
    pub fn range(&self, index: usize) -> Option<(f32, f32)> {
        self.levels
            .get(index)
            .map(|l| (l.min_distance, l.max_distance))
    }

    /// The largest distance at which any level is still visible.
    pub fn max_visible_distance(&self) -> f32 {
        self.levels
            .iter()
            .map(|l| l.max_distance)
            .fold(0.0, f32::max)
    }
}

/// Incremental construction of a [`LodSet`], one level at a time.
#[derive(Debug)]
pub struct LodSetBuilder<R> {
    levels: Vec<LevelEntry<R>>,
}

impl<R> Default for LodSetBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> LodSetBuilder<R> {
    /// Start an empty builder.
    pub fn new() -> Self {
        Self { levels: Vec::new() }
    }

    /// Append a level. Validation is deferred to [`build`](Self::build).
    #[must_use]
    pub fn level(mut self, representation: R, min_distance: f32, max_distance: f32) -> Self {
        self.levels.push(LevelEntry {
            representation,
            min_distance,
            max_distance,
        });
        self
    }

    /// Validate every range and produce the immutable set.
    ///
    /// Overlapping neighbours are accepted but reported with a warning, since
    /// first-match selection then hides part of the later level.
    ///
    /// # Errors
    ///
    /// See [`LodSet::build`].
    pub fn build(self) -> Result<LodSet<R>, LodError> {
        if self.levels.is_empty() {
            return Err(LodError::Empty);
        }

        for (index, level) in self.levels.iter().enumerate() {
            // Written so that NaN on either side fails the check.
            let valid = level.min_distance >= 0.0 && level.min_distance < level.max_distance;
            if !valid {
                return Err(LodError::InvalidLevelRange {
                    index,
                    min: level.min_distance,
                    max: level.max_distance,
                });
            }
        }

        for (index, pair) in self.levels.windows(2).enumerate() {
            if pair[1].min_distance < pair[0].max_distance {
                warn!(
                    level = index + 1,
                    min = pair[1].min_distance,
                    previous_max = pair[0].max_distance,
                    "LOD level overlaps its predecessor; the earlier level wins inside the overlap"
                );
            }
        }

        Ok(LodSet {
            levels: self.levels,
        })
    }
}

/// Euclidean distance from the viewpoint to an object's reference point.
pub fn distance_to_viewpoint(center: Vec3, eye: Vec3) -> f32 {
    center.distance(eye)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct LogCapture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogCapture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl LogCapture {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    /// Build `levels` with a subscriber installed and return what it logged.
    fn build_logged(levels: &[(char, f32, f32)]) -> String {
        let capture = LogCapture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            LodSet::build(levels.iter().copied()).unwrap();
        });
        capture.text()
    }

    fn three_levels() -> LodSet<char> {
        LodSet::build([('A', 0.0, 50.0), ('B', 50.0, 150.0), ('C', 150.0, 500.0)]).unwrap()
    }

    #[test]
    fn test_select_within_sorted_ranges() {
        let set = three_levels();
        assert_eq!(set.select(0.0), Some(&'A'));
        assert_eq!(set.select(49.999), Some(&'A'));
        assert_eq!(set.select(50.0), Some(&'B'));
        assert_eq!(set.select(150.0), Some(&'C'));
        assert_eq!(set.select(499.999), Some(&'C'));
    }

    #[test]
    fn test_select_beyond_last_range_is_none() {
        let set = three_levels();
        assert_eq!(set.select(500.0), None);
        assert_eq!(set.select(10_000.0), None);
        assert_eq!(set.select_index(500.0), None);
    }

    #[test]
    fn test_gap_between_levels_is_none() {
        let set = LodSet::build([('A', 0.0, 10.0), ('B', 20.0, 30.0)]).unwrap();
        assert_eq!(set.select(15.0), None);
        assert_eq!(set.select(20.0), Some(&'B'));
    }

    #[test]
    fn test_overlap_is_warned() {
        let logged = build_logged(&[('A', 0.0, 60.0), ('B', 50.0, 150.0)]);
        assert!(logged.contains("WARN"), "got: {logged}");
        assert!(logged.contains("overlaps its predecessor"));
        assert!(logged.contains("level=1"));
    }

    #[test]
    fn test_adjacent_ranges_are_not_warned() {
        let logged = build_logged(&[('A', 0.0, 50.0), ('B', 50.0, 150.0), ('C', 200.0, 500.0)]);
        assert!(!logged.contains("overlaps"), "got: {logged}");
    }

    #[test]
    fn test_overlap_first_match_wins() {
        let set = LodSet::build([('A', 0.0, 100.0), ('B', 50.0, 150.0)]).unwrap();
        assert_eq!(set.select(75.0), Some(&'A'));
        assert_eq!(set.select(100.0), Some(&'B'));
    }

    #[test]
    fn test_overlap_follows_stored_order_not_tightness() {
        // The tighter range comes second and must still lose.
        let set = LodSet::build([('W', 0.0, 1000.0), ('T', 40.0, 60.0)]).unwrap();
        assert_eq!(set.select(50.0), Some(&'W'));
    }

    #[test]
    fn test_select_index_matches_select() {
        let set = three_levels();
        for d in [0.0, 25.0, 50.0, 120.0, 150.0, 300.0, 500.0] {
            let by_index = set.select_index(d).map(|i| &set.levels()[i].representation);
            assert_eq!(by_index, set.select(d), "mismatch at d={d}");
        }
    }

    #[test]
    fn test_empty_set_rejected() {
        let result = LodSet::<char>::build([]);
        assert_eq!(result.unwrap_err(), LodError::Empty);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let result = LodSet::build([('A', 0.0, 50.0), ('B', 150.0, 50.0)]);
        assert_eq!(
            result.unwrap_err(),
            LodError::InvalidLevelRange {
                index: 1,
                min: 150.0,
                max: 50.0
            }
        );
    }

    #[test]
    fn test_zero_width_and_negative_ranges_rejected() {
        assert!(LodSet::build([('A', 10.0, 10.0)]).is_err());
        assert!(LodSet::build([('A', -1.0, 10.0)]).is_err());
        assert!(LodSet::build([('A', f32::NAN, 10.0)]).is_err());
        assert!(LodSet::build([('A', 0.0, f32::NAN)]).is_err());
    }

    #[test]
    fn test_builder_keeps_insertion_order() {
        let set = LodSetBuilder::new()
            .level("far", 150.0, 500.0)
            .level("near", 0.0, 50.0)
            .build()
            .unwrap();
        assert_eq!(set.levels()[0].representation, "far");
        assert_eq!(set.range(1), Some((0.0, 50.0)));
        assert_eq!(set.range(2), None);
        assert_eq!(set.select(10.0), Some(&"near"));
    }

    #[test]
    fn test_max_visible_distance() {
        assert!((three_levels().max_visible_distance() - 500.0).abs() < f32::EPSILON);
        assert_eq!(three_levels().len(), 3);
        assert!(!three_levels().is_empty());
    }

    #[test]
    fn test_distance_to_viewpoint() {
        let d = distance_to_viewpoint(Vec3::new(3.0, 4.0, 0.0), Vec3::ZERO);
        assert!((d - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_set_is_shareable_across_threads() {
        let set = std::sync::Arc::new(three_levels());
        let handles: Vec<_> = [10.0f32, 100.0, 200.0]
            .into_iter()
            .map(|d| {
                let set = std::sync::Arc::clone(&set);
                std::thread::spawn(move || set.select(d).copied())
            })
            .collect();
        let picked: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(picked, vec![Some('A'), Some('B'), Some('C')]);
    }
}
