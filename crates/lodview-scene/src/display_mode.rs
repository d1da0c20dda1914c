//! Polygon display modes: filled, wireframe, points.

use std::fmt;

/// How polygons are rasterized, on both faces, overriding any per-node state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    /// Filled polygons.
    #[default]
    Fill,
    /// Polygon edges only.
    Line,
    /// Polygon vertices only.
    Point,
}

impl DisplayMode {
    /// All modes in cycling order.
    pub const ALL: [DisplayMode; 3] = [DisplayMode::Fill, DisplayMode::Line, DisplayMode::Point];

    /// The mode after this one: Fill, Line, Point, then Fill again.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            DisplayMode::Fill => DisplayMode::Line,
            DisplayMode::Line => DisplayMode::Point,
            DisplayMode::Point => DisplayMode::Fill,
        }
    }

    /// Label shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::Fill => "fill",
            DisplayMode::Line => "wireframe",
            DisplayMode::Point => "points",
        }
    }

    /// Push this mode to a target.
    pub fn apply(self, target: &mut (impl DisplayModeTarget + ?Sized)) {
        target.set_display_mode(self);
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Anything whose polygon mode can be switched.
pub trait DisplayModeTarget {
    /// Replace the active display mode.
    fn set_display_mode(&mut self, mode: DisplayMode);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<DisplayMode>);

    impl DisplayModeTarget for Recorder {
        fn set_display_mode(&mut self, mode: DisplayMode) {
            self.0.push(mode);
        }
    }

    #[test]
    fn test_cycle_order() {
        assert_eq!(DisplayMode::Fill.next(), DisplayMode::Line);
        assert_eq!(DisplayMode::Line.next(), DisplayMode::Point);
        assert_eq!(DisplayMode::Point.next(), DisplayMode::Fill);
    }

    #[test]
    fn test_three_steps_return_to_start() {
        for mode in DisplayMode::ALL {
            assert_eq!(mode.next().next().next(), mode);
        }
    }

    #[test]
    fn test_default_is_fill() {
        assert_eq!(DisplayMode::default(), DisplayMode::Fill);
    }

    #[test]
    fn test_apply_reaches_target() {
        let mut recorder = Recorder::default();
        DisplayMode::Line.apply(&mut recorder);
        DisplayMode::Point.apply(&mut recorder);
        assert_eq!(recorder.0, vec![DisplayMode::Line, DisplayMode::Point]);
    }

    #[test]
    fn test_labels() {
        assert_eq!(DisplayMode::Line.to_string(), "wireframe");
    }
}
