//! Viewer key bindings.

use crate::keyboard::Key;

/// Something the viewer can be asked to do from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewerAction {
    /// Cycle fill / wireframe / points.
    CycleDisplayMode,
    /// Rotate the camera counter-clockwise around the target.
    OrbitLeft,
    /// Rotate the camera clockwise around the target.
    OrbitRight,
    /// Move the camera toward the target.
    ZoomIn,
    /// Move the camera away from the target.
    ZoomOut,
    /// Return the camera to its home position.
    Home,
    /// Toggle the automatic dolly sweep.
    ToggleDolly,
    /// Re-read `config.ron` and apply camera and lighting changes.
    ReloadConfig,
    /// Leave the viewer.
    Quit,
}

impl ViewerAction {
    /// The action bound to `key`, if any. Letter bindings ignore case.
    pub fn from_key(key: Key) -> Option<Self> {
        let Key::Char(c) = key else {
            return match key {
                Key::Escape => Some(ViewerAction::Quit),
                _ => None,
            };
        };
        match c.to_ascii_lowercase() {
            'f' => Some(ViewerAction::CycleDisplayMode),
            'a' => Some(ViewerAction::OrbitLeft),
            'd' => Some(ViewerAction::OrbitRight),
            'w' | '+' => Some(ViewerAction::ZoomIn),
            's' | '-' => Some(ViewerAction::ZoomOut),
            'h' | ' ' => Some(ViewerAction::Home),
            'p' => Some(ViewerAction::ToggleDolly),
            'r' => Some(ViewerAction::ReloadConfig),
            'q' => Some(ViewerAction::Quit),
            _ => None,
        }
    }

    /// One line of help text per binding.
    pub fn help_lines() -> [&'static str; 8] {
        [
            "f      cycle display mode (fill / wireframe / points)",
            "a / d  orbit left / right",
            "w / s  zoom in / out",
            "h      home the camera",
            "p      toggle automatic dolly",
            "r      reload config.ron",
            "q/Esc  quit",
            "keys are read from stdin; press Enter after each line",
        ]
    }
}
