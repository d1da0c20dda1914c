//! Input handling: key events, viewer key bindings, and the display-mode toggle.

pub mod actions;
pub mod display_mode_handler;
pub mod keyboard;

pub use actions::ViewerAction;
pub use display_mode_handler::DisplayModeHandler;
pub use keyboard::{Key, KeyState, RawKeyEvent};
