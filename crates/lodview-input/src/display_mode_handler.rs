//! Key handler that cycles the scene's display mode.

use lodview_scene::{DisplayMode, DisplayModeTarget};
use tracing::info;

use crate::keyboard::{KeyState, RawKeyEvent};

/// Cycles Fill, Line, Point on each press of `F` and applies the result.
///
/// The state machine lives in [`DisplayMode::next`]; this type only adapts
/// key events to it.
#[derive(Debug, Clone, Default)]
pub struct DisplayModeHandler {
    mode: DisplayMode,
}

impl DisplayModeHandler {
    /// Key that advances the mode, matched in either case.
    pub const TOGGLE_KEY: char = 'f';

    /// A handler starting in `mode`.
    pub fn new(mode: DisplayMode) -> Self {
        Self { mode }
    }

    /// The current mode.
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Handle one key event. Returns `true` if the event was consumed.
    pub fn handle(&mut self, event: &RawKeyEvent, target: &mut impl DisplayModeTarget) -> bool {
        if event.state != KeyState::Pressed
            || event.repeat
            || !event.key.is_char_ignore_case(Self::TOGGLE_KEY)
        {
            return false;
        }
        self.advance(target);
        true
    }

    /// Step to the next mode and apply it, regardless of input.
    pub fn advance(&mut self, target: &mut impl DisplayModeTarget) -> DisplayMode {
        self.mode = self.mode.next();
        self.mode.apply(target);
        info!(mode = %self.mode, ">>> display mode: {}", self.mode);
        self.mode
    }
}
