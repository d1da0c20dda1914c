//! Key events as delivered by the viewer's input source.

/// A key as delivered by the input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character, case preserved.
    Char(char),
    /// The escape key.
    Escape,
    /// The enter/return key.
    Enter,
}

impl Key {
    /// Whether this is `c` in either letter case.
    pub fn is_char_ignore_case(self, c: char) -> bool {
        matches!(self, Key::Char(k) if k.eq_ignore_ascii_case(&c))
    }
}

/// Pressed or released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    /// The key went down.
    Pressed,
    /// The key came up.
    Released,
}

/// Minimal description of a key event for processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawKeyEvent {
    /// The key involved.
    pub key: Key,
    /// Whether the key was pressed or released.
    pub state: KeyState,
    /// Whether this is a repeat event.
    pub repeat: bool,
}

impl RawKeyEvent {
    /// A non-repeat press of `key`.
    pub fn press(key: Key) -> Self {
        Self {
            key,
            state: KeyState::Pressed,
            repeat: false,
        }
    }

    /// A release of `key`.
    pub fn release(key: Key) -> Self {
        Self {
            key,
            state: KeyState::Released,
            repeat: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release_constructors() {
        let press = RawKeyEvent::press(Key::Char('w'));
        assert_eq!(press.state, KeyState::Pressed);
        assert!(!press.repeat);
        assert_eq!(RawKeyEvent::release(Key::Escape).state, KeyState::Released);
    }

    #[test]
    fn test_case_insensitive_match() {
        assert!(Key::Char('F').is_char_ignore_case('f'));
        assert!(Key::Char('f').is_char_ignore_case('F'));
        assert!(!Key::Char('g').is_char_ignore_case('f'));
        assert!(!Key::Escape.is_char_ignore_case('f'));
    }
}
