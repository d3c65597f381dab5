// Sendkeyz Key Action
// One atomic step of a compiled key sequence

use std::fmt;

use crate::Key;

/// A single playback step produced by the sequence compiler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyAction {
    /// The key becomes logically down
    Press(Key),
    /// The key becomes logically up
    Release(Key),
    /// No key activity for the given number of seconds (>= 0)
    Pause(f64),
    /// Inject a Unicode character directly; used for characters with no
    /// resolvable key mapping
    TypeLiteral(char),
}

/// Ordered sequence of key actions, in playback order. May be empty.
pub type ActionList = Vec<KeyAction>;

impl KeyAction {
    pub fn is_press(self) -> bool {
        matches!(self, KeyAction::Press(_))
    }

    pub fn is_release(self) -> bool {
        matches!(self, KeyAction::Release(_))
    }

    pub fn is_pause(self) -> bool {
        matches!(self, KeyAction::Pause(_))
    }

    /// The key this action touches, if any
    pub fn key(self) -> Option<Key> {
        match self {
            KeyAction::Press(key) | KeyAction::Release(key) => Some(key),
            KeyAction::Pause(_) | KeyAction::TypeLiteral(_) => None,
        }
    }
}

impl fmt::Display for KeyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyAction::Press(key) => write!(f, "press {}", key),
            KeyAction::Release(key) => write!(f, "release {}", key),
            KeyAction::Pause(seconds) => write!(f, "pause {}s", seconds),
            KeyAction::TypeLiteral(c) => write!(f, "type {:?}", c),
        }
    }
}
