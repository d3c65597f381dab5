// Sendkeyz Playback Layer
// Drives a compiled action list against a pluggable output backend

use crate::action::KeyAction;
use crate::compile::{compile, CompileOptions, KeySequenceError};
use crate::layout::LayoutTable;
use crate::Key;

/// Seconds to wait after each key release, unless overridden
pub const DEFAULT_INTER_KEY_PAUSE: f64 = 0.05;

/// Errors surfaced by playback backends
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaybackError {
    /// The backend has no device mapping for this key
    #[error("no scancode for key {0}")]
    UnmappedKey(Key),

    /// The backend cannot inject this literal character
    #[error("cannot inject literal character {0:?}")]
    UnsupportedLiteral(char),

    /// Backend-specific failure
    #[error("backend error: {0}")]
    Backend(String),
}

/// Output backend for compiled key sequences. Called once per action, in
/// order, synchronously.
pub trait Playback {
    fn press(&mut self, key: Key) -> Result<(), PlaybackError>;
    fn release(&mut self, key: Key) -> Result<(), PlaybackError>;
    fn wait(&mut self, seconds: f64) -> Result<(), PlaybackError>;
    fn type_literal(&mut self, c: char) -> Result<(), PlaybackError>;
}

/// Numlock state control, consumed by the send orchestrator. Some key
/// sequences behave differently with NUMLOCK engaged, so sending turns it
/// off up front and restores it afterwards.
pub trait NumlockControl {
    /// Turn NUMLOCK off, reporting whether it was on
    fn get_and_clear_numlock(&mut self) -> bool;
    fn set_numlock(&mut self, on: bool);
}

/// Errors from the compile-then-play orchestrator
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SendError {
    #[error(transparent)]
    Compile(#[from] KeySequenceError),
    #[error(transparent)]
    Playback(#[from] PlaybackError),
}

/// Play a compiled action list against a backend. After every release an
/// extra `wait(inter_key_pause)` is inserted when the pause is positive;
/// pause actions wait for their own duration.
pub fn play<P: Playback>(
    actions: &[KeyAction],
    backend: &mut P,
    inter_key_pause: f64,
) -> Result<(), PlaybackError> {
    for action in actions {
        match *action {
            KeyAction::Press(key) => backend.press(key)?,
            KeyAction::Release(key) => {
                backend.release(key)?;
                if inter_key_pause > 0.0 {
                    backend.wait(inter_key_pause)?;
                }
            }
            KeyAction::Pause(seconds) => backend.wait(seconds)?,
            KeyAction::TypeLiteral(c) => backend.type_literal(c)?,
        }
    }
    Ok(())
}

/// Compile `input` and play it against `backend`.
///
/// When `turn_off_numlock` is set, NUMLOCK is cleared before playback and
/// restored afterwards; restoration runs even when playback fails
/// mid-list. Compile errors surface before the backend is touched.
pub fn send_keys<P: Playback + NumlockControl>(
    input: &str,
    options: &CompileOptions,
    layout: &LayoutTable,
    backend: &mut P,
    inter_key_pause: f64,
    turn_off_numlock: bool,
) -> Result<(), SendError> {
    let actions = compile(input, options, layout)?;
    log::debug!("sending {} action(s)", actions.len());

    let restore = turn_off_numlock && backend.get_and_clear_numlock();
    let result = play(&actions, backend, inter_key_pause);
    if restore {
        backend.set_numlock(true);
    }
    result.map_err(SendError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Press(Key),
        Release(Key),
        Wait(f64),
        Type(char),
        NumlockSet(bool),
    }

    /// Backend double that records every call
    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
        numlock_on: bool,
        fail_on_press: Option<Key>,
    }

    impl Playback for Recorder {
        fn press(&mut self, key: Key) -> Result<(), PlaybackError> {
            if self.fail_on_press == Some(key) {
                return Err(PlaybackError::UnmappedKey(key));
            }
            self.calls.push(Call::Press(key));
            Ok(())
        }

        fn release(&mut self, key: Key) -> Result<(), PlaybackError> {
            self.calls.push(Call::Release(key));
            Ok(())
        }

        fn wait(&mut self, seconds: f64) -> Result<(), PlaybackError> {
            self.calls.push(Call::Wait(seconds));
            Ok(())
        }

        fn type_literal(&mut self, c: char) -> Result<(), PlaybackError> {
            self.calls.push(Call::Type(c));
            Ok(())
        }
    }

    impl NumlockControl for Recorder {
        fn get_and_clear_numlock(&mut self) -> bool {
            let was_on = self.numlock_on;
            self.numlock_on = false;
            was_on
        }

        fn set_numlock(&mut self, on: bool) {
            self.numlock_on = on;
            self.calls.push(Call::NumlockSet(on));
        }
    }

    const A: Key = Key(0x41);

    #[test]
    fn test_play_inserts_pause_after_release_only() {
        let actions = vec![
            KeyAction::Press(A),
            KeyAction::Release(A),
            KeyAction::TypeLiteral('x'),
        ];
        let mut backend = Recorder::default();
        play(&actions, &mut backend, 0.05).unwrap();
        assert_eq!(
            backend.calls,
            vec![
                Call::Press(A),
                Call::Release(A),
                Call::Wait(0.05),
                Call::Type('x'),
            ]
        );
    }

    #[test]
    fn test_play_zero_pause_inserts_no_waits() {
        let actions = vec![KeyAction::Press(A), KeyAction::Release(A)];
        let mut backend = Recorder::default();
        play(&actions, &mut backend, 0.0).unwrap();
        assert_eq!(backend.calls, vec![Call::Press(A), Call::Release(A)]);
    }

    #[test]
    fn test_play_pause_action_waits_its_duration() {
        let actions = vec![KeyAction::Pause(1.5)];
        let mut backend = Recorder::default();
        play(&actions, &mut backend, 0.05).unwrap();
        assert_eq!(backend.calls, vec![Call::Wait(1.5)]);
    }

    #[test]
    fn test_send_keys_restores_numlock() {
        let layout = LayoutTable::us_fallback();
        let mut backend = Recorder {
            numlock_on: true,
            ..Default::default()
        };
        send_keys(
            "a",
            &CompileOptions::default(),
            &layout,
            &mut backend,
            0.0,
            true,
        )
        .unwrap();
        assert_eq!(backend.calls.last(), Some(&Call::NumlockSet(true)));
        assert!(backend.numlock_on);
    }

    #[test]
    fn test_send_keys_leaves_numlock_alone_when_off() {
        let layout = LayoutTable::us_fallback();
        let mut backend = Recorder::default();
        send_keys(
            "a",
            &CompileOptions::default(),
            &layout,
            &mut backend,
            0.0,
            true,
        )
        .unwrap();
        assert!(!backend.calls.contains(&Call::NumlockSet(true)));
    }

    #[test]
    fn test_send_keys_restores_numlock_on_playback_error() {
        let layout = LayoutTable::us_fallback();
        let mut backend = Recorder {
            numlock_on: true,
            fail_on_press: Some(A),
            ..Default::default()
        };
        let result = send_keys(
            "a",
            &CompileOptions::default(),
            &layout,
            &mut backend,
            0.0,
            true,
        );
        assert!(matches!(result, Err(SendError::Playback(_))));
        assert!(backend.numlock_on);
    }

    #[test]
    fn test_send_keys_compile_error_touches_no_backend() {
        let layout = LayoutTable::us_fallback();
        let mut backend = Recorder {
            numlock_on: true,
            ..Default::default()
        };
        let result = send_keys(
            "{NOPE}",
            &CompileOptions::default(),
            &layout,
            &mut backend,
            0.0,
            true,
        );
        assert!(matches!(result, Err(SendError::Compile(_))));
        assert!(backend.calls.is_empty());
        assert!(backend.numlock_on);
    }
}
