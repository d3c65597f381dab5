// Sendkeyz End-to-End Compilation Scenarios
//
// These tests exercise complete user workflows: a key-sequence string is
// compiled against a layout table and played through a recording backend,
// without requiring actual hardware.

use sendkeyz_core::{
    compile, play, send_keys, CompileOptions, Key, KeyAction, KeySequenceError, LayoutTable,
    NumlockControl, Playback, PlaybackError,
};

// =========================================================================
// Test Helpers
// =========================================================================

const SHIFT: Key = Key(0x10);
const CONTROL: Key = Key(0x11);
const MENU: Key = Key(0x12);
const TAB: Key = Key(0x09);
const ENTER: Key = Key(0x0D);

fn key(c: char) -> Key {
    Key(c.to_ascii_uppercase() as u16)
}

/// Compile against the US fallback with default options
fn compile_us(input: &str) -> Vec<KeyAction> {
    compile(input, &CompileOptions::default(), &LayoutTable::us_fallback())
        .expect("sequence should compile")
}

/// Recording backend used in place of a real device
#[derive(Default)]
struct Recorder {
    log: Vec<String>,
    numlock_on: bool,
}

impl Playback for Recorder {
    fn press(&mut self, key: Key) -> Result<(), PlaybackError> {
        self.log.push(format!("press {}", key));
        Ok(())
    }

    fn release(&mut self, key: Key) -> Result<(), PlaybackError> {
        self.log.push(format!("release {}", key));
        Ok(())
    }

    fn wait(&mut self, seconds: f64) -> Result<(), PlaybackError> {
        self.log.push(format!("wait {}", seconds));
        Ok(())
    }

    fn type_literal(&mut self, c: char) -> Result<(), PlaybackError> {
        self.log.push(format!("type {}", c));
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
    }
}

// =========================================================================
// Typing scenarios
// =========================================================================

#[test]
fn types_hello_world_with_shift_wrapping() {
    let actions = compile_us("Hello");
    assert_eq!(
        actions,
        vec![
            KeyAction::Press(SHIFT),
            KeyAction::Press(key('h')),
            KeyAction::Release(key('h')),
            KeyAction::Release(SHIFT),
            KeyAction::Press(key('e')),
            KeyAction::Release(key('e')),
            KeyAction::Press(key('l')),
            KeyAction::Release(key('l')),
            KeyAction::Press(key('l')),
            KeyAction::Release(key('l')),
            KeyAction::Press(key('o')),
            KeyAction::Release(key('o')),
        ]
    );
}

#[test]
fn spaces_are_stripped_unless_requested() {
    assert_eq!(compile_us("a b"), compile_us("ab"));

    let options = CompileOptions {
        with_spaces: true,
        ..Default::default()
    };
    let actions = compile("a b", &options, &LayoutTable::us_fallback()).unwrap();
    let space = Key(0x20);
    assert!(actions.contains(&KeyAction::Press(space)));
}

#[test]
fn uk_layout_changes_character_shapes() {
    let uk = LayoutTable::uk_fallback();
    let options = CompileOptions::default();

    // '£' exists only on the UK table, as Shift+3
    let actions = compile("£", &options, &uk).unwrap();
    assert_eq!(
        actions,
        vec![
            KeyAction::Press(SHIFT),
            KeyAction::Press(Key(0x33)),
            KeyAction::Release(Key(0x33)),
            KeyAction::Release(SHIFT),
        ]
    );

    // On the US table it degrades to a literal
    let us_actions = compile_us("£");
    assert_eq!(us_actions, vec![KeyAction::TypeLiteral('£')]);
}

// =========================================================================
// Combo scenarios
// =========================================================================

#[test]
fn alt_tab_holds_alt_across_tab() {
    let actions = compile_us("{ALT+TAB}");
    assert_eq!(
        actions,
        vec![
            KeyAction::Press(MENU),
            KeyAction::Press(TAB),
            KeyAction::Release(MENU),
            KeyAction::Release(TAB),
        ]
    );
}

#[test]
fn shift_held_while_tapping_a_twice() {
    let actions = compile_us("{SHIFT+A[2]}");
    assert_eq!(
        actions,
        vec![
            KeyAction::Press(SHIFT),
            KeyAction::Press(key('a')),
            KeyAction::Release(key('a')),
            KeyAction::Press(key('a')),
            KeyAction::Release(key('a')),
            KeyAction::Release(SHIFT),
        ]
    );
}

#[test]
fn select_all_then_copy() {
    let actions = compile_us("{CTRL+A}{CTRL+C}");
    assert_eq!(
        actions,
        vec![
            KeyAction::Press(CONTROL),
            KeyAction::Press(key('a')),
            KeyAction::Release(CONTROL),
            KeyAction::Release(key('a')),
            KeyAction::Press(CONTROL),
            KeyAction::Press(key('c')),
            KeyAction::Release(CONTROL),
            KeyAction::Release(key('c')),
        ]
    );
}

#[test]
fn repeated_navigation_with_whole_combo_multiplier() {
    let down = Key(0x28);
    let actions = compile_us("{DOWN}[3]");
    assert_eq!(
        actions,
        vec![
            KeyAction::Press(down),
            KeyAction::Release(down),
            KeyAction::Press(down),
            KeyAction::Release(down),
            KeyAction::Press(down),
            KeyAction::Release(down),
        ]
    );
}

#[test]
fn pauses_interleave_with_key_actions() {
    let actions = compile_us("{ENTER}{PAUSE=2}{ENTER}");
    assert_eq!(
        actions,
        vec![
            KeyAction::Press(ENTER),
            KeyAction::Release(ENTER),
            KeyAction::Pause(2.0),
            KeyAction::Press(ENTER),
            KeyAction::Release(ENTER),
        ]
    );
}

#[test]
fn malformed_sequences_fail_without_output() {
    for (input, expected) in [
        ("{CTRL+", KeySequenceError::UnterminatedCombo),
        ("{F1[", KeySequenceError::UnterminatedMultiplier),
        ("{F1[two]}", KeySequenceError::InvalidMultiplier),
        ("{}", KeySequenceError::EmptySegment),
        ("{PAUSE=soon}", KeySequenceError::InvalidPauseArgument("soon".to_string())),
        ("{NOT_A_KEY}", KeySequenceError::UnknownKey("NOT_A_KEY".to_string())),
    ] {
        let result = compile(input, &CompileOptions::default(), &LayoutTable::us_fallback());
        assert_eq!(result, Err(expected), "input {:?}", input);
    }
}

// =========================================================================
// Playback scenarios
// =========================================================================

#[test]
fn playback_walks_actions_in_order_with_inter_key_pause() {
    let actions = compile_us("{CTRL+A}");
    let mut backend = Recorder::default();
    play(&actions, &mut backend, 0.05).unwrap();
    assert_eq!(
        backend.log,
        vec![
            "press CONTROL",
            "press A",
            "release CONTROL",
            "wait 0.05",
            "release A",
            "wait 0.05",
        ]
    );
}

#[test]
fn send_keys_clears_and_restores_numlock() {
    let mut backend = Recorder {
        numlock_on: true,
        ..Default::default()
    };
    send_keys(
        "{UP}",
        &CompileOptions::default(),
        &LayoutTable::us_fallback(),
        &mut backend,
        0.0,
        true,
    )
    .unwrap();
    // Restored after playback
    assert!(backend.numlock_on);
}

#[test]
fn send_keys_reports_compile_errors() {
    let mut backend = Recorder::default();
    let result = send_keys(
        "{OOPS}",
        &CompileOptions::default(),
        &LayoutTable::us_fallback(),
        &mut backend,
        0.0,
        false,
    );
    assert!(result.is_err());
    assert!(backend.log.is_empty());
}
