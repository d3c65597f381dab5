// Sendkeyz Sequence Compiler
// Compiles the key-sequence DSL into an ordered list of key actions

mod combo;

use crate::action::{ActionList, KeyAction};
use crate::layout::LayoutTable;
use crate::modifier::ModifierFlags;
use crate::resolver::resolve;

/// Whitespace handling options for [`compile`].
///
/// When a flag is false (the default), that whitespace character is
/// stripped from the input before parsing instead of being treated as the
/// SPACE/TAB/ENTER key. Stripping happens everywhere, including inside
/// combos.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileOptions {
    pub with_spaces: bool,
    pub with_tabs: bool,
    pub with_newlines: bool,
}

/// Errors raised while compiling a key-sequence string.
///
/// All are terminal for the current `compile` call; no partial action list
/// is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeySequenceError {
    /// `{` opened without a matching `}`
    #[error("was expecting '}}'")]
    UnterminatedCombo,

    /// `[` opened without a matching `]`
    #[error("was expecting ']'")]
    UnterminatedMultiplier,

    /// Non-digit or empty content inside `[...]`
    #[error("multiplier must be an integer")]
    InvalidMultiplier,

    /// Combo segment with no token text, e.g. `{+}` or `{A+}`
    #[error("was expecting a key, got nothing instead")]
    EmptySegment,

    /// `PAUSE=` with a non-numeric or negative argument
    #[error("invalid argument '{0}' for 'PAUSE='")]
    InvalidPauseArgument(String),

    /// A named or multi-character token inside a combo that no resolution
    /// rule could place
    #[error("'{0}' is an unknown key")]
    UnknownKey(String),
}

/// Compile a key-sequence string into an ordered action list.
///
/// The grammar:
///
/// ```text
/// sequence   := (escape | combo | literal)*
/// escape     := '\' ANY
/// combo      := '{' segment ('+' segment)* '}' [ '[' digits ']' ]
/// segment    := key-token [ '[' digits ']' ]
/// literal    := any other character
/// ```
///
/// Literal characters resolve through the layout table and degrade to
/// [`KeyAction::TypeLiteral`] when unresolvable; tokens inside combos must
/// resolve. Compilation is a pure function of its inputs: the same string,
/// options and layout always produce the same action list.
pub fn compile(
    input: &str,
    options: &CompileOptions,
    layout: &LayoutTable,
) -> Result<ActionList, KeySequenceError> {
    let chars = strip_ignored(input, options);

    let mut actions = ActionList::new();
    let mut next_is_raw = false;
    let mut pos = 0;

    while pos < chars.len() {
        let c = chars[pos];
        if next_is_raw {
            append_char(&mut actions, c, layout);
            next_is_raw = false;
        } else if c == '{' {
            pos = combo::parse_combo(&chars, pos, layout, &mut actions)?;
            continue;
        } else if c == '\\' {
            next_is_raw = true;
        } else {
            append_char(&mut actions, c, layout);
        }
        pos += 1;
    }

    Ok(actions)
}

/// Remove the whitespace characters the options ignore, before parsing.
fn strip_ignored(input: &str, options: &CompileOptions) -> Vec<char> {
    if options.with_spaces && options.with_tabs && options.with_newlines {
        return input.chars().collect();
    }

    let kept: Vec<char> = input
        .chars()
        .filter(|&c| {
            !((c == ' ' && !options.with_spaces)
                || (c == '\t' && !options.with_tabs)
                || (c == '\n' && !options.with_newlines))
        })
        .collect();

    let stripped = input.chars().count() - kept.len();
    if stripped > 0 {
        log::debug!("stripped {} ignored whitespace character(s)", stripped);
    }
    kept
}

/// Emit the actions for one literal character: press/release of the
/// resolved key, bracketed by synthetic modifier presses when the
/// character is uppercase or its layout entry requires them. Unresolvable
/// characters degrade to a literal-type action.
fn append_char(actions: &mut ActionList, c: char, layout: &LayoutTable) {
    let mut buf = [0u8; 4];
    match resolve(c.encode_utf8(&mut buf), layout) {
        Ok(resolved) => {
            let mut wrap = resolved.modifiers;
            if c.is_uppercase() {
                wrap = wrap.union(ModifierFlags::SHIFT);
            }
            let held = wrap.held_keys();
            for &key in held.iter() {
                actions.push(KeyAction::Press(key));
            }
            actions.push(KeyAction::Press(resolved.key));
            actions.push(KeyAction::Release(resolved.key));
            for &key in held.iter().rev() {
                actions.push(KeyAction::Release(key));
            }
        }
        Err(_) => actions.push(KeyAction::TypeLiteral(c)),
    }
}
