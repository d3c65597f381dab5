// Sendkeyz Key Resolver
// Ordered-rule resolution of a token to a key code plus modifier state

use crate::compile::KeySequenceError;
use crate::key::{ascii_to_key, key_from_name};
use crate::layout::LayoutTable;
use crate::modifier::ModifierFlags;
use crate::Key;

/// A token resolved to an abstract key code and the modifiers required to
/// produce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedKey {
    pub key: Key,
    pub modifiers: ModifierFlags,
}

/// Resolve a token (a single character or a symbolic key name) against the
/// registry and the given layout table.
///
/// Rules, in order:
/// 1. Single-character tokens try the layout's character map first, so
///    locale-specific shapes (a shifted digit producing punctuation) win
///    over generic ASCII assumptions.
/// 2. Exact-match registry names always resolve, even with an empty
///    layout.
/// 3. Single-character ASCII letters and digits fall back to their
///    virtual-key identity, accepted only when the layout's reverse map
///    knows the key.
pub fn resolve(token: &str, layout: &LayoutTable) -> Result<ResolvedKey, KeySequenceError> {
    let mut chars = token.chars();
    let single = match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    };

    if let Some(c) = single {
        if let Some(entry) = layout.char_entry(c) {
            if let Some(key) = layout.code_for_scancode(entry.scancode) {
                return Ok(ResolvedKey {
                    key,
                    modifiers: entry.modifiers,
                });
            }
        }
    }

    if let Some(key) = key_from_name(token) {
        return Ok(ResolvedKey {
            key,
            modifiers: ModifierFlags::NONE,
        });
    }

    if let Some(c) = single {
        if let Some(key) = ascii_to_key(c) {
            if layout.scancode_for_code(key).is_some() {
                return Ok(ResolvedKey {
                    key,
                    modifiers: ModifierFlags::NONE,
                });
            }
        }
    }

    Err(KeySequenceError::UnknownKey(token.to_string()))
}
