// Sendkeyz Modifier Flags
// Synthetic modifier state required to produce a character

use std::fmt;

use smallvec::SmallVec;

use crate::Key;

/// The SHIFT key used to bracket shifted characters
pub const SHIFT_KEY: Key = Key(0x10);
/// The right-alt (AltGr) key used to bracket alt-graph characters
pub const ALT_GRAPH_KEY: Key = Key(0xA5);

/// Set of modifiers that must be held around a character's own
/// press/release pair to produce the intended symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ModifierFlags(u8);

impl ModifierFlags {
    pub const NONE: ModifierFlags = ModifierFlags(0);
    pub const SHIFT: ModifierFlags = ModifierFlags(1 << 0);
    pub const ALT_GRAPH: ModifierFlags = ModifierFlags(1 << 1);

    /// Check whether all bits of `other` are set in `self`
    pub const fn contains(self, other: ModifierFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Union of two flag sets
    pub const fn union(self, other: ModifierFlags) -> ModifierFlags {
        ModifierFlags(self.0 | other.0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The modifier keys to hold for this flag set, in press order.
    /// Release order is the reverse.
    pub fn held_keys(self) -> SmallVec<[Key; 2]> {
        let mut keys = SmallVec::new();
        if self.contains(Self::SHIFT) {
            keys.push(SHIFT_KEY);
        }
        if self.contains(Self::ALT_GRAPH) {
            keys.push(ALT_GRAPH_KEY);
        }
        keys
    }
}

impl fmt::Display for ModifierFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "NONE");
        }
        let mut first = true;
        for (flag, name) in [(Self::SHIFT, "SHIFT"), (Self::ALT_GRAPH, "ALT_GRAPH")] {
            if self.contains(flag) {
                if !first {
                    write!(f, "+")?;
                }
                write!(f, "{}", name)?;
                first = false;
            }
        }
        Ok(())
    }
}
