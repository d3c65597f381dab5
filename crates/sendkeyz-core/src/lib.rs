// Sendkeyz Core Library
// Key-sequence compilation and playback primitives

pub mod action;
pub mod compile;
pub mod key;
pub mod layout;
pub mod modifier;
pub mod output;
pub mod playback;
pub mod resolver;

pub use action::{ActionList, KeyAction};
pub use compile::{compile, CompileOptions, KeySequenceError};
pub use key::{ascii_to_key, key_from_name, key_name, Key};
pub use layout::{LayoutEntry, LayoutTable, LayoutTableBuilder};
pub use modifier::ModifierFlags;
pub use playback::{
    play, send_keys, NumlockControl, Playback, PlaybackError, SendError, DEFAULT_INTER_KEY_PAUSE,
};
pub use resolver::{resolve, ResolvedKey};

#[cfg(feature = "uinput")]
pub use output::{UInputError, VirtualDevice};
