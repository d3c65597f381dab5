// Sendkeyz Output Layer
// Device-backed playback implementations

#[cfg(feature = "uinput")]
mod uinput;

#[cfg(feature = "uinput")]
pub use uinput::{UInputError, VirtualDevice};
