// Sendkeyz uinput Output
// Virtual device creation and key event emission

use std::sync::Arc;
use std::time::Duration;

use evdev::{EventType, InputEvent};

use crate::layout::LayoutTable;
use crate::playback::{NumlockControl, Playback, PlaybackError};
use crate::Key;

/// Error types for uinput operations
#[derive(Debug, thiserror::Error)]
pub enum UInputError {
    #[error("Failed to create virtual device: {0}")]
    DeviceCreation(String),
}

/// Virtual uinput keyboard implementing [`Playback`].
///
/// Abstract key codes are translated to device scancodes through the
/// layout table the device was created with; a key without a scancode is
/// an [`PlaybackError::UnmappedKey`].
pub struct VirtualDevice {
    device: evdev::uinput::VirtualDevice,
    layout: Arc<LayoutTable>,
}

impl VirtualDevice {
    /// Create a new virtual uinput keyboard
    pub fn new(layout: Arc<LayoutTable>) -> Result<Self, UInputError> {
        use evdev::uinput::VirtualDeviceBuilder;
        use evdev::AttributeSet;

        let mut keys = AttributeSet::new();
        // Advertise all standard keyboard keys (0-255)
        for code in 0..256u16 {
            keys.insert(evdev::Key::new(code));
        }

        let device = VirtualDeviceBuilder::new()
            .map_err(|e: std::io::Error| UInputError::DeviceCreation(e.to_string()))?
            .name("Sendkeyz (virtual) Keyboard")
            .with_keys(&keys)
            .map_err(|e: std::io::Error| UInputError::DeviceCreation(e.to_string()))?
            .build()
            .map_err(|e: std::io::Error| UInputError::DeviceCreation(e.to_string()))?;

        Ok(Self { device, layout })
    }

    fn write_key_event(&mut self, key: Key, down: bool) -> Result<(), PlaybackError> {
        let scancode = self
            .layout
            .scancode_for_code(key)
            .ok_or(PlaybackError::UnmappedKey(key))?;

        let value = if down { 1 } else { 0 };
        let key_event = InputEvent::new(EventType::KEY, scancode, value);
        // SYN event is required for the kernel to process the key event
        let syn_event = InputEvent::new(EventType::SYNCHRONIZATION, 0, 0);

        self.device
            .emit(&[key_event, syn_event])
            .map_err(|e: std::io::Error| PlaybackError::Backend(e.to_string()))
    }
}

impl Playback for VirtualDevice {
    fn press(&mut self, key: Key) -> Result<(), PlaybackError> {
        self.write_key_event(key, true)
    }

    fn release(&mut self, key: Key) -> Result<(), PlaybackError> {
        self.write_key_event(key, false)
    }

    fn wait(&mut self, seconds: f64) -> Result<(), PlaybackError> {
        if seconds > 0.0 {
            std::thread::sleep(Duration::from_secs_f64(seconds));
        }
        Ok(())
    }

    /// uinput has no Unicode injection path; unresolvable literals are
    /// logged and skipped so the rest of the sequence still plays.
    fn type_literal(&mut self, c: char) -> Result<(), PlaybackError> {
        log::warn!("no key mapping for {:?}, character skipped", c);
        Ok(())
    }
}

impl NumlockControl for VirtualDevice {
    // A freshly created virtual device exposes no lock LED state, so
    // there is nothing to query or restore here.
    fn get_and_clear_numlock(&mut self) -> bool {
        false
    }

    fn set_numlock(&mut self, _on: bool) {}
}
