// Sendkeyz Key Type
// Represents a single abstract key code from the virtual-key registry

use std::fmt;
use std::str::FromStr;
use std::sync::{LazyLock, OnceLock};

include!(concat!(env!("OUT_DIR"), "/key_codes.rs"));

/// Display name for a key code
pub fn key_name(code: u16) -> &'static str {
    static KEY_NAMES: OnceLock<Vec<&'static str>> = OnceLock::new();
    KEY_NAMES
        .get_or_init(|| {
            let mut names = vec!["UNKNOWN"; 0x100];
            names[0x01] = "LBUTTON";
            names[0x02] = "RBUTTON";
            names[0x03] = "CANCEL";
            names[0x04] = "MBUTTON";
            names[0x05] = "XBUTTON1";
            names[0x06] = "XBUTTON2";
            names[0x08] = "BACK";
            names[0x09] = "TAB";
            names[0x0C] = "CLEAR";
            names[0x0D] = "RETURN";
            names[0x10] = "SHIFT";
            names[0x11] = "CONTROL";
            names[0x12] = "MENU";
            names[0x13] = "PAUSE";
            names[0x14] = "CAPITAL";
            names[0x15] = "KANA";
            names[0x17] = "JUNJA";
            names[0x18] = "FINAL";
            names[0x19] = "HANJA";
            names[0x1B] = "ESCAPE";
            names[0x1C] = "CONVERT";
            names[0x1D] = "NONCONVERT";
            names[0x1E] = "ACCEPT";
            names[0x1F] = "MODECHANGE";
            names[0x20] = "SPACE";
            names[0x21] = "PRIOR";
            names[0x22] = "NEXT";
            names[0x23] = "END";
            names[0x24] = "HOME";
            names[0x25] = "LEFT";
            names[0x26] = "UP";
            names[0x27] = "RIGHT";
            names[0x28] = "DOWN";
            names[0x29] = "SELECT";
            names[0x2A] = "PRINT";
            names[0x2B] = "EXECUTE";
            names[0x2C] = "SNAPSHOT";
            names[0x2D] = "INSERT";
            names[0x2E] = "DELETE";
            names[0x2F] = "HELP";
            // 0x30-0x39 are the digit keys, 0x41-0x5A the letter keys;
            // their names are their ASCII characters.
            const DIGITS: &[&str] = &["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
            for (i, &name) in DIGITS.iter().enumerate() {
                names[0x30 + i] = name;
            }
            const LETTERS: &[&str] = &[
                "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P",
                "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z",
            ];
            for (i, &name) in LETTERS.iter().enumerate() {
                names[0x41 + i] = name;
            }
            names[0x5B] = "LWIN";
            names[0x5C] = "RWIN";
            names[0x5D] = "APPS";
            names[0x5F] = "SLEEP";
            names[0x60] = "NUMPAD0";
            names[0x61] = "NUMPAD1";
            names[0x62] = "NUMPAD2";
            names[0x63] = "NUMPAD3";
            names[0x64] = "NUMPAD4";
            names[0x65] = "NUMPAD5";
            names[0x66] = "NUMPAD6";
            names[0x67] = "NUMPAD7";
            names[0x68] = "NUMPAD8";
            names[0x69] = "NUMPAD9";
            names[0x6A] = "MULTIPLY";
            names[0x6B] = "ADD";
            names[0x6C] = "SEPARATOR";
            names[0x6D] = "SUBTRACT";
            names[0x6E] = "DECIMAL";
            names[0x6F] = "DIVIDE";
            names[0x70] = "F1";
            names[0x71] = "F2";
            names[0x72] = "F3";
            names[0x73] = "F4";
            names[0x74] = "F5";
            names[0x75] = "F6";
            names[0x76] = "F7";
            names[0x77] = "F8";
            names[0x78] = "F9";
            names[0x79] = "F10";
            names[0x7A] = "F11";
            names[0x7B] = "F12";
            names[0x7C] = "F13";
            names[0x7D] = "F14";
            names[0x7E] = "F15";
            names[0x7F] = "F16";
            names[0x80] = "F17";
            names[0x81] = "F18";
            names[0x82] = "F19";
            names[0x83] = "F20";
            names[0x84] = "F21";
            names[0x85] = "F22";
            names[0x86] = "F23";
            names[0x87] = "F24";
            names[0x90] = "NUMLOCK";
            names[0x91] = "SCROLL";
            names[0x92] = "OEM_NEC_EQUAL";
            names[0x93] = "OEM_FJ_MASSHOU";
            names[0x94] = "OEM_FJ_TOUROKU";
            names[0x95] = "OEM_FJ_LOYA";
            names[0x96] = "OEM_FJ_ROYA";
            names[0xA0] = "LSHIFT";
            names[0xA1] = "RSHIFT";
            names[0xA2] = "LCONTROL";
            names[0xA3] = "RCONTROL";
            names[0xA4] = "LMENU";
            names[0xA5] = "RMENU";
            names[0xA6] = "BROWSER_BACK";
            names[0xA7] = "BROWSER_FORWARD";
            names[0xA8] = "BROWSER_REFRESH";
            names[0xA9] = "BROWSER_STOP";
            names[0xAA] = "BROWSER_SEARCH";
            names[0xAB] = "BROWSER_FAVORITES";
            names[0xAC] = "BROWSER_HOME";
            names[0xAD] = "VOLUME_MUTE";
            names[0xAE] = "VOLUME_DOWN";
            names[0xAF] = "VOLUME_UP";
            names[0xB0] = "MEDIA_NEXT_TRACK";
            names[0xB1] = "MEDIA_PREV_TRACK";
            names[0xB2] = "MEDIA_STOP";
            names[0xB3] = "MEDIA_PLAY_PAUSE";
            names[0xB4] = "LAUNCH_MAIL";
            names[0xB5] = "LAUNCH_MEDIA_SELECT";
            names[0xB6] = "LAUNCH_APP1";
            names[0xB7] = "LAUNCH_APP2";
            names[0xBA] = "OEM_1";
            names[0xBB] = "OEM_PLUS";
            names[0xBC] = "OEM_COMMA";
            names[0xBD] = "OEM_MINUS";
            names[0xBE] = "OEM_PERIOD";
            names[0xBF] = "OEM_2";
            names[0xC0] = "OEM_3";
            names[0xDB] = "OEM_4";
            names[0xDC] = "OEM_5";
            names[0xDD] = "OEM_6";
            names[0xDE] = "OEM_7";
            names[0xDF] = "OEM_8";
            names[0xE1] = "OEM_AX";
            names[0xE2] = "OEM_102";
            names[0xE3] = "ICO_HELP";
            names[0xE4] = "ICO_00";
            names[0xE5] = "PROCESSKEY";
            names[0xE6] = "ICO_CLEAR";
            names[0xE7] = "PACKET";
            names[0xE9] = "OEM_RESET";
            names[0xEA] = "OEM_JUMP";
            names[0xEB] = "OEM_PA1";
            names[0xEC] = "OEM_PA2";
            names[0xED] = "OEM_PA3";
            names[0xEE] = "OEM_WSCTRL";
            names[0xEF] = "OEM_CUSEL";
            names[0xF0] = "OEM_ATTN";
            names[0xF1] = "OEM_FINISH";
            names[0xF2] = "OEM_COPY";
            names[0xF3] = "OEM_AUTO";
            names[0xF4] = "OEM_ENLW";
            names[0xF5] = "OEM_BACKTAB";
            names[0xF6] = "ATTN";
            names[0xF7] = "CRSEL";
            names[0xF8] = "EXSEL";
            names[0xF9] = "EREOF";
            names[0xFA] = "PLAY";
            names[0xFB] = "ZOOM";
            names[0xFC] = "NONAME";
            names[0xFD] = "PA1";
            names[0xFE] = "OEM_CLEAR";
            names
        })
        .get(code as usize)
        .copied()
        .unwrap_or("UNKNOWN")
}

/// Look up a symbolic key name in the registry.
///
/// Lookup is exact-match and case-sensitive. The name set and code values
/// are the stable compatibility contract for any caller persisting or
/// logging resolved codes; single characters resolve through the layout
/// table, not here.
pub fn key_from_name(name: &str) -> Option<Key> {
    static NAME_TO_CODE: LazyLock<Vec<(&'static str, u16)>> = LazyLock::new(|| {
        vec![
            ("LBUTTON", 0x01),
            ("RBUTTON", 0x02),
            ("CANCEL", 0x03),
            ("MBUTTON", 0x04),
            ("XBUTTON1", 0x05),
            ("XBUTTON2", 0x06),
            ("BACK", 0x08),
            ("TAB", 0x09),
            ("CLEAR", 0x0C),
            ("RETURN", 0x0D),
            ("ENTER", 0x0D),
            ("\n", 0x0D),
            ("SHIFT", 0x10),
            ("CONTROL", 0x11),
            ("CTRL", 0x11),
            ("MENU", 0x12),
            ("ALT", 0x12),
            ("PAUSE", 0x13),
            ("CAPITAL", 0x14),
            ("KANA", 0x15),
            ("HANGEUL", 0x15),
            ("HANGUL", 0x15),
            ("JUNJA", 0x17),
            ("FINAL", 0x18),
            ("HANJA", 0x19),
            ("KANJI", 0x19),
            ("ESCAPE", 0x1B),
            ("CONVERT", 0x1C),
            ("NONCONVERT", 0x1D),
            ("ACCEPT", 0x1E),
            ("MODECHANGE", 0x1F),
            ("SPACE", 0x20),
            ("PRIOR", 0x21),
            ("NEXT", 0x22),
            ("END", 0x23),
            ("HOME", 0x24),
            ("LEFT", 0x25),
            ("UP", 0x26),
            ("RIGHT", 0x27),
            ("DOWN", 0x28),
            ("SELECT", 0x29),
            ("PRINT", 0x2A),
            ("EXECUTE", 0x2B),
            ("SNAPSHOT", 0x2C),
            ("INSERT", 0x2D),
            ("DELETE", 0x2E),
            ("HELP", 0x2F),
            ("LWIN", 0x5B),
            ("RWIN", 0x5C),
            ("APPS", 0x5D),
            ("SLEEP", 0x5F),
            ("NUMPAD0", 0x60),
            ("NUMPAD1", 0x61),
            ("NUMPAD2", 0x62),
            ("NUMPAD3", 0x63),
            ("NUMPAD4", 0x64),
            ("NUMPAD5", 0x65),
            ("NUMPAD6", 0x66),
            ("NUMPAD7", 0x67),
            ("NUMPAD8", 0x68),
            ("NUMPAD9", 0x69),
            ("MULTIPLY", 0x6A),
            ("ADD", 0x6B),
            ("SEPARATOR", 0x6C),
            ("SUBTRACT", 0x6D),
            ("DECIMAL", 0x6E),
            ("DIVIDE", 0x6F),
            ("F1", 0x70),
            ("F2", 0x71),
            ("F3", 0x72),
            ("F4", 0x73),
            ("F5", 0x74),
            ("F6", 0x75),
            ("F7", 0x76),
            ("F8", 0x77),
            ("F9", 0x78),
            ("F10", 0x79),
            ("F11", 0x7A),
            ("F12", 0x7B),
            ("F13", 0x7C),
            ("F14", 0x7D),
            ("F15", 0x7E),
            ("F16", 0x7F),
            ("F17", 0x80),
            ("F18", 0x81),
            ("F19", 0x82),
            ("F20", 0x83),
            ("F21", 0x84),
            ("F22", 0x85),
            ("F23", 0x86),
            ("F24", 0x87),
            ("NUMLOCK", 0x90),
            ("SCROLL", 0x91),
            ("OEM_NEC_EQUAL", 0x92),
            ("OEM_FJ_JISHO", 0x92),
            ("OEM_FJ_MASSHOU", 0x93),
            ("OEM_FJ_TOUROKU", 0x94),
            ("OEM_FJ_LOYA", 0x95),
            ("OEM_FJ_ROYA", 0x96),
            ("LSHIFT", 0xA0),
            ("RSHIFT", 0xA1),
            ("LCONTROL", 0xA2),
            ("RCONTROL", 0xA3),
            ("LMENU", 0xA4),
            ("RMENU", 0xA5),
            ("ALTGR", 0xA5),
            ("BROWSER_BACK", 0xA6),
            ("BROWSER_FORWARD", 0xA7),
            ("BROWSER_REFRESH", 0xA8),
            ("BROWSER_STOP", 0xA9),
            ("BROWSER_SEARCH", 0xAA),
            ("BROWSER_FAVORITES", 0xAB),
            ("BROWSER_HOME", 0xAC),
            ("VOLUME_MUTE", 0xAD),
            ("VOLUME_DOWN", 0xAE),
            ("VOLUME_UP", 0xAF),
            ("MEDIA_NEXT_TRACK", 0xB0),
            ("MEDIA_PREV_TRACK", 0xB1),
            ("MEDIA_STOP", 0xB2),
            ("MEDIA_PLAY_PAUSE", 0xB3),
            ("LAUNCH_MAIL", 0xB4),
            ("LAUNCH_MEDIA_SELECT", 0xB5),
            ("LAUNCH_APP1", 0xB6),
            ("LAUNCH_APP2", 0xB7),
            ("OEM_1", 0xBA),
            ("OEM_PLUS", 0xBB),
            ("OEM_COMMA", 0xBC),
            ("OEM_MINUS", 0xBD),
            ("OEM_PERIOD", 0xBE),
            ("OEM_2", 0xBF),
            ("OEM_3", 0xC0),
            ("OEM_4", 0xDB),
            ("OEM_5", 0xDC),
            ("OEM_6", 0xDD),
            ("OEM_7", 0xDE),
            ("OEM_8", 0xDF),
            ("OEM_AX", 0xE1),
            ("OEM_102", 0xE2),
            ("ICO_HELP", 0xE3),
            ("ICO_00", 0xE4),
            ("PROCESSKEY", 0xE5),
            ("ICO_CLEAR", 0xE6),
            ("PACKET", 0xE7),
            ("OEM_RESET", 0xE9),
            ("OEM_JUMP", 0xEA),
            ("OEM_PA1", 0xEB),
            ("OEM_PA2", 0xEC),
            ("OEM_PA3", 0xED),
            ("OEM_WSCTRL", 0xEE),
            ("OEM_CUSEL", 0xEF),
            ("OEM_ATTN", 0xF0),
            ("OEM_FINISH", 0xF1),
            ("OEM_COPY", 0xF2),
            ("OEM_AUTO", 0xF3),
            ("OEM_ENLW", 0xF4),
            ("OEM_BACKTAB", 0xF5),
            ("ATTN", 0xF6),
            ("CRSEL", 0xF7),
            ("EXSEL", 0xF8),
            ("EREOF", 0xF9),
            ("PLAY", 0xFA),
            ("ZOOM", 0xFB),
            ("NONAME", 0xFC),
            ("PA1", 0xFD),
            ("OEM_CLEAR", 0xFE),
        ]
    });
    NAME_TO_CODE
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, code)| Key::from(*code))
}

/// Generic ASCII fallback: letters and digits map to their virtual-key
/// identity (the uppercase ASCII value). Layout-specific character shapes
/// take precedence over this; the resolver only consults it last.
pub fn ascii_to_key(c: char) -> Option<Key> {
    match c {
        'a'..='z' => Some(Key::from(c.to_ascii_uppercase() as u16)),
        'A'..='Z' | '0'..='9' => Some(Key::from(c as u16)),
        _ => None,
    }
}
