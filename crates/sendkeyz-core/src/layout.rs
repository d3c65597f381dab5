// Sendkeyz Layout Table
// Maps characters to device scancodes and scancodes to abstract key codes

use std::collections::HashMap;

use crate::modifier::ModifierFlags;
use crate::Key;

/// How a single character is produced on the active layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutEntry {
    /// Device-level scancode of the physical key
    pub scancode: u16,
    /// Synthetic modifiers required to produce the character
    pub modifiers: ModifierFlags,
}

/// Read-only keyboard layout table.
///
/// Built once per session (by a layout prober, one of the built-in
/// fallbacks, or a test double) and shared read-only across compilations.
/// The scancode↔code maps form a bijection over the keys present;
/// duplicate writes during construction are ignored (first write wins).
#[derive(Debug, Clone, Default)]
pub struct LayoutTable {
    chars: HashMap<char, LayoutEntry>,
    code_by_scancode: HashMap<u16, Key>,
    scancode_by_code: HashMap<Key, u16>,
}

impl LayoutTable {
    /// A table with no entries. Every character lookup misses; named keys
    /// still resolve through the registry.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> LayoutTableBuilder {
        LayoutTableBuilder {
            table: Self::default(),
        }
    }

    /// Layout entry for a literal character
    pub fn char_entry(&self, c: char) -> Option<&LayoutEntry> {
        self.chars.get(&c)
    }

    /// Abstract key code for a device scancode
    pub fn code_for_scancode(&self, scancode: u16) -> Option<Key> {
        self.code_by_scancode.get(&scancode).copied()
    }

    /// Device scancode for an abstract key code
    pub fn scancode_for_code(&self, code: Key) -> Option<u16> {
        self.scancode_by_code.get(&code).copied()
    }

    /// Static US layout fallback, for when no live layout probe is
    /// available. Characters cover ASCII letters, digits and punctuation.
    pub fn us_fallback() -> Self {
        let mut b = Self::builder();
        add_standard_keys(&mut b);
        add_base_chars(&mut b);
        b.add_char('\\', 43, ModifierFlags::NONE);
        const US_SHIFTED: &[(char, u16)] = &[
            ('!', 2),
            ('@', 3),
            ('#', 4),
            ('$', 5),
            ('%', 6),
            ('^', 7),
            ('&', 8),
            ('*', 9),
            ('(', 10),
            (')', 11),
            ('_', 12),
            ('+', 13),
            ('{', 26),
            ('}', 27),
            (':', 39),
            ('"', 40),
            ('~', 41),
            ('|', 43),
            ('<', 51),
            ('>', 52),
            ('?', 53),
        ];
        for &(c, scancode) in US_SHIFTED {
            b.add_char(c, scancode, ModifierFlags::SHIFT);
        }
        b.build()
    }

    /// Static UK layout fallback. Shares the US base; differs on the
    /// shifted number row, the hash/tilde key, the 102nd key and AltGr
    /// symbols.
    pub fn uk_fallback() -> Self {
        let mut b = Self::builder();
        add_standard_keys(&mut b);
        add_base_chars(&mut b);
        // The hash key sits next to ENTER; backslash and pipe live on the
        // 102nd key.
        b.add_char('#', 43, ModifierFlags::NONE);
        b.add_char('\\', 86, ModifierFlags::NONE);
        b.add_char('|', 86, ModifierFlags::SHIFT);
        const UK_SHIFTED: &[(char, u16)] = &[
            ('!', 2),
            ('"', 3),
            ('£', 4),
            ('$', 5),
            ('%', 6),
            ('^', 7),
            ('&', 8),
            ('*', 9),
            ('(', 10),
            (')', 11),
            ('_', 12),
            ('+', 13),
            ('{', 26),
            ('}', 27),
            (':', 39),
            ('@', 40),
            ('¬', 41),
            ('~', 43),
            ('<', 51),
            ('>', 52),
            ('?', 53),
        ];
        for &(c, scancode) in UK_SHIFTED {
            b.add_char(c, scancode, ModifierFlags::SHIFT);
        }
        b.add_char('€', 5, ModifierFlags::ALT_GRAPH);
        b.build()
    }
}

/// Builder for [`LayoutTable`]. All writes are first-write-wins: a
/// character, scancode or code that is already bound keeps its first
/// binding, which preserves the bijection between scancodes and codes.
#[derive(Debug)]
pub struct LayoutTableBuilder {
    table: LayoutTable,
}

impl LayoutTableBuilder {
    /// Bind an abstract key code to a device scancode, both directions.
    /// Skipped entirely if either side is already bound.
    pub fn add_key(&mut self, code: Key, scancode: u16) -> &mut Self {
        if self.table.code_by_scancode.contains_key(&scancode)
            || self.table.scancode_by_code.contains_key(&code)
        {
            return self;
        }
        self.table.code_by_scancode.insert(scancode, code);
        self.table.scancode_by_code.insert(code, scancode);
        self
    }

    /// Record how a character is produced. First write wins.
    pub fn add_char(&mut self, c: char, scancode: u16, modifiers: ModifierFlags) -> &mut Self {
        self.table
            .chars
            .entry(c)
            .or_insert(LayoutEntry { scancode, modifiers });
        self
    }

    pub fn build(self) -> LayoutTable {
        self.table
    }
}

/// Scancodes of the letter keys A-Z (input-event-codes order by letter)
const LETTER_SCANCODES: [u16; 26] = [
    30, 48, 46, 32, 18, 33, 34, 35, 23, 36, 37, 38, 50, 49, 24, 25, 16, 19, 31, 20, 22, 47, 17,
    45, 21, 44,
];

/// code↔scancode pairs shared by every built-in fallback
fn add_standard_keys(b: &mut LayoutTableBuilder) {
    for (i, &scancode) in LETTER_SCANCODES.iter().enumerate() {
        b.add_key(Key(0x41 + i as u16), scancode);
    }
    // Digit row: 1-9 then 0
    for i in 0..9u16 {
        b.add_key(Key(0x31 + i), 2 + i);
    }
    b.add_key(Key(0x30), 11);

    const NAMED: &[(u16, u16)] = &[
        (0x1B, 1),   // ESCAPE
        (0xBD, 12),  // OEM_MINUS
        (0xBB, 13),  // OEM_PLUS
        (0x08, 14),  // BACK
        (0x09, 15),  // TAB
        (0xDB, 26),  // OEM_4 '['
        (0xDD, 27),  // OEM_6 ']'
        (0x0D, 28),  // RETURN
        (0x11, 29),  // CONTROL
        (0xBA, 39),  // OEM_1 ';'
        (0xDE, 40),  // OEM_7 '\''
        (0xC0, 41),  // OEM_3 '`'
        (0x10, 42),  // SHIFT
        (0xDC, 43),  // OEM_5 '\\'
        (0xBC, 51),  // OEM_COMMA
        (0xBE, 52),  // OEM_PERIOD
        (0xBF, 53),  // OEM_2 '/'
        (0xA1, 54),  // RSHIFT
        (0x6A, 55),  // MULTIPLY
        (0x12, 56),  // MENU
        (0x20, 57),  // SPACE
        (0x14, 58),  // CAPITAL
        (0x70, 59),  // F1
        (0x71, 60),
        (0x72, 61),
        (0x73, 62),
        (0x74, 63),
        (0x75, 64),
        (0x76, 65),
        (0x77, 66),
        (0x78, 67),
        (0x79, 68),  // F10
        (0x90, 69),  // NUMLOCK
        (0x91, 70),  // SCROLL
        (0x67, 71),  // NUMPAD7
        (0x68, 72),
        (0x69, 73),
        (0x6D, 74),  // SUBTRACT
        (0x64, 75),  // NUMPAD4
        (0x65, 76),
        (0x66, 77),
        (0x6B, 78),  // ADD
        (0x61, 79),  // NUMPAD1
        (0x62, 80),
        (0x63, 81),
        (0x60, 82),  // NUMPAD0
        (0x6E, 83),  // DECIMAL
        (0xE2, 86),  // OEM_102
        (0x7A, 87),  // F11
        (0x7B, 88),  // F12
        (0xA3, 97),  // RCONTROL
        (0x6F, 98),  // DIVIDE
        (0x2C, 99),  // SNAPSHOT
        (0xA5, 100), // RMENU (AltGr)
        (0x24, 102), // HOME
        (0x26, 103), // UP
        (0x21, 104), // PRIOR
        (0x25, 105), // LEFT
        (0x27, 106), // RIGHT
        (0x23, 107), // END
        (0x28, 108), // DOWN
        (0x22, 109), // NEXT
        (0x2D, 110), // INSERT
        (0x2E, 111), // DELETE
        (0xAD, 113), // VOLUME_MUTE
        (0xAE, 114), // VOLUME_DOWN
        (0xAF, 115), // VOLUME_UP
        (0x13, 119), // PAUSE
        (0x5B, 125), // LWIN
        (0x5C, 126), // RWIN
        (0x5D, 127), // APPS
        (0xB0, 163), // MEDIA_NEXT_TRACK
        (0xB3, 164), // MEDIA_PLAY_PAUSE
        (0xB1, 165), // MEDIA_PREV_TRACK
        (0xB2, 166), // MEDIA_STOP
    ];
    for &(code, scancode) in NAMED {
        b.add_key(Key(code), scancode);
    }
}

/// Character entries shared by the US and UK fallbacks
fn add_base_chars(b: &mut LayoutTableBuilder) {
    for (i, &scancode) in LETTER_SCANCODES.iter().enumerate() {
        b.add_char((b'a' + i as u8) as char, scancode, ModifierFlags::NONE);
    }
    for i in 0..9u8 {
        b.add_char((b'1' + i) as char, 2 + i as u16, ModifierFlags::NONE);
    }
    b.add_char('0', 11, ModifierFlags::NONE);

    const BASE_PUNCT: &[(char, u16)] = &[
        ('-', 12),
        ('=', 13),
        ('[', 26),
        (']', 27),
        (';', 39),
        ('\'', 40),
        ('`', 41),
        (',', 51),
        ('.', 52),
        ('/', 53),
        (' ', 57),
        ('\t', 15),
        ('\n', 28),
    ];
    for &(c, scancode) in BASE_PUNCT {
        b.add_char(c, scancode, ModifierFlags::NONE);
    }
}
