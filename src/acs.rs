//! ACS (Alternate Character Set) symbolic constants.
//!
//! The native library only knows the value of its line-drawing glyphs
//! (`acs_map`) after `initscr` has run, so the table of named constants
//! cannot be a static: it is captured from the native layer during
//! [`Curses::init`](crate::Curses::init) and registered into the
//! context exactly once.

use crate::native::Native;
use crate::types::ChType;

/// The VT100 identifier of each named glyph, in registration order.
///
/// The second element is the index into the native `acs_map`.
const ACS_NAMES: [(&str, u8); 25] = [
    ("ACS_ULCORNER", b'l'),
    ("ACS_LLCORNER", b'm'),
    ("ACS_URCORNER", b'k'),
    ("ACS_LRCORNER", b'j'),
    ("ACS_LTEE", b't'),
    ("ACS_RTEE", b'u'),
    ("ACS_BTEE", b'v'),
    ("ACS_TTEE", b'w'),
    ("ACS_HLINE", b'q'),
    ("ACS_VLINE", b'x'),
    ("ACS_PLUS", b'n'),
    ("ACS_S1", b'o'),
    ("ACS_S9", b's'),
    ("ACS_DIAMOND", b'`'),
    ("ACS_CKBOARD", b'a'),
    ("ACS_DEGREE", b'f'),
    ("ACS_PLMINUS", b'g'),
    ("ACS_BULLET", b'~'),
    ("ACS_LARROW", b','),
    ("ACS_RARROW", b'+'),
    ("ACS_DARROW", b'.'),
    ("ACS_UARROW", b'-'),
    ("ACS_BOARD", b'h'),
    ("ACS_LANTERN", b'i'),
    ("ACS_BLOCK", b'0'),
];

/// The symbolic-constant table a host registers into its globals.
///
/// Entries are border/line-drawing glyph codes suitable for
/// [`border`](crate::Curses::border) and the line-drawing adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantTable {
    entries: Vec<(&'static str, ChType)>,
}

impl ConstantTable {
    /// Capture the glyph values from the native layer.
    pub(crate) fn load<N: Native>(native: &N) -> Self {
        Self {
            entries: ACS_NAMES
                .iter()
                .map(|&(name, vt100)| (name, native.acs_char(vt100)))
                .collect(),
        }
    }

    /// Look up a constant by name.
    pub fn get(&self, name: &str) -> Option<ChType> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, v)| v)
    }

    /// Number of registered constants.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty (it never is after `load`).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, ChType)> + '_ {
        self.entries.iter().copied()
    }
}
