//! Character label to XKB keysym name table.
//!
//! Layout files label keys with the characters they produce (`$`, `{`) or
//! with short key names (`Back`, `Enter`). XKB wants keysym names
//! (`dollar`, `braceleft`, `BackSpace`). Single-character labels missing
//! from the table are encoded by codepoint. Longer labels missing from the
//! table are written unchanged, so the result is only a valid keysym if the
//! label already was one (`dead_acute` is, `Ins` is not).

use std::collections::HashMap;
use std::sync::LazyLock;

/// Named keys and modifier level pseudo-keys.
const NAMED_KEYS: &[(&str, &str)] = &[
    ("Esc", "Escape"),
    ("Tab", "Tab"),
    ("Caps", "Caps_Lock"),
    ("Enter", "Return"),
    ("Shift", "Shift_L"),
    ("Left", "Left"),
    ("Right", "Right"),
    ("Up", "Up"),
    ("Down", "Down"),
    ("Del", "Delete"),
    ("Back", "BackSpace"),
    ("Space", "space"),
    ("Level3", "ISO_Level3_Shift"),
    ("Level5", "ISO_Level5_Shift"),
];

/// Punctuation and symbols.
const SYMBOLS: &[(&str, &str)] = &[
    ("`", "grave"),
    ("~", "asciitilde"),
    ("!", "exclam"),
    ("@", "at"),
    ("#", "numbersign"),
    ("$", "dollar"),
    ("%", "percent"),
    ("^", "asciicircum"),
    ("&", "ampersand"),
    ("*", "asterisk"),
    ("(", "parenleft"),
    (")", "parenright"),
    ("-", "minus"),
    ("_", "underscore"),
    ("=", "equal"),
    ("+", "plus"),
    ("[", "bracketleft"),
    ("]", "bracketright"),
    ("{", "braceleft"),
    ("}", "braceright"),
    ("\\", "backslash"),
    ("|", "bar"),
    (";", "semicolon"),
    (":", "colon"),
    ("'", "apostrophe"),
    ("\"", "quotedbl"),
    (",", "comma"),
    ("<", "less"),
    (".", "period"),
    (">", "greater"),
    ("/", "slash"),
    ("?", "question"),
    ("№", "numerosign"),
];

/// ASCII letters and digits; their keysym names are the characters themselves.
const ALPHANUMERICS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

static TABLE: LazyLock<KeysymTable> = LazyLock::new(KeysymTable::build);

/// How a label was turned into a keysym name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keysym {
    /// Found in the table
    Named(&'static str),
    /// Single character outside the table, encoded as `U` + 4+ hex digits
    Codepoint(String),
    /// Multi-character label outside the table, written unchanged.
    ///
    /// Not checked against the XKB keysym list: xkbcomp rejects the
    /// symbols file if the label is not a real keysym name.
    Verbatim(String),
}

impl Keysym {
    /// The keysym name to write into the symbols file.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::Codepoint(name) | Self::Verbatim(name) => name.as_str(),
        }
    }

    /// True if the label missed the table.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        !matches!(self, Self::Named(_))
    }
}

/// Lookup table from key label to keysym name.
#[derive(Debug, Clone)]
pub struct KeysymTable {
    lookup: HashMap<&'static str, &'static str>,
}

impl KeysymTable {
    /// Returns the process-wide table, built on first use.
    pub fn shared() -> &'static Self {
        &TABLE
    }

    fn build() -> Self {
        let mut lookup: HashMap<&'static str, &'static str> = NAMED_KEYS
            .iter()
            .chain(SYMBOLS.iter())
            .copied()
            .collect();

        for (idx, ch) in ALPHANUMERICS.char_indices() {
            let name = &ALPHANUMERICS[idx..idx + ch.len_utf8()];
            lookup.insert(name, name);
        }

        Self { lookup }
    }

    /// Resolves a key label to its keysym.
    ///
    /// # Examples
    ///
    /// ```
    /// use xkblayout::keymap::keysyms::{Keysym, KeysymTable};
    ///
    /// let table = KeysymTable::shared();
    /// assert_eq!(table.resolve("$"), Keysym::Named("dollar"));
    /// assert_eq!(table.resolve("é").name(), "U00E9");
    /// ```
    #[must_use]
    pub fn resolve(&self, label: &str) -> Keysym {
        if let Some(&name) = self.lookup.get(label) {
            return Keysym::Named(name);
        }

        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Keysym::Codepoint(format!("U{:04X}", u32::from(ch))),
            _ => Keysym::Verbatim(label.to_string()),
        }
    }
}
