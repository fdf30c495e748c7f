//! XKB symbols file generation.
//!
//! Emits an `xkb_symbols` block with one `key` line per physical key, listing
//! the keysym of every (compressed) modifier slot in level order.

// Allow format! appended to String - more readable for building the file
#![allow(clippy::format_push_string)]

use crate::constants::APP_BINARY_NAME;
use crate::keymap::keysyms::{Keysym, KeysymTable};
use crate::models::{key_code, Layout, ROW_LENGTHS};
use tracing::debug;

/// Key type declared when a layout uses more than four levels.
const EIGHT_LEVEL_TYPE: &str = "EIGHT_LEVEL";

/// Include that maps the level-five shift to a real modifier.
const LEVEL5_INCLUDE: &str = "level5(modifier_mapping)";

/// Options for keymap generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeymapOptions {
    /// Name of the emitted `xkb_symbols` block
    pub symbols_name: String,
}

impl Default for KeymapOptions {
    fn default() -> Self {
        Self {
            symbols_name: "basic".to_string(),
        }
    }
}

/// A label that was not in the keysym table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fallback {
    /// Key code of the physical key carrying the label
    pub key_code: &'static str,
    /// Modifier slot the label belongs to
    pub slot: usize,
    /// Label as written in the layout
    pub label: String,
    /// Keysym that was emitted instead
    pub keysym: Keysym,
}

/// Generated symbols file plus the diagnostics collected on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedKeymap {
    /// Symbols file content
    pub text: String,
    /// Every label that missed the keysym table, in emission order
    pub fallbacks: Vec<Fallback>,
}

/// Generates an XKB symbols file for `layout`.
///
/// Each fallback encoding is also reported as a `debug` event.
///
/// # Example
///
/// ```text
/// // Generated by xkblayout from layout "QWERTY"; edit the layout file, not this one.
/// default partial alphanumeric_keys modifier_keys
/// xkb_symbols "basic" {
///     name[Group1] = "QWERTY";
///
///     key <TLDE> {[ grave, asciitilde ]};
///     ...
/// };
/// ```
#[must_use]
pub fn generate_keymap(layout: &Layout, options: &KeymapOptions) -> GeneratedKeymap {
    let table = KeysymTable::shared();
    let mut fallbacks = Vec::new();

    let mut output = format!(
        "// Generated by {} from layout \"{}\"; edit the layout file, not this one.\n",
        APP_BINARY_NAME,
        escape(layout.name())
    );
    output.push_str("default partial alphanumeric_keys modifier_keys\n");
    output.push_str(&format!("xkb_symbols \"{}\" {{\n", escape(&options.symbols_name)));
    output.push_str(&format!("    name[Group1] = \"{}\";\n", escape(layout.name())));

    if layout.compressed_slots().len() > 4 {
        output.push_str(&format!("    key.type[Group1] = \"{EIGHT_LEVEL_TYPE}\";\n"));
        output.push_str(&format!("    include \"{LEVEL5_INCLUDE}\"\n"));
    }

    for (row, &len) in ROW_LENGTHS.iter().enumerate() {
        output.push('\n');
        for col in 0..len {
            let Some(key_code) = key_code(row, col) else {
                continue;
            };

            let labels = layout.key_labels(row, col);
            let mut names = Vec::with_capacity(labels.len());
            for (slot, label) in labels.into_iter().enumerate() {
                let keysym = table.resolve(label);
                names.push(keysym.name().to_string());

                if keysym.is_fallback() {
                    debug!(
                        "No keysym name for '{}' on <{}> (slot {}), emitting {}",
                        label,
                        key_code,
                        slot,
                        keysym.name()
                    );
                    fallbacks.push(Fallback {
                        key_code,
                        slot,
                        label: label.to_string(),
                        keysym,
                    });
                }
            }

            output.push_str(&format!(
                "    key <{}> {{[ {} ]}};\n",
                key_code,
                names.join(", ")
            ));
        }
    }

    output.push_str("};\n");

    GeneratedKeymap {
        text: output,
        fallbacks,
    }
}

/// Escapes text for use inside a double-quoted XKB string.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\t' => escaped.push_str("\\t"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '"' => escaped.push_str("\\\""),
            _ => escaped.push(ch),
        }
    }
    escaped
}
