//! Modifier combination labels.
//!
//! A layout holds one character grid per combination of three modifier keys.
//! In the layout file a combination is written as its modifier names joined
//! with `&` (for example `Shift & Mod1`), or as [`NO_MODIFIERS`] for the
//! unmodified grid. Internally a combination is a 3-bit mask indexing the
//! eight grid slots.

use crate::error::ParseError;

/// Modifier names, indexed by bit position.
pub const MODIFIER_NAMES: [&str; 3] = ["Shift", "Mod1", "Mod5"];

/// Label of the combination with no modifier held.
pub const NO_MODIFIERS: &str = "None";

/// Number of distinct modifier combinations (grid slots).
pub const SLOT_COUNT: usize = 1 << MODIFIER_NAMES.len();

/// Decodes a modifier label into its bitmask.
///
/// Names are matched exactly after trimming surrounding whitespace.
///
/// # Errors
///
/// Returns [`ParseError::UnknownModifier`] for a name outside
/// [`MODIFIER_NAMES`] and [`ParseError::RepeatedModifier`] when a name
/// occurs twice.
pub fn decode(label: &str) -> Result<u8, ParseError> {
    let label = label.trim();
    if label == NO_MODIFIERS {
        return Ok(0);
    }

    let mut mask = 0u8;
    for name in label.split('&').map(str::trim) {
        let bit = MODIFIER_NAMES
            .iter()
            .position(|&known| known == name)
            .ok_or_else(|| ParseError::UnknownModifier {
                label: label.to_string(),
                name: name.to_string(),
            })?;

        let flag = 1u8 << bit;
        if mask & flag != 0 {
            return Err(ParseError::RepeatedModifier {
                label: label.to_string(),
                name: name.to_string(),
            });
        }
        mask |= flag;
    }

    Ok(mask)
}

/// Encodes a bitmask as its canonical label.
///
/// Set bits are listed from the most significant modifier down, so
/// `encode(0b011)` is `"Mod1 & Shift"`. Bits above the modifier range are
/// ignored.
#[must_use]
pub fn encode(mask: u8) -> String {
    let names: Vec<&str> = MODIFIER_NAMES
        .iter()
        .enumerate()
        .rev()
        .filter(|(bit, _)| mask & (1 << bit) != 0)
        .map(|(_, &name)| name)
        .collect();

    if names.is_empty() {
        NO_MODIFIERS.to_string()
    } else {
        names.join(" & ")
    }
}
