//! Layout and character grid data structures.

use crate::error::ParseError;
use crate::models::geometry::{ROW_COUNT, ROW_LENGTHS};
use crate::models::modifiers::{self, SLOT_COUNT};

/// Character labels for every physical key under one modifier combination.
///
/// # Validation
///
/// - exactly [`ROW_COUNT`] rows
/// - row `i` holds exactly `ROW_LENGTHS[i]` labels
///
/// A label is any non-whitespace text: usually a single character, but
/// names such as `Back` or `Enter` are legal too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: [Vec<String>; ROW_COUNT],
}

impl Grid {
    /// Creates a grid, checking every row against the physical geometry.
    ///
    /// `label` names the modifier block and only feeds error messages.
    pub fn new(label: &str, rows: [Vec<String>; ROW_COUNT]) -> Result<Self, ParseError> {
        for (row, (keys, &expected)) in rows.iter().zip(ROW_LENGTHS.iter()).enumerate() {
            if keys.len() != expected {
                return Err(ParseError::RowLengthMismatch {
                    label: label.to_string(),
                    row,
                    expected,
                    found: keys.len(),
                });
            }
        }

        Ok(Self { rows })
    }

    /// Returns the labels of one physical row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[String] {
        &self.rows[row]
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Returns the label of the key at `row`, `col`.
    #[must_use]
    pub fn label(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }
}

/// A complete keyboard layout: a name plus one [`Grid`] per modifier combination.
///
/// Slot `m` holds the characters produced while the modifiers of bitmask `m`
/// are held (see [`modifiers`]). Every slot is populated; a layout can only
/// be built through [`Layout::from_slots`], which fills the gaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    name: String,
    characters: [Grid; SLOT_COUNT],
}

impl Layout {
    /// Builds a layout from the explicitly given slots.
    ///
    /// Slots 0 and 1 are required. Any other missing slot becomes a copy of
    /// the slot with the same shift state (`i % 2`).
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MissingRequiredSlot`] if slot 0 or 1 is `None`.
    pub fn from_slots(
        name: impl Into<String>,
        mut slots: [Option<Grid>; SLOT_COUNT],
    ) -> Result<Self, ParseError> {
        let (Some(unshifted), Some(shifted)) = (slots[0].clone(), slots[1].clone()) else {
            let missing = if slots[0].is_none() { 0 } else { 1 };
            return Err(ParseError::MissingRequiredSlot {
                label: modifiers::encode(missing),
            });
        };

        let base = [unshifted, shifted];
        let characters = std::array::from_fn(|index| {
            slots[index]
                .take()
                .unwrap_or_else(|| base[index % 2].clone())
        });

        Ok(Self {
            name: name.into(),
            characters,
        })
    }

    /// Display name of the layout.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the grid for a modifier bitmask.
    ///
    /// # Panics
    ///
    /// Panics if `mask` is not below [`SLOT_COUNT`].
    #[must_use]
    pub fn grid(&self, mask: u8) -> &Grid {
        &self.characters[usize::from(mask)]
    }

    /// All eight grids, indexed by modifier bitmask.
    #[must_use]
    pub fn slots(&self) -> &[Grid; SLOT_COUNT] {
        &self.characters
    }

    /// Returns the smallest prefix of slots that still describes the layout.
    ///
    /// If the third modifier changes nothing, only slots 0..4 are returned;
    /// if the second modifier then changes nothing either, only slots 0..2.
    /// Re-filling the missing slots by shift state reproduces all eight.
    #[must_use]
    pub fn compressed_slots(&self) -> &[Grid] {
        let slots = &self.characters[..];

        let slots = if slots[0..2] == slots[4..6] && slots[0..2] == slots[6..8] {
            &slots[..4]
        } else {
            slots
        };

        if slots.len() == 4 && slots[0..2] == slots[2..4] {
            &slots[..2]
        } else {
            slots
        }
    }

    /// Labels of one physical key, one per compressed slot, in level order.
    #[must_use]
    pub fn key_labels(&self, row: usize, col: usize) -> Vec<&str> {
        self.compressed_slots()
            .iter()
            .filter_map(|grid| grid.label(row, col))
            .collect()
    }
}
