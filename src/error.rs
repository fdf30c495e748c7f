//! Errors raised while turning layout text into a [`Layout`](crate::models::Layout).
//!
//! Every transform that starts from a valid layout is total, so the only
//! failure mode of the library is malformed input.

use thiserror::Error;

/// Malformed layout input.
///
/// Each variant names the invariant the input violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input held no name line (only blank lines or comments).
    #[error("malformed layout: no layout name found")]
    Empty,

    /// A modifier label used a name outside the fixed modifier list.
    #[error("malformed layout: unknown modifier '{name}' in label '{label}'")]
    UnknownModifier {
        /// The full label line
        label: String,
        /// The offending name
        name: String,
    },

    /// A modifier label named the same modifier twice.
    #[error("malformed layout: modifier '{name}' repeated in label '{label}'")]
    RepeatedModifier {
        /// The full label line
        label: String,
        /// The repeated name
        name: String,
    },

    /// A row did not hold the number of keys the physical geometry requires.
    #[error(
        "malformed layout: row length mismatch in block '{label}', row {row}: expected {expected} keys, found {found}"
    )]
    RowLengthMismatch {
        /// Modifier label of the block
        label: String,
        /// Zero-based row index
        row: usize,
        /// Required key count
        expected: usize,
        /// Key count found in the input
        found: usize,
    },

    /// A modifier label was not followed by a full set of rows.
    #[error("malformed layout: block '{label}' ends after {found} of {expected} rows")]
    IncompleteBlock {
        /// Modifier label of the block
        label: String,
        /// Required row count
        expected: usize,
        /// Rows actually present
        found: usize,
    },

    /// Two blocks decoded to the same modifier combination.
    #[error("malformed layout: modifier block '{label}' appears more than once")]
    DuplicateModifier {
        /// Canonical label of the repeated combination
        label: String,
    },

    /// One of the blocks every layout must spell out was absent.
    #[error("malformed layout: required modifier block '{label}' is missing")]
    MissingRequiredSlot {
        /// Canonical label of the missing combination
        label: String,
    },
}
