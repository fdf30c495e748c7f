//! Layout file generation (serialization).
//!
//! This module writes a [`Layout`] back out in the editable layout format,
//! normalized: redundant modifier blocks are dropped and every row is aligned
//! so the wide keys on the right line up. Files are written atomically.

use crate::models::{modifiers, Grid, Layout};
use anyhow::{Context, Result};
use std::fmt::Write;
use std::path::Path;

/// Text width of every emitted row.
pub const ROW_WIDTH: usize = 43;

/// Comment block placed at the top of generated files.
const HEADER: &str = "\
# Keyboard layout for xkblayout.
#
# The first line is the layout name. Each block below starts with the
# modifiers it applies to ('None', or names from Shift, Mod1 and Mod5
# joined with '&') followed by four rows of keys, top row first.
# Blocks left out copy the 'None' or 'Shift' block.
";

/// Generates layout text from a Layout and writes it to `path`.
///
/// This performs an atomic write using a temp file + rename pattern to ensure
/// the file is never left in a corrupted state.
///
/// # Errors
///
/// Returns errors for:
/// - File I/O failures
/// - Permission issues
/// - Atomic rename failures
pub fn save_layout(layout: &Layout, path: &Path) -> Result<()> {
    let text = generate_layout_text(layout);
    atomic_write(path, &text)
}

/// Generates normalized layout text.
///
/// Parsing the result yields a layout equal to `layout`.
#[must_use]
pub fn generate_layout_text(layout: &Layout) -> String {
    let mut output = String::from(HEADER);
    output.push('\n');
    output.push_str(layout.name());
    output.push('\n');

    for (mask, grid) in layout.compressed_slots().iter().enumerate() {
        output.push('\n');
        // `compressed_slots` never holds more than eight grids
        #[allow(clippy::cast_possible_truncation)]
        let label = modifiers::encode(mask as u8);
        output.push_str(&label);
        output.push('\n');
        output.push_str(&generate_block(grid));
    }

    output
}

/// Generates the four aligned rows of one grid.
fn generate_block(grid: &Grid) -> String {
    let mut output = String::new();
    for row in grid.rows() {
        output.push_str(&format_row(row));
        output.push('\n');
    }
    output
}

/// Formats one row of labels.
///
/// The first label is left-aligned in two columns, the middle labels are
/// right-aligned in two columns after a space, and the last label is pushed
/// right so the row ends at [`ROW_WIDTH`].
fn format_row(labels: &[String]) -> String {
    let Some((first, rest)) = labels.split_first() else {
        return String::new();
    };

    let mut line = format!("{first:<2}");
    let Some((last, middle)) = rest.split_last() else {
        return line.trim_end().to_string();
    };

    for label in middle {
        // Writing to a String cannot fail
        let _ = write!(line, " {label:>2}");
    }

    let used = line.chars().count();
    let last_width = ROW_WIDTH
        .saturating_sub(used)
        .max(last.chars().count() + 1);
    let _ = write!(line, "{last:>last_width$}");

    line
}

/// Performs an atomic file write using temp file + rename pattern.
///
/// This ensures the target file is never left in a corrupted state:
/// 1. Write to temporary file
/// 2. Atomic rename to target path
pub fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    std::fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write to temporary file: {}", temp_path.display()))?;

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temporary file to: {}", path.display()))?;

    Ok(())
}
