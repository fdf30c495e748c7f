//! Layout file parsing.
//!
//! This module turns the human-editable layout text into a [`Layout`]. Parsing
//! is all-or-nothing: either every block is valid and a fully populated layout
//! comes back, or the first violation is reported.

use crate::constants::APP_BINARY_NAME;
use crate::error::ParseError;
use crate::models::{modifiers, Grid, Layout, ROW_COUNT, SLOT_COUNT};
use anyhow::{Context, Result};
use std::path::Path;

/// Marker that starts a comment line.
pub const COMMENT_MARKER: char = '#';

/// Parses a layout file into a Layout structure.
///
/// # File Format
///
/// ```text
/// # Comments start with '#'; blank lines are ignored
/// My Layout
///
/// None
/// `  1  2  3  4  5  6  7  8  9  0  -  =  Back
/// Tab q  w  e  r  t  y  u  i  o  p  [  ]    \
/// Caps a s  d  f  g  h  j  k  l  ;  '   Enter
/// Shift z x c  v  b  n  m  ,  .  /      Shift
///
/// Shift
/// ...four more rows...
/// ```
///
/// The first line is the layout name. Each block is a modifier label followed
/// by four rows of whitespace-separated key labels.
///
/// # Errors
///
/// Returns errors for:
/// - File not found or unreadable
/// - Any [`ParseError`] raised by [`parse_layout_str`]
pub fn parse_layout(path: &Path) -> Result<Layout> {
    if !path.exists() {
        anyhow::bail!(
            "Layout file not found: {}\n\n\
             To start from the built-in QWERTY layout, run: {} --reset {}",
            path.display(),
            APP_BINARY_NAME,
            path.display()
        );
    }

    if !path.is_file() {
        anyhow::bail!("Path is not a file: {}", path.display());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout file: {}", path.display()))?;

    parse_layout_str(&content)
        .with_context(|| format!("Failed to parse layout file: {}", path.display()))
}

/// Parses a layout from a string.
///
/// # Errors
///
/// Returns a [`ParseError`] if the name is missing, a modifier label is
/// invalid or repeated, a block is cut short, a row has the wrong number of
/// keys, or the `None` / `Shift` blocks are absent.
pub fn parse_layout_str(content: &str) -> Result<Layout, ParseError> {
    let mut lines = significant_lines(content);

    let name = lines.next().ok_or(ParseError::Empty)?;

    let mut slots: [Option<Grid>; SLOT_COUNT] = Default::default();
    while let Some(label) = lines.next() {
        let mask = modifiers::decode(label)?;
        let grid = parse_block(label, &mut lines)?;

        let slot = &mut slots[usize::from(mask)];
        if slot.is_some() {
            return Err(ParseError::DuplicateModifier {
                label: modifiers::encode(mask),
            });
        }
        *slot = Some(grid);
    }

    Layout::from_slots(name, slots)
}

/// Yields trimmed lines, skipping blank lines and comments.
fn significant_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_MARKER))
}

/// Reads the four rows following a modifier label.
fn parse_block<'a>(
    label: &str,
    lines: &mut impl Iterator<Item = &'a str>,
) -> Result<Grid, ParseError> {
    let mut rows: [Vec<String>; ROW_COUNT] = Default::default();

    for (found, row) in rows.iter_mut().enumerate() {
        let line = lines.next().ok_or_else(|| ParseError::IncompleteBlock {
            label: label.to_string(),
            expected: ROW_COUNT,
            found,
        })?;
        *row = line.split_whitespace().map(str::to_string).collect();
    }

    Grid::new(label, rows)
}
