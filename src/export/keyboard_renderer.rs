//! Keyboard diagram renderer.
//!
//! Generates a Unicode keyboard diagram using box-drawing characters. Each
//! physical row is drawn as two text lines, unshifted and shifted; a cell
//! shows the plain label and, when it differs, the `Mod5` label next to it.
//! Rows are staggered like a real board and a fixed modifier row closes the
//! drawing.

use crate::models::{Layout, ROW_COUNT, ROW_LENGTHS};

/// Content width of a regular key cell.
const KEY_WIDTH: usize = 5;

/// Extra width of the first key in each row, mirroring the physical stagger.
const ROW_STAGGER: [usize; ROW_COUNT] = [0, 3, 4, 6];

/// Width of every line of the diagram, borders included.
pub const LINE_WIDTH: usize = 89;

/// Fixed bottom row: label and content width of each key.
const BOTTOM_ROW: [(&str, usize); 9] = [
    ("Ctrl", 6),
    ("Fn", 5),
    ("Super", 6),
    ("Alt", 6),
    ("Space", 32),
    ("Alt", 6),
    ("Lang", 6),
    ("Menu", 6),
    ("Ctrl", 6),
];

/// One drawn row: cell widths plus the text of its two lines.
#[derive(Debug, Clone)]
struct DiagramRow {
    widths: Vec<usize>,
    lines: [Vec<String>; 2],
}

impl DiagramRow {
    /// X positions of the vertical dividers of this row.
    fn dividers(&self) -> Vec<usize> {
        let mut x = 0;
        let mut positions = vec![x];
        for width in &self.widths {
            x += width + 1;
            positions.push(x);
        }
        positions
    }
}

/// Renders the layout as a Unicode keyboard diagram.
///
/// # Example
///
/// ```text
/// ┌─────┬─────┬─────┬ ... ┬─────┬─────────┐
/// │  `  │  1  │  2  │ ... │  =  │  Back   │
/// │  ~  │  !  │  @  │ ... │  +  │         │
/// ├─────┴──┬──┴──┬──┴ ... ┴──┬──┴──┬──────┤
/// │        │  q  │  w  │ ...
/// ```
#[must_use]
pub fn render_keyboard_diagram(layout: &Layout) -> String {
    let mut rows: Vec<DiagramRow> = (0..ROW_COUNT).map(|row| build_key_row(layout, row)).collect();
    rows.push(build_bottom_row());

    let mut output = String::new();
    let mut above: Option<Vec<usize>> = None;

    for row in &rows {
        let dividers = row.dividers();
        output.push_str(&render_border(above.as_deref(), Some(dividers.as_slice())));
        output.push('\n');

        for cells in &row.lines {
            output.push_str(&render_cells(&row.widths, cells));
            output.push('\n');
        }

        above = Some(dividers);
    }

    output.push_str(&render_border(above.as_deref(), None));
    output.push('\n');

    output
}

/// Cell widths of a physical row.
///
/// The first key grows by the row's stagger and the last key takes up
/// whatever is left of [`LINE_WIDTH`].
fn row_widths(row: usize) -> Vec<usize> {
    let count = ROW_LENGTHS[row];
    let first = KEY_WIDTH + ROW_STAGGER[row];

    let mut widths = Vec::with_capacity(count);
    widths.push(first);
    widths.extend(std::iter::repeat(KEY_WIDTH).take(count.saturating_sub(2)));

    let used: usize = 1 + widths.iter().map(|width| width + 1).sum::<usize>();
    widths.push(LINE_WIDTH.saturating_sub(used + 1));

    widths
}

/// Builds the two text lines of a physical row.
///
/// The shifted line is left blank wherever it would repeat the unshifted
/// line above it.
fn build_key_row(layout: &Layout, row: usize) -> DiagramRow {
    let unshifted = cell_labels(layout, row, 0);
    let shifted = cell_labels(layout, row, 1)
        .into_iter()
        .zip(&unshifted)
        .map(|(shifted, above)| if &shifted == above { String::new() } else { shifted })
        .collect();

    DiagramRow {
        widths: row_widths(row),
        lines: [unshifted, shifted],
    }
}

/// Cell texts for one shift state: the plain label, then the `Mod5` label if it differs.
fn cell_labels(layout: &Layout, row: usize, shift: u8) -> Vec<String> {
    let plain = layout.grid(shift).row(row);
    let alternate = layout.grid(shift | 0b100).row(row);

    plain
        .iter()
        .zip(alternate)
        .map(|(plain, alternate)| {
            if plain == alternate {
                plain.clone()
            } else {
                format!("{plain} {alternate}")
            }
        })
        .collect()
}

/// Builds the fixed modifier row followed by a blank spacer line.
fn build_bottom_row() -> DiagramRow {
    let widths = BOTTOM_ROW.iter().map(|&(_, width)| width).collect();
    let labels = BOTTOM_ROW.iter().map(|&(label, _)| label.to_string()).collect();
    let spacer = vec![String::new(); BOTTOM_ROW.len()];

    DiagramRow {
        widths,
        lines: [labels, spacer],
    }
}

/// Renders one content line: cells centered between vertical bars.
fn render_cells(widths: &[usize], cells: &[String]) -> String {
    let mut line = String::from('│');
    for (width, text) in widths.iter().zip(cells) {
        line.push_str(&center(text, *width));
        line.push('│');
    }
    line
}

/// Centers text in a field, truncating if it does not fit.
fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.chars().take(width).collect();
    }

    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Renders a horizontal border between two rows of dividers.
///
/// Each position picks the junction glyph that connects the dividers
/// above and below it.
fn render_border(above: Option<&[usize]>, below: Option<&[usize]>) -> String {
    (0..LINE_WIDTH)
        .map(|x| {
            junction(
                has_divider(above, x),
                has_divider(below, x),
                x > 0,
                x + 1 < LINE_WIDTH,
            )
        })
        .collect()
}

fn has_divider(dividers: Option<&[usize]>, x: usize) -> bool {
    dividers.is_some_and(|positions| positions.binary_search(&x).is_ok())
}

/// Box-drawing glyph connecting the given directions.
const fn junction(up: bool, down: bool, left: bool, right: bool) -> char {
    match (up, down, left, right) {
        (false, false, _, _) => '─',
        (true, true, true, true) => '┼',
        (true, true, false, true) => '├',
        (true, true, true, false) => '┤',
        (false, true, true, true) => '┬',
        (true, false, true, true) => '┴',
        (false, true, false, true) => '┌',
        (false, true, true, false) => '┐',
        (true, false, false, true) => '└',
        (true, false, true, false) => '┘',
        _ => '│',
    }
}
