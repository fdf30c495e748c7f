//! Fixed physical geometry of the keyboard.
//!
//! The layout format describes the 53 character keys of a standard ANSI/ISO
//! board in four rows. Each key is addressed by its XKB key code, left to right
//! and top to bottom.

/// Number of character rows on the board.
pub const ROW_COUNT: usize = 4;

/// Number of keys in each row, top to bottom.
pub const ROW_LENGTHS: [usize; ROW_COUNT] = [14, 14, 13, 12];

/// Number row: tilde, digits, minus, equal, backspace.
const NUMBER_ROW: [&str; 14] = [
    "TLDE", "AE01", "AE02", "AE03", "AE04", "AE05", "AE06", "AE07", "AE08", "AE09", "AE10",
    "AE11", "AE12", "BKSP",
];

/// Top letter row, tab through backslash.
const TOP_ROW: [&str; 14] = [
    "TAB", "AD01", "AD02", "AD03", "AD04", "AD05", "AD06", "AD07", "AD08", "AD09", "AD10",
    "AD11", "AD12", "BKSL",
];

/// Home row, caps lock through return.
const HOME_ROW: [&str; 13] = [
    "CAPS", "AC01", "AC02", "AC03", "AC04", "AC05", "AC06", "AC07", "AC08", "AC09", "AC10",
    "AC11", "RTRN",
];

/// Bottom letter row, between the two shift keys.
const BOTTOM_ROW: [&str; 12] = [
    "LFSH", "AB01", "AB02", "AB03", "AB04", "AB05", "AB06", "AB07", "AB08", "AB09", "AB10",
    "RTSH",
];

/// XKB key codes of every physical key, grouped by row.
pub const KEY_CODES: [&[&str]; ROW_COUNT] = [&NUMBER_ROW, &TOP_ROW, &HOME_ROW, &BOTTOM_ROW];

/// Returns the XKB key code of the key at `row`, `col`.
#[must_use]
pub fn key_code(row: usize, col: usize) -> Option<&'static str> {
    KEY_CODES.get(row).and_then(|codes| codes.get(col)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_codes_match_row_lengths() {
        for (codes, &len) in KEY_CODES.iter().zip(ROW_LENGTHS.iter()) {
            assert_eq!(codes.len(), len);
        }
        assert_eq!(ROW_LENGTHS.iter().sum::<usize>(), 53);
    }

    #[test]
    fn test_key_code_lookup() {
        assert_eq!(key_code(0, 0), Some("TLDE"));
        assert_eq!(key_code(1, 13), Some("BKSL"));
        assert_eq!(key_code(3, 11), Some("RTSH"));
        assert_eq!(key_code(3, 12), None);
        assert_eq!(key_code(4, 0), None);
    }

    #[test]
    fn test_key_codes_are_unique() {
        let mut all: Vec<&str> = KEY_CODES.iter().flat_map(|row| row.iter().copied()).collect();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), 53);
    }
}
