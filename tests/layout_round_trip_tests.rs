//! Library-level tests for parsing, normalization and generation.

mod fixtures;
use fixtures::*;

use xkblayout::export::render_keyboard_diagram;
use xkblayout::keymap::{generate_keymap, Keysym, KeymapOptions};
use xkblayout::models::{modifiers, SLOT_COUNT};
use xkblayout::parser::{default_layout, generate_layout_text, parse_layout_str};
use xkblayout::ParseError;

#[test]
fn test_modifier_labels_round_trip() {
    for mask in 0..SLOT_COUNT as u8 {
        assert_eq!(modifiers::decode(&modifiers::encode(mask)).unwrap(), mask);
    }
}

#[test]
fn test_normalized_text_reparses_to_same_layout() {
    let inputs = [
        layout_text(
            "Two",
            &[indexed_block("None", "n"), indexed_block("Shift", "s")],
        ),
        layout_text(
            "Four",
            &[
                indexed_block("None", "n"),
                indexed_block("Shift", "s"),
                indexed_block("Mod1", "m"),
            ],
        ),
        layout_text(
            "Sparse Eight",
            &[
                indexed_block("Shift", "s"),
                indexed_block("None", "n"),
                indexed_block("Shift & Mod5", "x"),
            ],
        ),
        eight_level_layout_text(),
    ];

    for input in &inputs {
        let layout = parse_layout_str(input).unwrap();
        let normalized = generate_layout_text(&layout);
        let reparsed = parse_layout_str(&normalized).unwrap();

        assert_eq!(reparsed.slots(), layout.slots());
        assert_eq!(reparsed.name(), layout.name());

        // Normalizing twice changes nothing
        assert_eq!(generate_layout_text(&reparsed), normalized);
    }
}

#[test]
fn test_compression_levels() {
    let two = parse_layout_str(&layout_text(
        "Two",
        &[uniform_block("None", "x"), uniform_block("Shift", "x")],
    ))
    .unwrap();
    assert_eq!(two.compressed_slots().len(), 2);

    let four = parse_layout_str(&layout_text(
        "Four",
        &[
            uniform_block("None", "a"),
            uniform_block("Shift", "A"),
            uniform_block("Mod1 & Shift", "B"),
        ],
    ))
    .unwrap();
    assert_eq!(four.compressed_slots().len(), 4);

    let eight = parse_layout_str(&eight_level_layout_text()).unwrap();
    assert_eq!(eight.compressed_slots().len(), 8);
}

#[test]
fn test_identical_slots_emit_two_blocks_and_expand_back() {
    let blocks: Vec<String> = (0..SLOT_COUNT as u8)
        .map(|mask| uniform_block(&modifiers::encode(mask), "q"))
        .collect();
    let layout = parse_layout_str(&layout_text("Flat", &blocks)).unwrap();

    let normalized = generate_layout_text(&layout);
    let labels: Vec<&str> = normalized
        .lines()
        .filter(|line| modifiers::decode(line).is_ok())
        .collect();
    assert_eq!(labels, vec!["None", "Shift"]);

    let reparsed = parse_layout_str(&normalized).unwrap();
    let first = &reparsed.slots()[0];
    assert!(reparsed.slots().iter().all(|grid| grid == first));
}

#[test]
fn test_short_row_is_rejected() {
    let mut bad = String::from("None\n");
    bad.push_str(&vec!["k"; 14].join(" "));
    bad.push('\n');
    bad.push_str(&vec!["k"; 13].join(" "));
    bad.push('\n');
    bad.push_str(&vec!["k"; 13].join(" "));
    bad.push('\n');
    bad.push_str(&vec!["k"; 12].join(" "));
    bad.push('\n');

    let text = layout_text("Bad", &[bad, uniform_block("Shift", "K")]);
    let err = parse_layout_str(&text).unwrap_err();

    assert!(matches!(
        err,
        ParseError::RowLengthMismatch {
            row: 1,
            expected: 14,
            found: 13,
            ..
        }
    ));
}

#[test]
fn test_missing_base_block_is_rejected() {
    let text = layout_text(
        "No Base",
        &[uniform_block("Shift", "A"), uniform_block("Mod1", "b")],
    );
    let err = parse_layout_str(&text).unwrap_err();
    assert_eq!(
        err,
        ParseError::MissingRequiredSlot {
            label: "None".to_string()
        }
    );
}

#[test]
fn test_default_layout_keymap_backslash() {
    let layout = default_layout().unwrap();
    let keymap = generate_keymap(&layout, &KeymapOptions::default());

    let line = keymap
        .text
        .lines()
        .find(|line| line.contains("key <BKSL>"))
        .unwrap();
    assert_eq!(line.trim(), "key <BKSL> {[ backslash, bar ]};");
}

#[test]
fn test_unmapped_symbol_uses_codepoint_and_is_reported() {
    let mut row0: Vec<&str> = vec!["x"; 14];
    row0[3] = "‰";
    let mut block = format!("Shift\n{}\n", row0.join(" "));
    for len in [14, 13, 12] {
        block.push_str(&vec!["x"; len].join(" "));
        block.push('\n');
    }

    let text = layout_text("Odd", &[uniform_block("None", "x"), block]);
    let layout = parse_layout_str(&text).unwrap();
    let keymap = generate_keymap(&layout, &KeymapOptions::default());

    assert!(keymap.text.contains("key <AE03> {[ x, U2030 ]};"));
    assert_eq!(keymap.fallbacks.len(), 1);
    assert_eq!(keymap.fallbacks[0].key_code, "AE03");
    assert_eq!(
        keymap.fallbacks[0].keysym,
        Keysym::Codepoint("U2030".to_string())
    );
}

#[test]
fn test_keymap_escapes_layout_name() {
    let text = layout_text(
        "Quote \"this\" \\ that",
        &[uniform_block("None", "a"), uniform_block("Shift", "A")],
    );
    let layout = parse_layout_str(&text).unwrap();
    let keymap = generate_keymap(&layout, &KeymapOptions::default());

    assert!(keymap
        .text
        .contains("name[Group1] = \"Quote \\\"this\\\" \\\\ that\";"));
}

#[test]
fn test_diagram_of_eight_level_layout() {
    let layout = parse_layout_str(&eight_level_layout_text()).unwrap();
    let diagram = render_keyboard_diagram(&layout);
    let lines: Vec<&str> = diagram.lines().collect();

    // Plain and Mod5 labels share a cell; Mod1 levels are not drawn
    assert!(lines[1].starts_with("│a0 e0│a1 e1│"));
    assert!(lines[2].starts_with("│b0 f0│b1 f1│"));
    assert!(!diagram.contains("c0"));
    assert!(!diagram.contains("d0"));
}
