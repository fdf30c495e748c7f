//! Shared test fixtures for layout and CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use xkblayout::models::ROW_LENGTHS;

/// Renders one modifier block where every key is labelled `ch`.
pub fn uniform_block(label: &str, ch: &str) -> String {
    let mut block = format!("{label}\n");
    for len in ROW_LENGTHS {
        block.push_str(&vec![ch; len].join(" "));
        block.push('\n');
    }
    block
}

/// Renders one modifier block whose labels are `ch` followed by the key index.
pub fn indexed_block(label: &str, ch: &str) -> String {
    let mut block = format!("{label}\n");
    for len in ROW_LENGTHS {
        let keys: Vec<String> = (0..len).map(|i| format!("{ch}{i}")).collect();
        block.push_str(&keys.join(" "));
        block.push('\n');
    }
    block
}

/// Assembles a layout file from a name and blocks.
pub fn layout_text(name: &str, blocks: &[String]) -> String {
    let mut text = format!("# Test layout\n{name}\n");
    for block in blocks {
        text.push('\n');
        text.push_str(block);
    }
    text
}

/// A layout that needs all eight modifier blocks.
pub fn eight_level_layout_text() -> String {
    let labels = [
        "None",
        "Shift",
        "Mod1",
        "Mod1 & Shift",
        "Mod5",
        "Mod5 & Shift",
        "Mod5 & Mod1",
        "Mod5 & Mod1 & Shift",
    ];
    let blocks: Vec<String> = labels
        .iter()
        .zip(["a", "b", "c", "d", "e", "f", "g", "h"])
        .map(|(label, ch)| indexed_block(label, ch))
        .collect();
    layout_text("Eight Levels", &blocks)
}

/// Writes a layout file into a fresh temp directory.
///
/// The `TempDir` must be kept alive while the file is used.
pub fn create_temp_layout_file(text: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let layout_path = temp_dir.path().join("layout.txt");
    fs::write(&layout_path, text).expect("Failed to write layout file");
    (layout_path, temp_dir)
}

/// Writes a config file next to the layout and returns its path.
pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    let config_path = dir.join("config.toml");
    fs::write(&config_path, content).expect("Failed to write config file");
    config_path
}
