//! Parsing and serialization of the editable layout format.
//!
//! This module handles reading keyboard layouts from their text form, writing
//! them back normalized, and the built-in default layout.

pub mod default_layout;
pub mod layout;
pub mod template_gen;

// Re-export commonly used functions
pub use default_layout::{default_layout, DEFAULT_LAYOUT};
pub use layout::{parse_layout, parse_layout_str};
pub use template_gen::{atomic_write, generate_layout_text, save_layout};
