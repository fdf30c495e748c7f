//! XKB keymap generation.
//!
//! This module turns a layout into an XKB symbols file, translating key
//! labels into keysym names along the way.

pub mod generator;
pub mod keysyms;

// Re-export keymap types
pub use generator::{generate_keymap, Fallback, GeneratedKeymap, KeymapOptions};
pub use keysyms::{Keysym, KeysymTable};
