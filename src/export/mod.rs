//! Keyboard diagram export.
//!
//! Renders a layout as a plain-text keyboard drawing for documentation.
//! The output is meant for reading, not for parsing back.

pub mod keyboard_renderer;

pub use keyboard_renderer::render_keyboard_diagram;
