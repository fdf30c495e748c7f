//! XKB Layout Library
//!
//! This library provides the core of the xkblayout tool: parsing the editable
//! keyboard layout format, writing it back normalized, and generating XKB
//! symbols files and keyboard diagrams from it.

// Module declarations
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod keymap;
pub mod models;
pub mod parser;

pub use error::ParseError;
pub use models::Layout;
