//! Data models for keyboard layouts.
//!
//! This module contains the layout data structure, the fixed physical key
//! geometry it is laid over, and the modifier label codec.
//! Models are independent of any file format.

pub mod geometry;
pub mod layout;
pub mod modifiers;

// Re-export all model types
pub use geometry::{key_code, ROW_COUNT, ROW_LENGTHS};
pub use layout::{Grid, Layout};
pub use modifiers::{MODIFIER_NAMES, NO_MODIFIERS, SLOT_COUNT};
