//! Terminal Module
//!
//! Raw-mode input decoding, line editing and prompt rendering.

mod editor;
mod keys;
mod raw_mode;
mod render;

#[cfg(test)]
mod property_tests;

pub use editor::{clean_input, EditOutcome, LineEditor};
pub use keys::{decode, Key, CHUNK_SIZE};
pub use raw_mode::RawModeGuard;
pub use render::{format_columns, redraw_line, CrlfWriter};
