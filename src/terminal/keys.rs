//! Input Decoder
//!
//! Classifies one raw stdin chunk (at most 3 bytes) into a logical key.

const ESC: u8 = 0x1b;
const DEL: u8 = 127;
const LF: u8 = b'\n';
const CR: u8 = b'\r';
const CTRL_C: u8 = 0x03;
const CTRL_D: u8 = 0x04;

/// Largest chunk the decoder looks at: `ESC [ <letter>`.
pub const CHUNK_SIZE: usize = 3;

// == Key ==
/// A decoded keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Backspace,
    Enter,
    /// Byte in `32..=126`
    Printable(char),
    /// Ctrl-C or Ctrl-D; raw mode swallows the signals these would raise
    Interrupt,
    Unknown,
}

// == Decode ==
/// Decodes the most recent input chunk.
///
/// An `ESC [ A..D` arrow sequence is matched first; anything else is
/// classified by its first byte alone. Total and side-effect free.
pub fn decode(chunk: &[u8]) -> Key {
    if let [ESC, b'[', direction] = chunk {
        match direction {
            b'A' => return Key::ArrowUp,
            b'B' => return Key::ArrowDown,
            b'C' => return Key::ArrowRight,
            b'D' => return Key::ArrowLeft,
            _ => {}
        }
    }

    match chunk.first().copied() {
        Some(DEL) => Key::Backspace,
        // crossterm raw mode leaves CR untranslated, so Enter arrives as 13
        Some(LF) | Some(CR) => Key::Enter,
        Some(byte @ 32..=126) => Key::Printable(byte as char),
        Some(CTRL_C) | Some(CTRL_D) => Key::Interrupt,
        _ => Key::Unknown,
    }
}
