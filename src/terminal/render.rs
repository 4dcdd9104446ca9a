//! Prompt rendering and raw-mode output helpers.

use std::io::{self, Write};

use crossterm::cursor::MoveLeft;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};

const MAX_COLS: usize = 3;
const MAX_ROWS: usize = 5;
const COL_PAD: usize = 4;

/// Redraws the prompt line and places the terminal cursor at `cursor`.
///
/// Emits `\r`, the prompt and buffer, `ESC[K` to clear leftovers from a longer
/// previous line, then moves back from the end of the line if needed.
pub fn redraw_line<W: Write>(out: &mut W, prompt: &str, buffer: &[char], cursor: usize) -> io::Result<()> {
    let line: String = buffer.iter().collect();
    queue!(out, Print('\r'), Print(prompt), Print(line), Clear(ClearType::UntilNewLine))?;

    let back = buffer.len().saturating_sub(cursor);
    if back > 0 {
        queue!(out, MoveLeft(back as u16))?;
    }
    out.flush()
}

/// Lays names out as `- name` cells.
///
/// Short lists stay on one line; lists longer than five wrap every three
/// cells. Always ends with a newline.
pub fn format_columns(items: &[String]) -> String {
    let cells: Vec<String> = items.iter().map(|item| format!("- {}", item)).collect();
    let width = cells.iter().map(String::len).max().unwrap_or(0) + COL_PAD;
    let per_row = if cells.len() > MAX_ROWS { MAX_COLS } else { cells.len().max(1) };

    let mut out = String::new();
    for row in cells.chunks(per_row) {
        let line: String = row.iter().map(|cell| format!("{:<width$}", cell, width = width)).collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    if out.is_empty() {
        out.push('\n');
    }
    out
}

// == CRLF Writer ==
/// Writer that turns every `\n` into `\r\n`.
///
/// Raw mode switches off output post-processing, so a bare newline would
/// leave the cursor in the middle of the next line.
#[derive(Debug)]
pub struct CrlfWriter<W: Write> {
    inner: W,
}

impl<W: Write> CrlfWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for CrlfWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for chunk in buf.split_inclusive(|b| *b == b'\n') {
            match chunk.strip_suffix(b"\n") {
                Some(body) => {
                    self.inner.write_all(body)?;
                    self.inner.write_all(b"\r\n")?;
                }
                None => self.inner.write_all(chunk)?,
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_redraw_cursor_at_end() {
        let mut out = Vec::new();
        redraw_line(&mut out, "Pokedex > ", &chars("map"), 3).unwrap();

        assert_eq!(out, b"\rPokedex > map\x1b[K");
    }

    #[test]
    fn test_redraw_moves_cursor_back() {
        let mut out = Vec::new();
        redraw_line(&mut out, "> ", &chars("catch"), 2).unwrap();

        assert_eq!(out, b"\r> catch\x1b[K\x1b[3D");
    }

    #[test]
    fn test_columns_short_list_one_line() {
        let items: Vec<String> = vec!["abra".into(), "pidgeotto".into()];
        // Cells pad to the widest cell plus four spaces
        let expected = format!("{:<15}- pidgeotto\n", "- abra");
        assert_eq!(format_columns(&items), expected);
    }

    #[test]
    fn test_columns_long_list_wraps() {
        let items: Vec<String> = (1..=7).map(|i| format!("p{}", i)).collect();
        let text = format_columns(&items);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "- p1    - p2    - p3");
        assert_eq!(lines[2], "- p7");
    }

    #[test]
    fn test_columns_empty() {
        assert_eq!(format_columns(&[]), "\n");
    }

    #[test]
    fn test_crlf_writer() {
        let mut writer = CrlfWriter::new(Vec::new());
        write!(writer, "one\ntwo\n").unwrap();
        write!(writer, "three").unwrap();

        assert_eq!(writer.into_inner(), b"one\r\ntwo\r\nthree");
    }
}
