//! Line Editor
//!
//! Editable input buffer with a cursor and shell-style history browsing.
//!
//! History has a single "live" slot at its tail (`history_index ==
//! history.len()`). Moving through history never loses edits: the line being
//! left is written back into the slot it came from.

use crate::terminal::Key;

// == Edit Outcome ==
/// What the REPL should do after a key was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Keep reading keys
    Continue,
    /// A non-empty line was confirmed with Enter
    Submit(String),
    /// The user asked to leave
    Interrupt,
}

// == Line Editor ==
#[derive(Debug, Clone, Default)]
pub struct LineEditor {
    buffer: Vec<char>,
    cursor: usize,
    history: Vec<String>,
    history_index: usize,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an editor whose history already holds `history`, positioned at
    /// the live slot.
    pub fn with_history(history: Vec<String>) -> Self {
        let history_index = history.len();
        Self {
            history,
            history_index,
            ..Self::default()
        }
    }

    pub fn buffer(&self) -> &[char] {
        &self.buffer
    }

    /// The buffer as a string.
    pub fn line(&self) -> String {
        self.buffer.iter().collect()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn history_index(&self) -> usize {
        self.history_index
    }

    /// Returns true when not browsing past entries.
    pub fn is_live(&self) -> bool {
        self.history_index == self.history.len()
    }

    // == Dispatch ==
    /// Applies one decoded key.
    pub fn handle(&mut self, key: Key) -> EditOutcome {
        match key {
            Key::Printable(c) => self.insert(c),
            Key::Backspace => {
                self.backspace();
            }
            Key::ArrowLeft => {
                self.move_left();
            }
            Key::ArrowRight => {
                self.move_right();
            }
            Key::ArrowUp => self.history_prev(),
            Key::ArrowDown => self.history_next(),
            Key::Enter => return self.submit(),
            Key::Interrupt => return EditOutcome::Interrupt,
            Key::Unknown => {}
        }
        EditOutcome::Continue
    }

    // == Buffer Editing ==
    /// Inserts `c` at the cursor and advances past it.
    pub fn insert(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += 1;
    }

    /// Deletes the character before the cursor. Returns false at column 0.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.buffer.remove(self.cursor);
        true
    }

    pub fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn move_right(&mut self) -> bool {
        if self.cursor >= self.buffer.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Replaces the buffer and puts the cursor at its end.
    pub fn set_line(&mut self, line: &str) {
        self.buffer = line.chars().collect();
        self.cursor = self.buffer.len();
    }

    /// Empties the buffer.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    // == History ==
    /// ArrowUp: step to the previous history entry.
    pub fn history_prev(&mut self) {
        if self.history_index == 0 {
            return;
        }
        let current = self.line();
        if self.is_live() {
            // Keep the unsent line reachable with ArrowDown
            if !current.is_empty() {
                self.history.push(current);
            }
        } else {
            self.history[self.history_index] = current;
        }
        self.history_index -= 1;
        let entry = self.history[self.history_index].clone();
        self.set_line(&entry);
    }

    /// ArrowDown: step toward the live slot.
    pub fn history_next(&mut self) {
        if self.history_index >= self.history.len() {
            return;
        }
        self.history[self.history_index] = self.line();
        self.history_index += 1;
        if self.is_live() {
            self.reset();
        } else {
            let entry = self.history[self.history_index].clone();
            self.set_line(&entry);
        }
    }

    /// Enter: hand the line over and record it in history.
    ///
    /// A line recalled from history moves to the tail instead of being
    /// duplicated. An empty line only cancels browsing.
    pub fn submit(&mut self) -> EditOutcome {
        if self.buffer.is_empty() {
            self.history_index = self.history.len();
            return EditOutcome::Continue;
        }

        let line = self.line();
        if !self.is_live() {
            self.history.remove(self.history_index);
        }
        self.history.push(line.clone());
        self.history_index = self.history.len();
        self.reset();
        EditOutcome::Submit(line)
    }
}

/// Lowercases `text` and splits it on whitespace.
pub fn clean_input(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
