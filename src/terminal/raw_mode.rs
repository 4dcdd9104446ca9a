//! Raw mode guard
//!
//! Keeps the terminal in raw mode for as long as the guard lives.

use std::io;

use crossterm::terminal;
use tracing::{debug, warn};

/// Puts the terminal in raw mode and restores it on drop.
///
/// Dropping happens on every way out of the REPL, including errors and panics
/// that unwind through the owner, so the shell is never left without echo.
#[derive(Debug)]
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    /// Enables raw mode. Fails when stdin is not a terminal.
    pub fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        debug!("Terminal raw mode enabled");
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        match terminal::disable_raw_mode() {
            Ok(()) => debug!("Terminal raw mode disabled"),
            Err(e) => warn!("Failed to restore terminal mode: {}", e),
        }
    }
}
