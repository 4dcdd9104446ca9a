//! REPL Loop
//!
//! Redraws the prompt, reads one raw chunk, decodes it, feeds the line editor
//! and dispatches confirmed lines to the command registry.

use std::io::Write;

use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::debug;

use crate::commands::{execute, CommandRegistry, Outcome};
use crate::error::Result;
use crate::session::Session;
use crate::terminal::{clean_input, decode, redraw_line, EditOutcome, LineEditor, CHUNK_SIZE};

pub const PROMPT: &str = "Pokedex > ";

/// Interactive loop over a session.
#[derive(Debug)]
pub struct Repl {
    editor: LineEditor,
    registry: CommandRegistry,
    session: Session,
}

impl Repl {
    pub fn new(session: Session) -> Self {
        Self {
            editor: LineEditor::new(),
            registry: CommandRegistry::new(),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn editor(&self) -> &LineEditor {
        &self.editor
    }

    /// Runs until `exit`, an interrupt key, or end of input.
    ///
    /// The read is the loop's only suspension point. A failed read ends the
    /// loop with the error; restoring the terminal is the caller's guard's job.
    pub async fn run<R, W>(&mut self, input: &mut R, out: &mut W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: Write,
    {
        let mut chunk = [0u8; CHUNK_SIZE];

        loop {
            redraw_line(out, PROMPT, self.editor.buffer(), self.editor.cursor())?;

            let n = match input.read(&mut chunk).await {
                Ok(0) => {
                    debug!("End of input");
                    writeln!(out)?;
                    break;
                }
                Ok(n) => n,
                Err(e) => {
                    debug!("Failed reading from input: {}", e);
                    writeln!(out)?;
                    writeln!(out, "Error: failed reading from input: {}", e)?;
                    return Err(e.into());
                }
            };

            match self.editor.handle(decode(&chunk[..n])) {
                EditOutcome::Continue => {}
                EditOutcome::Interrupt => {
                    writeln!(out)?;
                    break;
                }
                EditOutcome::Submit(line) => {
                    writeln!(out)?;
                    if self.dispatch(&line, out).await? == Outcome::Exit {
                        break;
                    }
                }
            }
        }

        out.flush()?;
        Ok(())
    }

    /// Tokenizes `line` and runs the matching command.
    ///
    /// Unknown names and command failures are reported on `out`; only a failed
    /// write to `out` is returned as an error.
    pub async fn dispatch<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Outcome> {
        let words = clean_input(line);
        let Some((name, args)) = words.split_first() else {
            return Ok(Outcome::Continue);
        };

        let Some(spec) = self.registry.get(name) else {
            writeln!(out, "Error: unknown command {:?}", name)?;
            return Ok(Outcome::Continue);
        };

        match execute(spec, args, &mut self.session, &self.registry, out).await {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                debug!("Command {} failed: {}", spec.name, e);
                writeln!(out, "Error: {} command produced an error: {}", spec.name, e)?;
                Ok(Outcome::Continue)
            }
        }
    }
}
