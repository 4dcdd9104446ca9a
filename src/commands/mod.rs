//! Commands Module
//!
//! The REPL command catalog and its handlers.
//!
//! # Commands
//! - `help`, `exit`
//! - Navigation: `map`, `mapb`, `visit`, `whereami`
//! - Wild pokemon: `explore`, `encounter`, `catch`
//! - Collection: `inspect`, `pokedex`, `save`, `load`

mod collection;
mod navigation;
mod registry;
mod wild;

use std::io::Write;

use tracing::debug;

use crate::error::Result;
use crate::session::Session;

pub use registry::{CommandKind, CommandRegistry, CommandSpec, Flag};

/// Whether the REPL keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

/// Runs `spec` with the words that followed its name.
pub async fn execute<W: Write>(
    spec: &CommandSpec,
    args: &[String],
    session: &mut Session,
    registry: &CommandRegistry,
    out: &mut W,
) -> Result<Outcome> {
    debug!("Executing {} with {:?}", spec.name, args);

    match spec.kind {
        CommandKind::Help => write!(out, "{}", registry.help_text())?,
        CommandKind::Exit => {
            writeln!(out, "Closing the Pokedex... Goodbye!")?;
            return Ok(Outcome::Exit);
        }
        CommandKind::Map => navigation::map_forward(session, out).await?,
        CommandKind::MapBack => navigation::map_back(session, out).await?,
        CommandKind::Visit => navigation::visit(session, args, out).await?,
        CommandKind::WhereAmI => navigation::where_am_i(session, args, out).await?,
        CommandKind::Explore => wild::explore(session, args, out).await?,
        CommandKind::Encounter => wild::encounter(session, out).await?,
        CommandKind::Catch => wild::catch(session, args, out).await?,
        CommandKind::Inspect => collection::inspect(session, args, out).await?,
        CommandKind::Pokedex => collection::list(session, out).await?,
        CommandKind::Save => collection::save(session, out).await?,
        CommandKind::Load => collection::load(session, out).await?,
    }

    Ok(Outcome::Continue)
}
