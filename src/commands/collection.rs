//! Collection commands: `inspect`, `pokedex`, `save`, `load`.

use std::io::Write;

use crate::error::{PokedexError, Result};
use crate::pokedex::persist;
use crate::session::Session;
use crate::terminal::format_columns;

pub async fn inspect<W: Write>(session: &Session, args: &[String], out: &mut W) -> Result<()> {
    let name = args
        .first()
        .ok_or_else(|| PokedexError::InvalidArgument("usage: inspect <pokemon>".to_string()))?;

    match session.pokedex.get(name).await {
        Some(entry) => write!(out, "{}", entry.pokemon.describe())?,
        None => writeln!(out, "You have not caught that Pokemon.")?,
    }
    Ok(())
}

pub async fn list<W: Write>(session: &Session, out: &mut W) -> Result<()> {
    let names = session.pokedex.list_names().await;
    if names.is_empty() {
        writeln!(out, "Your Pokedex is empty... Try catching some Pokemon first!")?;
    } else {
        writeln!(out, "Your Pokedex:")?;
        write!(out, "{}", format_columns(&names))?;
    }
    Ok(())
}

pub async fn save<W: Write>(session: &Session, out: &mut W) -> Result<()> {
    let snapshot = session.pokedex.snapshot().await;
    let path = persist::save(&snapshot, &session.data_dir).await?;
    writeln!(out, "Pokedex saved to {}", path.display())?;
    Ok(())
}

pub async fn load<W: Write>(session: &Session, out: &mut W) -> Result<()> {
    let snapshot = persist::load(&session.data_dir).await?;
    let count = snapshot.entries.len();
    session.pokedex.restore(snapshot).await;
    writeln!(out, "Pokedex loaded: {} Pokemon.", count)?;
    Ok(())
}
