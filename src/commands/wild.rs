//! Wild pokemon commands: `explore`, `encounter`, `catch`.

use std::io::Write;

use rand::Rng;
use tracing::info;

use crate::error::Result;
use crate::models::location::{pick_encounter, total_chance};
use crate::models::{LocationArea, Pokemon};
use crate::session::Session;
use crate::terminal::format_columns;

/// Cache key remembering the last encounter; it flees when reaped.
pub const ENCOUNTER_KEY: &str = "encounter";

const SUSPENSE_TICKS: usize = 3;

async fn fetch_area(session: &Session, name: &str) -> Result<LocationArea> {
    let body = session
        .fetch_cached(&format!("location-area {}", name), &session.api.location_area_url(name))
        .await?;
    Ok(serde_json::from_slice(&body)?)
}

pub async fn explore<W: Write>(session: &Session, args: &[String], out: &mut W) -> Result<()> {
    let area_name = match args.first() {
        Some(name) => name.clone(),
        None => session.pokedex.location().await.location_area,
    };

    let area = fetch_area(session, &area_name).await?;
    let names = area.pokemon_names();

    writeln!(out, "Exploring {}...", area_name)?;
    if names.is_empty() {
        writeln!(out, "No Pokemon found.")?;
    } else {
        writeln!(out, "Found Pokemon:")?;
        write!(out, "{}", format_columns(&names))?;
    }
    Ok(())
}

pub async fn encounter<W: Write>(session: &mut Session, out: &mut W) -> Result<()> {
    let area_name = session.pokedex.location().await.location_area;
    let area = fetch_area(session, &area_name).await?;
    let encounters = area.encounters();

    let total = total_chance(&encounters);
    if total == 0 {
        writeln!(out, "No wild Pokemon seem to live here.")?;
        return Ok(());
    }

    let roll = session.rng.random_range(0..total);
    if let Some(found) = pick_encounter(&encounters, roll) {
        writeln!(out, "You encountered a {}!", found.name)?;
        session.cache.put(ENCOUNTER_KEY, found.name.clone()).await;
    }
    Ok(())
}

pub async fn catch<W: Write>(session: &mut Session, args: &[String], out: &mut W) -> Result<()> {
    let name = match args.first() {
        Some(name) => name.clone(),
        None => match session.cache.get(ENCOUNTER_KEY).await {
            Some(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            None => {
                writeln!(out, "Nothing to catch!")?;
                return Ok(());
            }
        },
    };

    let body = session
        .fetch_cached(&format!("pokemon {}", name), &session.api.pokemon_url(&name))
        .await?;
    let pokemon: Pokemon = serde_json::from_slice(&body)?;

    write!(out, "Throwing a Pokeball at {}", pokemon.name)?;
    out.flush()?;
    for _ in 0..SUSPENSE_TICKS {
        tokio::time::sleep(session.catch_tick).await;
        write!(out, ".")?;
        out.flush()?;
    }
    writeln!(out)?;

    let roll: f64 = session.rng.random();
    if roll < session.catch_rate {
        writeln!(out, "{} was caught!", pokemon.name)?;
        let pokemon_name = pokemon.name.clone();
        if session.pokedex.add(pokemon).await {
            info!("Caught {}", pokemon_name);
            writeln!(out, "You may now inspect it with the inspect command.")?;
        }
    } else {
        writeln!(out, "{} escaped!", pokemon.name)?;
    }
    Ok(())
}
