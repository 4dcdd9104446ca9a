//! Navigation commands: `map`, `mapb`, `visit`, `whereami`.

use std::io::Write;

use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationAreaPage, LocationDetail};
use crate::pokedex::PlayerLocation;
use crate::session::Session;
use crate::terminal::format_columns;

pub async fn map_forward<W: Write>(session: &mut Session, out: &mut W) -> Result<()> {
    let url = session.paging.next.clone().ok_or(PokedexError::NoPage("forward"))?;
    show_page(session, &url, out).await
}

pub async fn map_back<W: Write>(session: &mut Session, out: &mut W) -> Result<()> {
    let url = session.paging.previous.clone().ok_or(PokedexError::NoPage("back"))?;
    show_page(session, &url, out).await
}

/// Prints one listing page and moves the paging cursor to its neighbours.
async fn show_page<W: Write>(session: &mut Session, url: &str, out: &mut W) -> Result<()> {
    let body = session.fetch_cached(&format!("map {}", url), url).await?;
    let page: LocationAreaPage = serde_json::from_slice(&body)?;

    session.paging.next = page.next;
    session.paging.previous = page.previous;

    let names: Vec<String> = page.results.into_iter().map(|r| r.name).collect();
    write!(out, "{}", format_columns(&names))?;
    Ok(())
}

pub async fn visit<W: Write>(session: &mut Session, args: &[String], out: &mut W) -> Result<()> {
    let area_name = args
        .first()
        .ok_or_else(|| PokedexError::InvalidArgument("usage: visit <area>".to_string()))?;

    let body = session
        .fetch_cached(
            &format!("location-area {}", area_name),
            &session.api.location_area_url(area_name),
        )
        .await?;
    let area: LocationArea = serde_json::from_slice(&body)?;

    let mut region = session.pokedex.location().await.region;
    if !area.location.name.is_empty() {
        let body = session
            .fetch_cached(
                &format!("location {}", area.location.name),
                &session.api.location_url(&area.location.name),
            )
            .await?;
        let detail: LocationDetail = serde_json::from_slice(&body)?;
        if let Some(found) = detail.region {
            region = found.name;
        }
    }

    session
        .pokedex
        .set_location(PlayerLocation {
            region,
            location: area.location.name,
            location_area: area.name.clone(),
        })
        .await;

    writeln!(out, "You are now at {}", area.name)?;
    Ok(())
}

pub async fn where_am_i<W: Write>(session: &Session, args: &[String], out: &mut W) -> Result<()> {
    let location = session.pokedex.location().await;
    let shown = match args.first().map(String::as_str) {
        Some("-r") => location.region,
        Some("-l") => location.location,
        _ => location.location_area,
    };
    writeln!(out, "{}", shown)?;
    Ok(())
}
