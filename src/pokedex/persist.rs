//! Pokedex persistence
//!
//! Saves the pokedex snapshot as pretty-printed JSON under a data directory and
//! reads it back.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{PokedexError, Result};
use crate::pokedex::PokedexSnapshot;

/// File name of the save inside the data directory.
pub const SAVE_FILE_NAME: &str = "pokedex.json";

/// Path of the save file for `data_dir`.
pub fn save_path(data_dir: &Path) -> PathBuf {
    data_dir.join(SAVE_FILE_NAME)
}

/// Writes `snapshot` to `<data_dir>/pokedex.json`, creating the directory.
///
/// Returns the path written.
pub async fn save(snapshot: &PokedexSnapshot, data_dir: &Path) -> Result<PathBuf> {
    tokio::fs::create_dir_all(data_dir)
        .await
        .map_err(|source| PokedexError::Persist {
            action: "creating folder",
            path: data_dir.display().to_string(),
            source,
        })?;

    let path = save_path(data_dir);
    let json = serde_json::to_string_pretty(snapshot)?;
    tokio::fs::write(&path, json)
        .await
        .map_err(|source| PokedexError::Persist {
            action: "writing file",
            path: path.display().to_string(),
            source,
        })?;

    info!("Saved {} pokedex entries to {}", snapshot.entries.len(), path.display());
    Ok(path)
}

/// Reads the snapshot saved under `data_dir`.
pub async fn load(data_dir: &Path) -> Result<PokedexSnapshot> {
    let path = save_path(data_dir);
    let data = tokio::fs::read(&path)
        .await
        .map_err(|source| PokedexError::Persist {
            action: "reading file",
            path: path.display().to_string(),
            source,
        })?;

    let snapshot: PokedexSnapshot = serde_json::from_slice(&data)?;
    info!("Loaded {} pokedex entries from {}", snapshot.entries.len(), path.display());
    Ok(snapshot)
}
