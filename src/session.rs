//! Session state handed to every command.
//!
//! Built once at startup and owned by the REPL; replaces process-wide
//! singletons for the cache and pokedex.

use std::path::PathBuf;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::api::ApiClient;
use crate::cache::Cache;
use crate::config::Config;
use crate::error::Result;
use crate::pokedex::Pokedex;

/// Cursor into the paged location-area listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paging {
    pub next: Option<String>,
    pub previous: Option<String>,
}

/// Everything a command handler may touch.
#[derive(Debug)]
pub struct Session {
    pub cache: Cache,
    pub pokedex: Pokedex,
    pub api: ApiClient,
    pub paging: Paging,
    pub data_dir: PathBuf,
    pub catch_rate: f64,
    pub catch_tick: Duration,
    pub rng: StdRng,
}

impl Session {
    /// Creates a session positioned before the first `map` page.
    pub fn new(config: &Config, cache: Cache, pokedex: Pokedex, api: ApiClient) -> Self {
        let paging = Paging {
            next: Some(api.first_page_url()),
            previous: None,
        };
        Self {
            cache,
            pokedex,
            api,
            paging,
            data_dir: config.data_dir.clone(),
            catch_rate: config.catch_rate,
            catch_tick: config.catch_tick(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Replaces the random source, for reproducible encounters and catches.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Returns the body cached under `key`, fetching `url` on a miss.
    ///
    /// A fetched body is cached before it is returned.
    pub async fn fetch_cached(&self, key: &str, url: &str) -> Result<Vec<u8>> {
        if let Some(body) = self.cache.get(key).await {
            debug!("Cache hit for {:?}", key);
            return Ok(body);
        }

        debug!("Cache miss for {:?}", key);
        let body = self.api.fetch(url).await?;
        self.cache.put(key, body.clone()).await;
        Ok(body)
    }
}
