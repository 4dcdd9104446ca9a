//! PokeAPI client
//!
//! Thin async wrapper that turns endpoint names into URLs and returns raw
//! response bodies, so callers can cache exactly what came over the wire.

use reqwest::Client;
use tracing::debug;

use crate::error::{PokedexError, Result};

/// Page size used by the `map` listing.
pub const PAGE_SIZE: u32 = 20;

/// Client for the PokeAPI REST service.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client rooted at `base_url`, e.g. `https://pokeapi.co/api/v2`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the first page of location areas.
    pub fn first_page_url(&self) -> String {
        format!("{}/location-area/?offset=0&limit={}", self.base_url, PAGE_SIZE)
    }

    pub fn location_area_url(&self, name: &str) -> String {
        format!("{}/location-area/{}", self.base_url, name)
    }

    pub fn location_url(&self, name: &str) -> String {
        format!("{}/location/{}", self.base_url, name)
    }

    pub fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, name)
    }

    /// GETs `url` and returns the body of a 2xx response.
    ///
    /// Any other status is reported as [`PokedexError::Status`].
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        debug!("GET {} -> {} bytes", url, body.len());
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let api = ApiClient::new("https://pokeapi.co/api/v2/");

        assert_eq!(api.base_url(), "https://pokeapi.co/api/v2");
        assert_eq!(
            api.first_page_url(),
            "https://pokeapi.co/api/v2/location-area/?offset=0&limit=20"
        );
        assert_eq!(
            api.location_area_url("pallet-town-area"),
            "https://pokeapi.co/api/v2/location-area/pallet-town-area"
        );
        assert_eq!(
            api.location_url("pallet-town"),
            "https://pokeapi.co/api/v2/location/pallet-town"
        );
        assert_eq!(api.pokemon_url("mew"), "https://pokeapi.co/api/v2/pokemon/mew");
    }

    #[tokio::test]
    async fn test_fetch_unreachable_host_is_request_error() {
        // Port 0 can never accept a connection
        let api = ApiClient::new("http://127.0.0.1:0");

        let result = api.fetch(&api.pokemon_url("mew")).await;

        assert!(matches!(result, Err(PokedexError::Request(_))));
    }
}
