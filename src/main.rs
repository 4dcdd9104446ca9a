//! Pokedex CLI - An interactive Pokemon exploration REPL
//!
//! Binary entry point wiring configuration, the cache, the pokedex and the
//! terminal together.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex_cli::api::ApiClient;
use pokedex_cli::terminal::{CrlfWriter, RawModeGuard};
use pokedex_cli::config::DEFAULT_LOG_FILTER;
use pokedex_cli::{Cache, Config, Pokedex, Repl, Session};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr, quiet by default)
/// 2. Load configuration from environment variables
/// 3. Create the cache (which starts its reaper) and the pokedex
/// 4. Switch the terminal to raw mode; failure aborts before the loop starts
/// 5. Run the REPL until `exit`, Ctrl-C/Ctrl-D or end of input
/// 6. Restore the terminal and stop the reaper
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they don't tear the prompt line
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_interval={}ms, data_dir={}, api_url={}",
        config.cache_interval_ms,
        config.data_dir.display(),
        config.api_url
    );

    let cache = Cache::new(config.cache_interval());
    let api = ApiClient::new(config.api_url.clone());
    let session = Session::new(&config, cache.clone(), Pokedex::new(), api);
    let mut repl = Repl::new(session);

    let guard = RawModeGuard::enable().context("failed to enable terminal raw mode")?;

    let mut stdin = tokio::io::stdin();
    let mut stdout = CrlfWriter::new(std::io::stdout());
    let result = repl.run(&mut stdin, &mut stdout).await;

    drop(guard);
    cache.stop();
    info!("Pokedex closed");

    result.context("REPL stopped on an input error")?;
    Ok(())
}
