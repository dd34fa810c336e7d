pub mod catalog;
pub mod config;
pub mod search;
pub mod show;

use std::sync::Arc;

use anyhow::{Context, Result};
use marquee_fetch::{load_catalog, Config, EnrichmentCache, FetchGateway, HttpGateway};
use marquee_search::{FilterEngine, SearchSession, SuggestionRanker};

pub use catalog::{run_bounds, run_cities};
pub use config::{init_config, show_config, show_config_path};
pub use search::{run_interactive, run_search, run_suggest};
pub use show::run_show;

/// Install twyg as the `log` backend.
pub fn init_logging(config: &Config, verbose: bool) -> Result<()> {
    let opts = config.logging_opts(verbose)?;
    twyg::setup(opts).map_err(|e| anyhow::anyhow!("Failed to set up logging: {e:?}"))?;

    Ok(())
}

/// Load the catalog once and wire up a search session over it.
///
/// A catalog that cannot be loaded leaves nothing to search, so this
/// failure ends the process.
pub async fn open_session(config: &Config, limit: Option<usize>) -> Result<SearchSession> {
    let gateway: Arc<dyn FetchGateway> = Arc::new(
        HttpGateway::from_config(config).context("Failed to create catalog client")?,
    );

    let catalog = load_catalog(&*gateway)
        .await
        .with_context(|| format!("Failed to load artist catalog from {}", config.api_base_url))?;

    let cache = EnrichmentCache::new(gateway);
    let engine = FilterEngine::new(catalog, cache);
    let ranker = SuggestionRanker::new(limit.unwrap_or(config.suggestion_limit));

    Ok(SearchSession::new(engine, ranker))
}
