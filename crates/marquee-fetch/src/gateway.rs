//! The seam between the search engine and the network.
//!
//! Everything above this module sees decoded domain types; everything
//! below it speaks HTTP and JSON. Tests swap in an in-memory gateway.

use std::fmt;

use async_trait::async_trait;

use marquee_core::model::{Artist, ArtistId, LocationSet};
use marquee_core::CatalogStore;

use crate::error::{FetchError, FetchResult};

/// Network-backed source of catalog data.
///
/// Each call is one round trip with no retries; failures go straight back
/// to the caller.
#[async_trait]
pub trait FetchGateway: Send + Sync + fmt::Debug {
    /// Fetch the full artist list in service order.
    async fn fetch_artists(&self) -> FetchResult<Vec<Artist>>;

    /// Fetch the performance locations of one artist.
    async fn fetch_locations(&self, id: ArtistId) -> FetchResult<LocationSet>;

    /// Earliest and latest formation year in the catalog.
    ///
    /// The service has no dedicated endpoint, so the default derives the
    /// bounds from one artist-list fetch.
    async fn fetch_year_bounds(&self) -> FetchResult<(i32, i32)> {
        let catalog = CatalogStore::new(self.fetch_artists().await?)?;
        catalog.year_bounds().ok_or_else(|| FetchError::Parse {
            endpoint: "artists".to_string(),
            message: "artist list is empty; no year bounds".to_string(),
        })
    }
}

/// Populate the session catalog. Called once at startup; a failure here
/// leaves the session with nothing to search.
///
/// # Errors
/// Returns the gateway error, or [`FetchError::Catalog`] if the service
/// returned duplicate artist ids.
pub async fn load_catalog(gateway: &dyn FetchGateway) -> FetchResult<CatalogStore> {
    log::info!("Loading artist catalog");
    let artists = gateway.fetch_artists().await?;
    let catalog = CatalogStore::new(artists)?;
    log::info!("Loaded {} artists", catalog.len());
    Ok(catalog)
}
