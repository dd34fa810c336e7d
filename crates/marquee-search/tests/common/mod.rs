//! Shared fixtures for the search integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use marquee_core::model::{Artist, ArtistId, LocationSet};
use marquee_fetch::{load_catalog, EnrichmentCache, FetchError, FetchGateway, FetchResult};
use marquee_search::FilterEngine;

/// In-memory gateway that can be told to fail for chosen artists.
#[derive(Debug, Default)]
pub struct FakeGateway {
    artists: Vec<Artist>,
    locations: HashMap<ArtistId, Vec<String>>,
    failing: HashSet<ArtistId>,
    delay: Duration,
    location_calls: AtomicUsize,
}

impl FakeGateway {
    pub fn new(artists: Vec<Artist>) -> Self {
        Self {
            artists,
            ..Self::default()
        }
    }

    pub fn with_locations(mut self, id: u64, locations: &[&str]) -> Self {
        self.locations.insert(
            ArtistId::new(id),
            locations.iter().map(|l| (*l).to_string()).collect(),
        );
        self
    }

    pub fn failing_for(mut self, id: u64) -> Self {
        self.failing.insert(ArtistId::new(id));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn location_calls(&self) -> usize {
        self.location_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FetchGateway for FakeGateway {
    async fn fetch_artists(&self) -> FetchResult<Vec<Artist>> {
        Ok(self.artists.clone())
    }

    async fn fetch_locations(&self, id: ArtistId) -> FetchResult<LocationSet> {
        self.location_calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.failing.contains(&id) {
            return Err(FetchError::Http {
                endpoint: format!("locations/{id}"),
                message: "HTTP status server error (503 Service Unavailable)".to_string(),
            });
        }
        let tokens = self.locations.get(&id).cloned().unwrap_or_default();
        Ok(LocationSet::from_raw(tokens))
    }
}

/// Load the catalog through `gateway` and build an engine over it.
pub async fn engine(gateway: FakeGateway) -> (FilterEngine, Arc<FakeGateway>) {
    let gateway = Arc::new(gateway);
    let catalog = load_catalog(&*gateway).await.unwrap();
    let cache = EnrichmentCache::new(Arc::clone(&gateway) as Arc<dyn FetchGateway>);
    (FilterEngine::new(catalog, cache), gateway)
}

/// Two-artist catalog used by the worked examples.
pub fn queen_and_abba() -> FakeGateway {
    FakeGateway::new(vec![
        Artist::new(1, "Queen")
            .with_members(["Freddie", "Brian"])
            .with_formation_year(1970)
            .with_first_release("13-07-1973"),
        Artist::new(2, "ABBA")
            .with_members(["Agnetha"])
            .with_formation_year(1972)
            .with_first_release("1973"),
    ])
    .with_locations(1, &["london-uk", "osaka-japan"])
    .with_locations(2, &["stockholm-sweden"])
}

/// Four artists with member counts {1, 2, 4, 2} and distinct years.
pub fn bands() -> FakeGateway {
    FakeGateway::new(vec![
        Artist::new(1, "Solo Act")
            .with_members(["Ann"])
            .with_formation_year(1990)
            .with_first_release("05-05-1992"),
        Artist::new(2, "Duo")
            .with_members(["Bea", "Cal"])
            .with_formation_year(1985)
            .with_first_release("10-10-1986"),
        Artist::new(3, "Quartet")
            .with_members(["Dan", "Eve", "Fay", "Gus"])
            .with_formation_year(1991)
            .with_first_release("02-02-1993"),
        Artist::new(4, "Late Band")
            .with_members(["Hal", "Ivy"])
            .with_formation_year(2001)
            .with_first_release("03-03-2002"),
    ])
    .with_locations(1, &["paris-france"])
    .with_locations(2, &["london-uk", "new_york-usa"])
    .with_locations(3, &["london-uk"])
    .with_locations(4, &["berlin-germany"])
}

pub fn ids(result: &marquee_search::MatchResult) -> Vec<u64> {
    result.ids().into_iter().map(ArtistId::get).collect()
}
