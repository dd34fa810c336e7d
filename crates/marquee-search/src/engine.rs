//! The filter engine.
//!
//! A filter call runs in two phases. When the query or a city constraint
//! needs locations, every catalog artist's [`LocationSet`] is resolved
//! through the [`EnrichmentCache`] concurrently, one lookup per artist,
//! and gathered back into catalog order. Candidates are then the artists
//! accepted by any query pass, narrowed by the member-count, city, and
//! year constraints. Walking the catalog once keeps the result in catalog
//! order and free of duplicates regardless of lookup completion order.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use futures::future::join_all;

use marquee_core::model::{Artist, ArtistId, LocationSet};
use marquee_core::{CatalogStore, ConstraintSet};
use marquee_fetch::{EnrichmentCache, FetchResult};

use crate::matching::QueryMatcher;
use crate::result::MatchResult;

/// Filters the session catalog against a query and constraints.
#[derive(Debug, Clone)]
pub struct FilterEngine {
    catalog: CatalogStore,
    cache: EnrichmentCache,
}

impl FilterEngine {
    pub fn new(catalog: CatalogStore, cache: EnrichmentCache) -> Self {
        Self { catalog, cache }
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn cache(&self) -> &EnrichmentCache {
        &self.cache
    }

    /// Artists matching `query` under `constraints`, in catalog order.
    ///
    /// Never fails: an artist whose locations cannot be fetched is logged
    /// and treated as matching no location.
    pub async fn filter(&self, query: &str, constraints: &ConstraintSet) -> MatchResult {
        let matcher = QueryMatcher::new(query);

        if matcher.is_empty() && !constraints.narrows_beyond_members() {
            return MatchResult::from_artists(
                self.catalog
                    .iter()
                    .filter(|artist| constraints.member_counts.accepts(artist.member_count()))
                    .map(Arc::clone),
            );
        }

        let locations = if !matcher.is_empty() || constraints.city.is_some() {
            self.resolve_locations().await
        } else {
            vec![None; self.catalog.len()]
        };

        let result = MatchResult::from_artists(
            self.catalog
                .iter()
                .zip(&locations)
                .filter(|&(artist, locations)| {
                    is_candidate(&matcher, artist, locations.as_ref())
                        && satisfies(constraints, artist, locations.as_ref())
                })
                .map(|(artist, _)| Arc::clone(artist)),
        );

        log::debug!(
            "Filter {:?} matched {} of {} artists",
            query,
            result.len(),
            self.catalog.len()
        );
        result
    }

    /// Locations of one artist, through the cache.
    ///
    /// # Errors
    /// Returns the gateway error if the locations are not cached and
    /// cannot be fetched.
    pub async fn locations_of(&self, id: ArtistId) -> FetchResult<LocationSet> {
        self.cache.get_or_fetch(id).await
    }

    /// Every known performance city grouped by country, both sorted, in
    /// display form (`"USA" -> {"New York", "Seattle"}`). Artists whose
    /// locations cannot be fetched are skipped.
    pub async fn city_options(&self) -> BTreeMap<String, BTreeSet<String>> {
        let mut options: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        for set in self.resolve_locations().await.into_iter().flatten() {
            for location in &set {
                match (location.country_display(), location.city_display()) {
                    (Some(country), Some(city)) => {
                        options.entry(country).or_default().insert(city);
                    }
                    _ => log::debug!("Skipping malformed location {:?}", location.raw()),
                }
            }
        }

        options
    }

    /// Resolve every artist's locations concurrently, in catalog order.
    async fn resolve_locations(&self) -> Vec<Option<LocationSet>> {
        let lookups = self.catalog.iter().map(|artist| async move {
            match self.cache.get_or_fetch(artist.id).await {
                Ok(locations) => Some(locations),
                Err(e) => {
                    log::warn!(
                        "Location lookup failed for artist {} ({}): {}",
                        artist.id,
                        artist.name,
                        e
                    );
                    None
                }
            }
        });

        let resolved = join_all(lookups).await;
        let failed = resolved.iter().filter(|set| set.is_none()).count();
        if failed > 0 {
            log::warn!(
                "{} of {} location lookups failed; those artists match no location",
                failed,
                resolved.len()
            );
        }
        resolved
    }
}

fn is_candidate(matcher: &QueryMatcher, artist: &Artist, locations: Option<&LocationSet>) -> bool {
    matcher.is_empty()
        || matcher.matches_record(artist)
        || locations.is_some_and(|set| matcher.matches_locations(set))
}

fn satisfies(constraints: &ConstraintSet, artist: &Artist, locations: Option<&LocationSet>) -> bool {
    if !constraints.member_counts.accepts(artist.member_count()) {
        return false;
    }

    if let Some(city) = &constraints.city {
        if !locations.is_some_and(|set| set.contains_city(city)) {
            return false;
        }
    }

    constraints
        .year
        .map_or(true, |year| artist.formation_year == year)
}
