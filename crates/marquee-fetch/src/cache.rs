//! Session-lifetime cache of per-artist performance locations.
//!
//! Locations are not part of the base artist record, so they are fetched
//! on first use and kept until the session ends. Concurrent requests for
//! the same artist share a single network call.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use marquee_core::model::{ArtistId, LocationSet};

use crate::error::FetchResult;
use crate::gateway::FetchGateway;

/// Shared, explicitly owned location cache.
///
/// Clones are handles to the same storage. Entries are never evicted; the
/// catalog is small and bounded. Each artist id also keeps one fetch gate
/// for the life of the cache, so every caller for that id queues on the
/// same lock.
#[derive(Debug, Clone)]
pub struct EnrichmentCache {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    gateway: Arc<dyn FetchGateway>,
    entries: RwLock<HashMap<ArtistId, LocationSet>>,
    gates: Mutex<HashMap<ArtistId, Arc<tokio::sync::Mutex<()>>>>,
}

impl EnrichmentCache {
    pub fn new(gateway: Arc<dyn FetchGateway>) -> Self {
        Self {
            inner: Arc::new(Inner {
                gateway,
                entries: RwLock::new(HashMap::new()),
                gates: Mutex::new(HashMap::new()),
            }),
        }
    }

    /// The gateway misses are fetched through.
    pub fn gateway(&self) -> &Arc<dyn FetchGateway> {
        &self.inner.gateway
    }

    /// Cached locations for `id`. Never touches the network; `None` means
    /// "not fetched yet", not "no locations".
    pub fn get(&self, id: ArtistId) -> Option<LocationSet> {
        self.inner
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
    }

    /// Cached locations for `id`, fetching and storing them on a miss.
    ///
    /// Callers racing on the same id take turns on that id's gate, so at
    /// most one fetch per id is in flight. Waiters behind a successful
    /// fetch return its entry. A failed fetch is not cached; the next
    /// waiter tries again. Dropping the future mid-fetch releases the gate.
    ///
    /// # Errors
    /// Returns the gateway error when the fetch fails.
    pub async fn get_or_fetch(&self, id: ArtistId) -> FetchResult<LocationSet> {
        if let Some(hit) = self.get(id) {
            return Ok(hit);
        }

        let gate = self.gate(id);
        let _guard = gate.lock().await;

        // Another caller may have filled the entry while we waited.
        if let Some(hit) = self.get(id) {
            return Ok(hit);
        }

        log::debug!("Fetching locations for artist {}", id);
        let result = self.inner.gateway.fetch_locations(id).await;
        if let Ok(locations) = &result {
            self.insert(id, locations.clone());
        }

        result
    }

    /// Store locations for `id`, replacing any previous entry.
    pub fn insert(&self, id: ArtistId, locations: LocationSet) {
        self.inner
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, locations);
    }

    pub fn len(&self) -> usize {
        self.inner
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn gate(&self, id: ArtistId) -> Arc<tokio::sync::Mutex<()>> {
        let mut gates = self
            .inner
            .gates
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(gates.entry(id).or_default())
    }
}
