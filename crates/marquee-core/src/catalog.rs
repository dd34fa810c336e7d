//! Session-scoped artist catalog.
//!
//! The catalog is populated once at startup and never mutated afterwards.
//! Cloning a [`CatalogStore`] only bumps a reference count, so the search
//! engine and the presentation layer can share one copy.

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::model::{Artist, ArtistId};

/// Read-only, ordered collection of artists with unique ids.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    artists: Arc<Vec<Arc<Artist>>>,
}

impl CatalogStore {
    /// Build a store from artists in service order.
    ///
    /// # Errors
    /// Returns [`Error::InvalidData`] if two artists share an id.
    pub fn new(artists: Vec<Artist>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(artists.len());
        for artist in &artists {
            if !seen.insert(artist.id) {
                return Err(Error::InvalidData(format!(
                    "duplicate artist id {} in catalog",
                    artist.id
                )));
            }
        }

        log::debug!("Catalog store holds {} artists", artists.len());

        Ok(Self {
            artists: Arc::new(artists.into_iter().map(Arc::new).collect()),
        })
    }

    /// Artists in catalog order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Arc<Artist>> {
        self.artists.iter()
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    /// Look up an artist by id.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] when no artist has this id.
    pub fn get(&self, id: ArtistId) -> Result<&Arc<Artist>> {
        self.artists
            .iter()
            .find(|artist| artist.id == id)
            .ok_or_else(|| Error::NotFound {
                entity: "artist",
                id: id.to_string(),
            })
    }

    pub fn contains(&self, id: ArtistId) -> bool {
        self.artists.iter().any(|artist| artist.id == id)
    }

    /// Earliest and latest formation year, or `None` for an empty catalog.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let years = self.artists.iter().map(|artist| artist.formation_year);
        let min = years.clone().min()?;
        let max = years.max()?;
        Some((min, max))
    }

    /// Largest member count of any artist; sizes the member-count choices.
    pub fn max_members(&self) -> usize {
        self.artists
            .iter()
            .map(|artist| artist.member_count())
            .max()
            .unwrap_or(0)
    }
}
