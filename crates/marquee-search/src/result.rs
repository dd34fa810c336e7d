use std::collections::HashSet;
use std::sync::Arc;

use marquee_core::model::{Artist, ArtistId};

/// Artists matching a query, in catalog order, with no repeated ids.
#[derive(Debug, Clone, Default)]
pub struct MatchResult {
    artists: Vec<Arc<Artist>>,
}

impl MatchResult {
    /// Collect artists, keeping only the first occurrence of each id.
    pub fn from_artists<I>(artists: I) -> Self
    where
        I: IntoIterator<Item = Arc<Artist>>,
    {
        let mut seen = HashSet::new();
        let artists = artists
            .into_iter()
            .filter(|artist| seen.insert(artist.id))
            .collect();
        Self { artists }
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Arc<Artist>> {
        self.artists.iter()
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    pub fn ids(&self) -> Vec<ArtistId> {
        self.artists.iter().map(|artist| artist.id).collect()
    }

    pub fn into_vec(self) -> Vec<Arc<Artist>> {
        self.artists
    }
}

impl<'a> IntoIterator for &'a MatchResult {
    type Item = &'a Arc<Artist>;
    type IntoIter = std::slice::Iter<'a, Arc<Artist>>;

    fn into_iter(self) -> Self::IntoIter {
        self.artists.iter()
    }
}
