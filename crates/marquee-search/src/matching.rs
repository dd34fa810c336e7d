//! Per-artist match passes for a free-text query.
//!
//! Each pass is evaluated independently; an artist is a candidate when any
//! pass accepts it.

use marquee_core::model::{Artist, LocationSet};

/// A prepared free-text query.
#[derive(Debug, Clone)]
pub struct QueryMatcher {
    raw: String,
    lower: String,
    year: Option<String>,
}

impl QueryMatcher {
    pub fn new(query: &str) -> Self {
        Self {
            raw: query.to_string(),
            lower: query.to_lowercase(),
            year: query.parse::<i64>().ok().map(|n| n.to_string()),
        }
    }

    pub fn query(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Case-insensitive containment in the artist name or any member name.
    pub fn matches_name_or_member(&self, artist: &Artist) -> bool {
        artist.name.to_lowercase().contains(&self.lower)
            || artist
                .members
                .iter()
                .any(|member| member.to_lowercase().contains(&self.lower))
    }

    /// Numeric queries match formation years that contain them, so `19`
    /// matches both 1990 and 1992. Non-numeric queries never match here.
    pub fn matches_formation_year(&self, artist: &Artist) -> bool {
        self.year
            .as_deref()
            .is_some_and(|year| artist.formation_year.to_string().contains(year))
    }

    /// Case-insensitive containment in the first-release date.
    pub fn matches_first_release(&self, artist: &Artist) -> bool {
        artist.first_release.to_lowercase().contains(&self.lower)
    }

    /// Case-insensitive containment in any performance location.
    pub fn matches_locations(&self, locations: &LocationSet) -> bool {
        !self.is_empty() && locations.matches(&self.lower)
    }

    /// Union of every pass that needs only the base artist record.
    pub fn matches_record(&self, artist: &Artist) -> bool {
        self.matches_name_or_member(artist)
            || self.matches_formation_year(artist)
            || self.matches_first_release(artist)
    }
}
