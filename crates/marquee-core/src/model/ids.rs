use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned to an artist by the upstream catalog service.
///
/// Unique within a session's [`CatalogStore`](crate::CatalogStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtistId(u64);

impl ArtistId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ArtistId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ArtistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
