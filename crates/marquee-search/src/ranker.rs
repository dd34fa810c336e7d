use std::sync::Arc;

use marquee_core::model::Artist;

use crate::result::MatchResult;

/// Suggestions shown while typing, unless configured otherwise.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 6;

/// One entry of the live suggestion list.
#[derive(Debug, Clone)]
pub struct Suggestion {
    pub artist: Arc<Artist>,

    /// `Name (Member, Member)` as shown to the user.
    pub label: String,
}

/// Truncates a match result into the suggestion list.
///
/// Order is catalog order; there is no relevance scoring.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionRanker {
    limit: usize,
}

impl SuggestionRanker {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn rank(&self, matches: &MatchResult) -> Vec<Suggestion> {
        matches
            .iter()
            .take(self.limit)
            .map(|artist| Suggestion {
                label: artist.display_label(),
                artist: Arc::clone(artist),
            })
            .collect()
    }
}

impl Default for SuggestionRanker {
    fn default() -> Self {
        Self::new(DEFAULT_SUGGESTION_LIMIT)
    }
}
