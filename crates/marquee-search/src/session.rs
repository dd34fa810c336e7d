//! Glue between user input events and the filter engine.
//!
//! The presentation layer owns the constraint state and calls into a
//! [`SearchSession`] on every keystroke (`update_suggestions`) and on
//! submit (`search`).

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use marquee_core::ConstraintSet;

use crate::engine::FilterEngine;
use crate::ranker::{Suggestion, SuggestionRanker};
use crate::result::MatchResult;

/// Outcome of a submitted search.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    Results(MatchResult),

    /// A well-formed search that matched nothing. Not an error.
    NoResults { query: String },
}

impl SearchOutcome {
    pub fn matches(&self) -> Option<&MatchResult> {
        match self {
            Self::Results(matches) => Some(matches),
            Self::NoResults { .. } => None,
        }
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Results(matches) => write!(f, "{} results", matches.len()),
            Self::NoResults { query } => write!(f, "no results found for \"{query}\""),
        }
    }
}

/// A search session over one loaded catalog.
#[derive(Debug)]
pub struct SearchSession {
    engine: FilterEngine,
    ranker: SuggestionRanker,
    generation: AtomicU64,
}

impl SearchSession {
    pub fn new(engine: FilterEngine, ranker: SuggestionRanker) -> Self {
        Self {
            engine,
            ranker,
            generation: AtomicU64::new(0),
        }
    }

    pub fn engine(&self) -> &FilterEngine {
        &self.engine
    }

    /// Filter and rank for the live suggestion list, calling
    /// `on_suggestion` once per ranked artist. Returns how many
    /// suggestions were delivered.
    ///
    /// An empty query clears the list. If a newer call starts while this
    /// one is filtering, this one's result is stale and is dropped without
    /// invoking the callback.
    pub async fn update_suggestions<F>(
        &self,
        query: &str,
        constraints: &ConstraintSet,
        mut on_suggestion: F,
    ) -> usize
    where
        F: FnMut(&Suggestion),
    {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if query.is_empty() {
            return 0;
        }

        let matches = self.engine.filter(query, constraints).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            log::debug!("Dropping stale suggestions for {:?}", query);
            return 0;
        }

        let suggestions = self.ranker.rank(&matches);
        for suggestion in &suggestions {
            on_suggestion(suggestion);
        }
        suggestions.len()
    }

    /// Full search for a submitted query.
    pub async fn search(&self, query: &str, constraints: &ConstraintSet) -> SearchOutcome {
        let matches = self.engine.filter(query, constraints).await;
        if matches.is_empty() {
            log::info!("No results for {:?}", query);
            SearchOutcome::NoResults {
                query: query.to_string(),
            }
        } else {
            SearchOutcome::Results(matches)
        }
    }
}
