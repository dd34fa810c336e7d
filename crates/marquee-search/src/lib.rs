//! Search for marquee.
//!
//! Turns a free-text query plus structured constraints into an ordered,
//! de-duplicated set of matching artists, enriching artists with their
//! performance locations on demand, and ranks matches into the short
//! suggestion list shown while the user types.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod engine;
pub mod matching;
pub mod ranker;
pub mod result;
pub mod session;

pub use engine::FilterEngine;
pub use matching::QueryMatcher;
pub use ranker::{Suggestion, SuggestionRanker, DEFAULT_SUGGESTION_LIMIT};
pub use result::MatchResult;
pub use session::{SearchOutcome, SearchSession};
