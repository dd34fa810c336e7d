//! Suggestion and search flow through a `SearchSession`.

mod common;

use std::time::Duration;

use common::{bands, engine};
use marquee_core::ConstraintSet;
use marquee_search::{SearchOutcome, SearchSession, SuggestionRanker};

async fn session(limit: usize) -> SearchSession {
    let (engine, _) = engine(bands()).await;
    SearchSession::new(engine, SuggestionRanker::new(limit))
}

#[tokio::test]
async fn test_update_suggestions_invokes_callback_per_item() {
    let session = session(6).await;
    let mut labels = Vec::new();

    let delivered = session
        .update_suggestions("london", &ConstraintSet::default(), |s| {
            labels.push(s.label.clone());
        })
        .await;

    assert_eq!(delivered, 2);
    assert_eq!(labels, vec!["Duo (Bea, Cal)", "Quartet (Dan, Eve, Fay, Gus)"]);
}

#[tokio::test]
async fn test_update_suggestions_respects_limit() {
    let session = session(1).await;
    let mut seen = 0;

    let delivered = session
        .update_suggestions("a", &ConstraintSet::default(), |_| seen += 1)
        .await;

    assert_eq!(delivered, 1);
    assert_eq!(seen, 1);
}

#[tokio::test]
async fn test_empty_query_clears_suggestions() {
    let session = session(6).await;
    let mut seen = 0;

    let delivered = session
        .update_suggestions("", &ConstraintSet::default(), |_| seen += 1)
        .await;

    assert_eq!(delivered, 0);
    assert_eq!(seen, 0);
}

#[tokio::test]
async fn test_stale_suggestions_are_dropped() {
    let (engine, _) = engine(bands().with_delay(Duration::from_millis(50))).await;
    let session = SearchSession::new(engine, SuggestionRanker::default());
    let constraints = ConstraintSet::default();

    let mut stale = Vec::new();
    let mut fresh = Vec::new();

    let (first, second) = tokio::join!(
        session.update_suggestions("lon", &constraints, |s| stale.push(s.artist.id)),
        session.update_suggestions("london", &constraints, |s| fresh.push(s.artist.id)),
    );

    assert_eq!(first, 0);
    assert!(stale.is_empty());
    assert_eq!(second, 2);
    assert_eq!(fresh.len(), 2);
}

#[tokio::test]
async fn test_search_reports_no_results() {
    let session = session(6).await;
    let outcome = session.search("zzz", &ConstraintSet::default()).await;

    assert!(matches!(outcome, SearchOutcome::NoResults { ref query } if query == "zzz"));
    assert_eq!(outcome.to_string(), "no results found for \"zzz\"");
}

#[tokio::test]
async fn test_search_returns_all_matches() {
    let session = session(1).await;
    let outcome = session.search("a", &ConstraintSet::default()).await;

    let matches = outcome.matches().unwrap();
    assert!(matches.len() > 1, "search is not truncated to the suggestion limit");
}
