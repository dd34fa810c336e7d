use anyhow::{Context, Result};
use marquee_core::model::Artist;
use marquee_core::ConstraintSet;
use marquee_search::{SearchOutcome, SearchSession};
use tokio::io::{AsyncBufReadExt, BufReader};

pub async fn run_search(
    session: &SearchSession,
    query: &str,
    constraints: &ConstraintSet,
    json: bool,
) -> Result<()> {
    log::info!("Searching for {:?}", query);

    let outcome = session.search(query, constraints).await;

    if json {
        let artists: Vec<&Artist> = outcome
            .matches()
            .map(|matches| matches.iter().map(|artist| &**artist).collect())
            .unwrap_or_default();
        println!(
            "{}",
            serde_json::to_string_pretty(&artists).context("Failed to encode results")?
        );
        return Ok(());
    }

    match &outcome {
        SearchOutcome::Results(matches) => {
            println!("\n🎤 {} artists\n", matches.len());
            for artist in matches {
                println!("{}", summary_line(artist));
            }
        }
        SearchOutcome::NoResults { .. } => println!("{outcome}"),
    }

    Ok(())
}

pub async fn run_suggest(session: &SearchSession, query: &str, constraints: &ConstraintSet) {
    let delivered = session
        .update_suggestions(query, constraints, |suggestion| {
            println!("  {}", suggestion.label);
        })
        .await;

    if delivered == 0 && !query.is_empty() {
        println!("No suggestions for {:?}", query);
    }
}

/// Read queries from stdin, one per line, printing suggestions for each.
pub async fn run_interactive(session: &SearchSession, constraints: &ConstraintSet) -> Result<()> {
    println!("Type a name, member, year, date, or city. Ctrl-D to quit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        let query = line.trim();
        run_suggest(session, query, constraints).await;
    }

    Ok(())
}

fn summary_line(artist: &Artist) -> String {
    format!(
        "  [{:>3}] {} | formed {} | first album {}",
        artist.id,
        artist.display_label(),
        artist.formation_year,
        artist.first_release
    )
}
