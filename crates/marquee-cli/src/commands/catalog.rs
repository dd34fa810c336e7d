use anyhow::{Context, Result};
use marquee_search::SearchSession;

pub async fn run_cities(session: &SearchSession) {
    let options = session.engine().city_options().await;

    if options.is_empty() {
        println!("No performance locations available.");
        return;
    }

    for (country, cities) in &options {
        println!("{country}");
        for city in cities {
            println!("  - {city}");
        }
    }
}

pub async fn run_bounds(session: &SearchSession) -> Result<()> {
    let engine = session.engine();
    let (min, max) = engine
        .cache()
        .gateway()
        .fetch_year_bounds()
        .await
        .context("Failed to fetch formation-year bounds")?;

    println!("\n📊 Catalog bounds\n");
    println!("  Artists:        {}", engine.catalog().len());
    println!("  Formed between: {} and {}", min, max);
    println!("  Member counts:  1 to {}", engine.catalog().max_members());

    Ok(())
}
