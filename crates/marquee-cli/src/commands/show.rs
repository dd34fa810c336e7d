use anyhow::Result;
use marquee_core::model::ArtistId;
use marquee_search::SearchSession;

pub async fn run_show(session: &SearchSession, id: u64) -> Result<()> {
    let engine = session.engine();
    let artist = engine.catalog().get(ArtistId::new(id))?;

    println!("\n🎤 {}\n", artist.name);
    println!("  Id:            {}", artist.id);
    println!("  Members:       {}", artist.members.join(", "));
    println!("  Formed:        {}", artist.formation_year);
    println!("  First album:   {}", artist.first_release);
    println!("  Image:         {}", artist.image_url);

    match engine.locations_of(artist.id).await {
        Ok(locations) if locations.is_empty() => println!("  Locations:     none listed"),
        Ok(locations) => {
            println!("  Locations:");
            for location in &locations {
                match (location.city_display(), location.country_display()) {
                    (Some(city), Some(country)) => println!("    - {city}, {country}"),
                    _ => println!("    - {}", location.raw()),
                }
            }
        }
        Err(e) => {
            log::warn!("Could not fetch locations for artist {}: {}", artist.id, e);
            println!("  Locations:     unavailable ({e})");
        }
    }

    Ok(())
}
