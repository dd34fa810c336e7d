use anyhow::Result;
use marquee_fetch::{config, Config};

/// Show the current effective configuration.
pub fn show_config(config: &Config) {
    println!("Current Configuration");
    println!("=====================\n");

    let path = config::config_file_path();
    println!("Config file: {}", path.display());
    println!(
        "File exists: {}\n",
        if path.exists() { "yes" } else { "no (using defaults)" }
    );

    println!("Settings:");
    println!("  api_base_url: {}", config.api_base_url);
    println!("  request_timeout_secs: {}", config.request_timeout_secs);
    println!("  max_concurrent_fetches: {}", config.max_concurrent_fetches);
    println!("  suggestion_limit: {}", config.suggestion_limit);
    println!("  logging.level: {:?}", config.logging.level());
    println!("  logging.coloured: {}", config.logging.coloured());

    println!("\nPriority: CLI args > ENV vars (MARQUEE_*) > Config file > Defaults");
}

/// Create the config file if it does not exist yet.
pub fn init_config() -> Result<()> {
    let path = config::config_file_path();
    if config::ensure_config_file()? {
        println!("Created {}", path.display());
    } else {
        println!("Config file already exists: {}", path.display());
    }
    Ok(())
}

pub fn show_config_path() {
    println!("{}", config::config_file_path().display());
}
