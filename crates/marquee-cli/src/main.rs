use anyhow::Result;
use clap::Parser;
use marquee_core::ConstraintSet;
use marquee_fetch::Config;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "marquee", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base URL of the artist catalog service (default: from config)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Constraints applied on top of the query text.
#[derive(Debug, Clone, clap::Args)]
struct FilterArgs {
    /// Only artists with one of these member counts (e.g. --members 2,4)
    #[arg(long, value_delimiter = ',')]
    members: Vec<usize>,

    /// Only artists that performed in this city (e.g. --city "New York")
    #[arg(long)]
    city: Option<String>,

    /// Only artists formed in exactly this year
    #[arg(long)]
    year: Option<i32>,
}

impl FilterArgs {
    fn constraints(&self) -> ConstraintSet {
        let mut constraints = ConstraintSet::default().with_member_counts(self.members.clone());
        if let Some(city) = &self.city {
            constraints = constraints.with_city(city);
        }
        if let Some(year) = self.year {
            constraints = constraints.with_year(year);
        }
        constraints
    }
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Search the catalog and list every matching artist
    ///
    /// The query is matched, case-insensitively, against artist names,
    /// member names, first-release dates, and performance locations. A
    /// numeric query also matches formation years that contain it, so
    /// `19` finds bands formed in 1990 and 1992. Results keep catalog
    /// order. An empty query lists the whole catalog, narrowed by any
    /// constraint flags.
    Search {
        /// Free-text query
        #[arg(default_value = "")]
        query: String,

        #[command(flatten)]
        filters: FilterArgs,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the live suggestions for a partial query
    Suggest {
        /// Partial query, as typed so far
        query: String,

        #[command(flatten)]
        filters: FilterArgs,

        /// Number of suggestions (default: from config)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Type queries line by line and see suggestions for each
    Interactive {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Show details and performance locations for one artist
    Show {
        /// Artist id
        id: u64,
    },
    /// List performance cities grouped by country
    Cities,
    /// Show formation-year and member-count bounds of the catalog
    Bounds,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Create the config file with documented defaults
    Init,
    /// Print the config file location
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.api_url {
        Some(url) => Config::load_with_api_url(url)?,
        None => Config::load()?,
    };

    commands::init_logging(&config, cli.verbose)?;

    match cli.command {
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::show_config(&config),
            ConfigAction::Init => commands::init_config()?,
            ConfigAction::Path => commands::show_config_path(),
        },
        Commands::Search {
            query,
            filters,
            json,
        } => {
            let session = commands::open_session(&config, None).await?;
            commands::run_search(&session, &query, &filters.constraints(), json).await?;
        }
        Commands::Suggest {
            query,
            filters,
            limit,
        } => {
            let session = commands::open_session(&config, limit).await?;
            commands::run_suggest(&session, &query, &filters.constraints()).await;
        }
        Commands::Interactive { filters } => {
            let session = commands::open_session(&config, None).await?;
            commands::run_interactive(&session, &filters.constraints()).await?;
        }
        Commands::Show { id } => {
            let session = commands::open_session(&config, None).await?;
            commands::run_show(&session, id).await?;
        }
        Commands::Cities => {
            let session = commands::open_session(&config, None).await?;
            commands::run_cities(&session).await;
        }
        Commands::Bounds => {
            let session = commands::open_session(&config, None).await?;
            commands::run_bounds(&session).await?;
        }
    }

    Ok(())
}
