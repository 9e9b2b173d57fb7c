use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use nflx::config::{Config, DEFAULT_CONFIG_PATH, QueryConfig, load_config};
use nflx::data::Catalog;
use nflx::report::{Format, Insight, report};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Analytical queries over the Netflix titles table.
#[derive(Parser, Debug)]
#[command(name = "nflx", version, about)]
struct Cli {
    /// Config file (defaults to ./nflx.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Dataset to load (.csv or .parquet)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Table, global = true)]
    format: Format,

    /// Reference date for relative windows, YYYY-MM-DD (defaults to today)
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run all fifteen queries in order
    All,
    /// Count movies vs TV shows
    Types,
    /// Most common rating per type
    Ratings,
    /// Titles released in a given year
    Year {
        #[arg(long)]
        year: Option<i32>,
    },
    /// Countries with the most content
    Countries {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Movies ordered by running time
    Longest {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Titles added within the last N years
    Recent {
        #[arg(long)]
        years: Option<u32>,
    },
    /// Titles by a director
    Director {
        #[arg(long)]
        name: Option<String>,
    },
    /// TV shows with more than N seasons
    Seasons {
        #[arg(long)]
        min: Option<u32>,
    },
    /// Content per genre
    Genres,
    /// Yearly share of one country's content
    Share {
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Documentaries
    Documentaries,
    /// Content without a director
    NoDirector,
    /// Recent titles featuring an actor
    Actor {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        years: Option<i32>,
    },
    /// Most frequent actors in one country's productions
    Actors {
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Good/Bad description categories per type
    Categories,
}

impl Command {
    /// Folds the command's overrides into `params` and returns what to run.
    fn apply(self, params: &mut QueryConfig) -> Vec<Insight> {
        let insight = match self {
            Command::All => return Insight::ALL.to_vec(),
            Command::Types => Insight::TypeDistribution,
            Command::Ratings => Insight::TopRatings,
            Command::Year { year } => {
                override_with(&mut params.release_year, year);
                Insight::ReleasedIn
            }
            Command::Countries { limit } => {
                override_with(&mut params.top_countries, limit);
                Insight::TopCountries
            }
            Command::Longest { limit } => {
                if limit.is_some() {
                    params.longest_limit = limit;
                }
                Insight::LongestMovies
            }
            Command::Recent { years } => {
                override_with(&mut params.recent_years, years);
                Insight::RecentlyAdded
            }
            Command::Director { name } => {
                override_with(&mut params.director, name);
                Insight::DirectedBy
            }
            Command::Seasons { min } => {
                override_with(&mut params.min_seasons, min);
                Insight::LongRunningShows
            }
            Command::Genres => Insight::GenreCounts,
            Command::Share { country, limit } => {
                override_with(&mut params.share_country, country);
                override_with(&mut params.share_limit, limit);
                Insight::YearlyShare
            }
            Command::Documentaries => Insight::Documentaries,
            Command::NoDirector => Insight::WithoutDirector,
            Command::Actor { name, years } => {
                override_with(&mut params.actor, name);
                override_with(&mut params.actor_window_years, years);
                Insight::ActorTitles
            }
            Command::Actors { country, limit } => {
                override_with(&mut params.cast_country, country);
                override_with(&mut params.top_actors, limit);
                Insight::TopActors
            }
            Command::Categories => Insight::ContentCategories,
        };
        vec![insight]
    }
}

fn override_with<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

fn read_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            load_config(Path::new(DEFAULT_CONFIG_PATH)).context("Failed to load nflx.toml")
        }
        None => Ok(Config::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = read_config(cli.config.as_deref())?;
    let insights = cli.command.apply(&mut config.queries);
    config
        .validate()
        .context("Invalid query parameters")?;

    let data_path = cli.data.unwrap_or(config.data.path);
    let catalog = Catalog::load(&data_path)
        .with_context(|| format!("Failed to load dataset {}", data_path.display()))?;
    info!(records = catalog.len(), "catalog ready");

    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for insight in insights {
        report(
            &mut out,
            insight,
            catalog.records(),
            &config.queries,
            today,
            cli.format,
        )
        .with_context(|| format!("Failed to report {insight:?}"))?;
    }
    out.flush()?;

    Ok(())
}
