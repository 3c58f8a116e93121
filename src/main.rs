//! github-trending main entry point
//!
//! This is the command-line interface for listing GitHub's trending
//! repositories and developers.

use anyhow::Context;
use clap::Parser;
use github_trending::config::load_optional_config;
use github_trending::output::{open_nth, print_listings, render_json};
use github_trending::{plan, Action, Listings, Section, Timespan, TrendingClient, TrendingRequest};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// See the trending repositories and developers on GitHub
///
/// Lists trending repositories by default. Pass a position N to open that
/// entry in the browser instead of printing the listing.
#[derive(Parser, Debug)]
#[command(name = "github-trending")]
#[command(version)]
#[command(about = "See the trending repositories and developers on GitHub", long_about = None)]
struct Cli {
    /// Open the Nth entry (1-indexed) in the default browser
    #[arg(value_name = "N")]
    goto: Option<usize>,

    /// List the trending repositories
    #[arg(short, long)]
    repo: bool,

    /// List the trending developers
    #[arg(short, long)]
    dev: bool,

    /// Restrict the listing to one language (e.g. rust, python)
    #[arg(short, long, value_name = "LANG")]
    lang: Option<String>,

    /// Rank over the past week
    #[arg(long, conflicts_with = "month")]
    week: bool,

    /// Rank over the past month
    #[arg(long, conflicts_with = "week")]
    month: bool,

    /// Print the listings as a single JSON object
    #[arg(long)]
    json: bool,

    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn timespan(&self) -> Timespan {
        if self.week {
            Timespan::Weekly
        } else if self.month {
            Timespan::Monthly
        } else {
            Timespan::Daily
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = load_optional_config(cli.config.as_deref()).with_context(|| match &cli.config {
        Some(path) => format!("Failed to load configuration from {}", path.display()),
        None => "Failed to build default configuration".to_string(),
    })?;

    let client = TrendingClient::new(&config).context("Failed to build HTTP client")?;
    let request = TrendingRequest::new(cli.lang.clone(), cli.timespan());

    match plan(cli.repo, cli.dev, cli.goto) {
        Action::Open { section, position } => match section {
            Section::Repositories => open_nth(&client.repositories(&request).await, position)?,
            Section::Developers => open_nth(&client.developers(&request).await, position)?,
        },
        Action::List(sections) => {
            let listings = Listings::fetch(&client, &sections, &request).await;
            if cli.json {
                println!("{}", render_json(&listings)?);
            } else {
                print_listings(&listings);
            }
        }
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so listings on stdout stay pipeable.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("github_trending=warn,error"),
            1 => EnvFilter::new("github_trending=info,warn"),
            2 => EnvFilter::new("github_trending=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
