//! sitegrep CLI
//!
//! Crawls a site from a seed URL and answers keyword queries over the
//! text that was indexed along the way. The index lives only for the
//! duration of one invocation.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sitegrep::{
    config::CrawlConfig,
    engine::CrawlEngine,
    error::Result,
    fetch::HttpFetcher,
};

/// sitegrep - scoped site crawler and keyword search
#[derive(Parser, Debug)]
#[command(name = "sitegrep", version, about = "Crawl a site and search the indexed text")]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crawl a site and report what was indexed
    Crawl {
        /// Seed URL to start from
        url: String,

        /// Scope root for link containment (defaults to the seed URL)
        #[arg(long)]
        scope: Option<String>,

        /// Print the crawl summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Crawl a site, then search the indexed text for a keyword
    Search {
        /// Seed URL to start from
        url: String,

        /// Keyword to match, case-insensitive
        keyword: String,

        /// Scope root for link containment (defaults to the seed URL)
        #[arg(long)]
        scope: Option<String>,

        /// Print matching URLs as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn print_results(results: &[&str]) {
    if results.is_empty() {
        println!("No results found.");
        return;
    }
    println!("Search results:");
    for url in results {
        println!("- {url}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => CrawlConfig::load(path)?,
        None => CrawlConfig::default(),
    };
    config.validate()?;

    let fetcher = HttpFetcher::new(&config)?;
    let mut engine = CrawlEngine::new(fetcher);

    match cli.command {
        Command::Crawl { url, scope, json } => {
            let outcome = engine.crawl(&url, scope.as_deref()).await;

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                log::info!(
                    "Visited {} pages: {} indexed, {} fetch failures, {} links skipped",
                    outcome.pages_visited,
                    outcome.pages_indexed,
                    outcome.fetch_failures,
                    outcome.skipped_links
                );
            }
        }

        Command::Search {
            url,
            keyword,
            scope,
            json,
        } => {
            let outcome = engine.crawl(&url, scope.as_deref()).await;
            log::info!(
                "Indexed {} of {} visited pages",
                outcome.pages_indexed,
                outcome.pages_visited
            );

            let results = engine.search(&keyword);
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                print_results(&results);
            }
        }
    }

    Ok(())
}
