use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use model::{MetadataRecord, MovieResult};
use providers::{MetadataProvider, Providers};
use server::{MovieAggregator, ProviderArgs};
use tracing::debug;

/// movie-lookup - query TMDb, OMDb and YouTube for a movie
#[derive(Parser)]
#[command(name = "movie-lookup")]
#[command(about = "Look up a movie's details, ratings and trailer", long_about = None)]
struct Cli {
    #[command(flatten)]
    providers: ProviderArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate metadata, ratings and trailer for a title
    Lookup {
        /// Movie title to look up
        title: String,

        /// Print the raw JSON result instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// List the metadata search candidates for a title
    Search {
        /// Movie title to search for
        title: String,

        /// Number of candidates to show
        #[arg(long, default_value = "10")]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Quieter than the server by default; the summary is printed to stdout
    server::init_tracing("warn");

    let cli = Cli::parse();
    let config = cli.providers.to_config();

    match cli.command {
        Commands::Lookup { title, json } => {
            let aggregator = MovieAggregator::from_config(&config)?;
            handle_lookup(&aggregator, &title, json).await?
        }
        Commands::Search { title, limit } => {
            let providers = Providers::from_config(&config)?;
            handle_search(&providers, &title, limit).await?
        }
    }

    Ok(())
}

/// Handle the 'lookup' command
async fn handle_lookup(aggregator: &MovieAggregator, title: &str, json: bool) -> Result<()> {
    let start = Instant::now();
    let movie = aggregator
        .aggregate(title)
        .await
        .with_context(|| format!("Lookup for {:?} failed", title))?;
    debug!("Lookup took {:?}", start.elapsed());

    if json {
        println!("{}", serde_json::to_string_pretty(&movie)?);
    } else {
        print_movie(&movie);
    }
    Ok(())
}

/// Handle the 'search' command
async fn handle_search(providers: &Providers, title: &str, limit: usize) -> Result<()> {
    let candidates = providers
        .metadata
        .search_movies(title)
        .await
        .with_context(|| format!("Search for {:?} failed", title))?;

    if candidates.is_empty() {
        println!("{}", format!("No results for '{}'", title).yellow());
        return Ok(());
    }

    println!("{}", format!("Search results for '{}':", title).bold().blue());
    for (rank, candidate) in candidates.iter().take(limit).enumerate() {
        print_candidate(rank + 1, candidate);
    }
    if candidates.len() > limit {
        println!("  ... and {} more", candidates.len() - limit);
    }
    Ok(())
}

fn print_candidate(rank: usize, candidate: &MetadataRecord) {
    let marker = if rank == 1 { " (used by lookup)".dimmed().to_string() } else { String::new() };
    println!(
        "{}. {} ({}) [id {}]{}",
        rank.to_string().green(),
        candidate.title,
        candidate.release_date.as_deref().unwrap_or("?"),
        candidate.id,
        marker
    );
}

/// Helper function to format and print an aggregated movie
fn print_movie(movie: &MovieResult) {
    println!(
        "{} ({})",
        movie.title.bold().blue(),
        movie.release_date.as_deref().unwrap_or("unknown release date")
    );

    if let Some(overview) = movie.overview.as_deref().filter(|o| !o.is_empty()) {
        println!("\n{}\n", overview);
    }

    match &movie.ratings {
        Some(ratings) => {
            println!("{}IMDb: {}", "• ".green(), ratings.imdb);
            println!("{}Rotten Tomatoes: {}", "• ".green(), ratings.rotten_tomatoes);
            println!("{}Metacritic: {}", "• ".green(), ratings.metacritic);
        }
        None => println!("{}", "No ratings available".yellow()),
    }

    match &movie.trailer {
        Some(url) => println!("{}Trailer: {}", "• ".cyan(), url),
        None => println!("{}", "No trailer found".yellow()),
    }
    if let Some(poster) = &movie.poster {
        println!("{}Poster: {}", "• ".cyan(), poster);
    }
    if let Some(backdrop) = &movie.backdrop {
        println!("{}Backdrop: {}", "• ".cyan(), backdrop);
    }
}
