use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use catalog::{CandidateVideo, CatalogProvider, NegativeFeedback, PreferenceSnapshot, StaticCatalog};
use engine::{FeedConfig, FeedOrchestrator};
use sources::FeedRequest;

/// VidRecs - Personalized Video Feed Engine
#[derive(Parser)]
#[command(name = "vid-recs")]
#[command(about = "Personalized video feed from watch history and subscriptions", long_about = None)]
struct Cli {
    /// Path to the catalog snapshot JSON file
    #[arg(short, long, default_value = "data/catalog.json")]
    catalog: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a personalized feed from a request file
    Recommend {
        /// Path to a JSON feed request (histories, subscriptions, page)
        #[arg(long)]
        request: PathBuf,

        /// Optional JSON preference snapshot (NG lists, hidden videos)
        #[arg(long)]
        prefs: Option<PathBuf>,

        /// Keyword to suppress as if hidden once; repeatable
        #[arg(long = "hide")]
        hide_keywords: Vec<String>,

        /// Share of the feed drawn from the discovery pool
        #[arg(long)]
        discovery_ratio: Option<f64>,

        /// Maximum feed length; values outside 100-150 are clamped
        #[arg(long)]
        limit: Option<usize>,

        /// Fix the jitter seed for a reproducible feed
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Search the catalog
    Search {
        /// Query; whitespace-separated terms are OR-combined
        #[arg(long)]
        query: String,

        /// Zero-based result page
        #[arg(long, default_value = "0")]
        page: u32,
    },

    /// Show the trending listing
    Trending,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let provider = Arc::new(
        StaticCatalog::load_from_file(&cli.catalog)
            .with_context(|| format!("failed to load catalog {}", cli.catalog.display()))?,
    );
    println!("{} Loaded catalog in {:?}", "✓".green(), start.elapsed());

    match cli.command {
        Commands::Recommend {
            request,
            prefs,
            hide_keywords,
            discovery_ratio,
            limit,
            seed,
        } => {
            handle_recommend(
                provider,
                request,
                prefs,
                hide_keywords,
                discovery_ratio,
                limit,
                seed,
            )
            .await?
        }
        Commands::Search { query, page } => handle_search(provider, query, page).await?,
        Commands::Trending => handle_trending(provider).await?,
    }

    Ok(())
}

/// Handle the 'recommend' command
async fn handle_recommend(
    provider: Arc<StaticCatalog>,
    request_path: PathBuf,
    prefs_path: Option<PathBuf>,
    hide_keywords: Vec<String>,
    discovery_ratio: Option<f64>,
    limit: Option<usize>,
    seed: Option<u64>,
) -> Result<()> {
    let request: FeedRequest = read_json(&request_path)
        .with_context(|| format!("failed to read request {}", request_path.display()))?;

    let mut prefs: PreferenceSnapshot = match prefs_path {
        Some(path) => read_json(&path)
            .with_context(|| format!("failed to read preferences {}", path.display()))?,
        None => PreferenceSnapshot::default(),
    };
    if !hide_keywords.is_empty() {
        let mut feedback = NegativeFeedback::new();
        feedback.record_hide(&hide_keywords);
        prefs.absorb_feedback(&feedback);
    }

    let mut config = FeedConfig::default();
    if let Some(ratio) = discovery_ratio {
        config.discovery_ratio = ratio;
    }
    if let Some(limit) = limit {
        config.max_feed_len = limit;
    }
    config.seed = seed;

    let orchestrator = FeedOrchestrator::with_config(provider, config);

    let start = Instant::now();
    let feed = orchestrator.recommend(&request, &prefs).await?;
    println!(
        "{} Built {} item feed in {:?}",
        "✓".green(),
        feed.len(),
        start.elapsed()
    );

    print_videos("Your feed:", &feed);
    Ok(())
}

/// Handle the 'search' command
async fn handle_search(provider: Arc<StaticCatalog>, query: String, page: u32) -> Result<()> {
    let results = provider.search(&query, page).await?;
    print_videos(&format!("Search results for '{}':", query), &results);
    Ok(())
}

/// Handle the 'trending' command
async fn handle_trending(provider: Arc<StaticCatalog>) -> Result<()> {
    let results = provider.trending().await?;
    print_videos("Trending now:", &results);
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &PathBuf) -> Result<T> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Helper function to format and print a video listing
fn print_videos(header: &str, videos: &[CandidateVideo]) {
    println!("{}", header.bold().blue());
    if videos.is_empty() {
        println!("  (nothing to show)");
        return;
    }
    for (rank, video) in videos.iter().enumerate() {
        let mut extras: Vec<&str> = Vec::new();
        if !video.view_count_text.is_empty() {
            extras.push(&video.view_count_text);
        }
        if !video.published_text.is_empty() {
            extras.push(&video.published_text);
        }
        let extras = if extras.is_empty() {
            String::new()
        } else {
            format!(" ({})", extras.join(", "))
        };
        println!(
            "{}. {} - {}{}",
            (rank + 1).to_string().green(),
            video.title,
            video.channel_name.cyan(),
            extras
        );
    }
}
