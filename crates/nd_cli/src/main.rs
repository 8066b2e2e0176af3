use std::sync::Arc;

use clap::{Parser, Subcommand};
use nd_core::{NewsDigest, Result};
use nd_feeds::{Aggregator, FeedConfig, Newsroom};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "newsdesk", version, about = "Aggregate headlines from the configured live sources", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one aggregation pass and print the digest
    Refresh {
        /// Mark the pass as user-triggered (picks the spinner, nothing else)
        #[arg(long)]
        manual: bool,
    },
    /// List the configured sources in merge-priority order
    Sources,
    /// Print the bundled fallback set
    Fallback,
    /// Serve the digest over HTTP
    Serve {
        #[arg(long, default_value = "127.0.0.1:3300")]
        addr: String,
    },
}

fn print_digest(digest: &NewsDigest) {
    for section in &digest.sections {
        println!(
            "{} ({})",
            section.category.label(),
            section.articles.len()
        );
        for article in &section.articles {
            let date = article
                .published_at
                .map(|dt| dt.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "undated".to_string());
            println!("  - [{}] {} ({})", date, article.title, article.source_name);
            println!("    {}", article.url);
        }
    }

    if digest.using_fallback {
        println!();
        println!("Showing the bundled collection until live sources are back.");
    }
    if let Some(issues) = &digest.issues {
        println!();
        println!("Source issues: {}", issues);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    let config = FeedConfig::from_env();

    match cli.command {
        Commands::Refresh { manual } => {
            let newsroom = Newsroom::new(Aggregator::with_default_sources(&config)?);
            let snapshot = newsroom.refresh(manual).await;
            info!(
                "📰 Pass {} finished: {} articles in {} sections",
                snapshot.generation,
                snapshot.digest.articles.len(),
                snapshot.digest.sections.len()
            );
            print_digest(&snapshot.digest);
        }
        Commands::Sources => {
            let aggregator = Aggregator::with_default_sources(&config)?;
            println!("Sources, in merge-priority order:");
            for (index, name) in aggregator.source_names().iter().enumerate() {
                println!("  {}. {}", index + 1, name);
            }
        }
        Commands::Serve { addr } => {
            let newsroom = Arc::new(Newsroom::new(Aggregator::with_default_sources(&config)?));
            // Load once so the first read is not empty, then hand off.
            newsroom.refresh(false).await;
            nd_web::serve(&addr, nd_web::AppState { newsroom }).await?;
        }
        Commands::Fallback => {
            // An aggregator with no sources always substitutes the bundled set.
            let digest = Aggregator::new(Vec::new()).run().await;
            println!(
                "Bundled fallback set {} ({} articles):",
                nd_feeds::fallback::FALLBACK_VERSION,
                digest.articles.len()
            );
            print_digest(&digest);
        }
    }

    Ok(())
}
