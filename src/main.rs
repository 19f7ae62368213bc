// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use mnemo::utils::logging::{format_error, format_success};
use mnemo::{Config, MemoryIndex, QueryRequest};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "mnemo")]
#[command(version = "0.1.0")]
#[command(about = "Query a text-memory index with token search or TF-IDF re-ranking", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search remembered notes
    Query {
        /// Query text
        query: String,

        /// Require a tag; repeat to require several at once
        #[arg(short, long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Re-rank locally with TF-IDF instead of the engine's token search
        #[arg(long)]
        tfidf: bool,
    },

    /// Check that the index is reachable and ready
    Health,

    /// Show index statistics
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    mnemo::utils::logging::init_logger(cli.color, cli.verbose);

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Query { query, tags, tfidf } => {
            cmd_query(&config, query, tags, tfidf).await?;
        }
        Commands::Health => {
            cmd_health(&config).await?;
        }
        Commands::Stats => {
            cmd_stats(&config).await?;
        }
    }

    Ok(())
}

async fn cmd_query(config: &Config, query: String, tags: Vec<String>, tfidf: bool) -> Result<()> {
    let index = MemoryIndex::connect(config.index.clone())
        .await
        .context("Failed to connect to index")?;

    let request = QueryRequest {
        query,
        tags,
        use_tfidf: tfidf,
    };

    mnemo::query_memory(&index, &request, &config.query)
        .await
        .context("Query failed")?;

    Ok(())
}

async fn cmd_health(config: &Config) -> Result<()> {
    let index = match MemoryIndex::connect(config.index.clone()).await {
        Ok(index) => index,
        Err(e) => {
            println!("{}", format_error(&format!("Index unavailable: {}", e)));
            return Err(e.into());
        }
    };

    println!(
        "{}",
        format_success(&format!("Index '{}' is ready", index.index_uid()))
    );

    Ok(())
}

async fn cmd_stats(config: &Config) -> Result<()> {
    let index = MemoryIndex::connect(config.index.clone())
        .await
        .context("Failed to connect to index")?;

    let stats = index.stats().await.context("Failed to fetch stats")?;

    info!("Gathering statistics for index '{}'", index.index_uid());
    println!("Memories stored: {}", stats.number_of_documents);
    if stats.is_indexing {
        println!("Note: the index is still processing updates");
    }

    Ok(())
}
