//! Docsift CLI - query a corpus from the command line
//!
//! # Commands
//!
//! ```bash
//! # Search the bundled sample corpus
//! docsift search "cloud infrastructure AWS Azure" -k 3
//!
//! # Search your own corpus (a JSON array of {id, title, content}) as JSON
//! docsift --corpus docs.json search "quarterly revenue" --json
//!
//! # Index statistics
//! docsift stats
//!
//! # List the chunks of one document
//! docsift chunks --doc 3
//! ```
//!
//! Engine settings come from built-in defaults, then `docsift.toml` (or the
//! file given with `--config`), then `DOCSIFT_*` environment variables, then
//! flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use docsift_lib::{EngineConfig, SearchEngine, corpus, segment::SegmenterKind};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_FILE: &str = "docsift.toml";

#[derive(Parser)]
#[command(name = "docsift")]
#[command(about = "In-memory document retrieval over sentence chunks")]
#[command(version)]
struct Cli {
    /// JSON corpus file; the bundled sample corpus is used when omitted
    #[arg(long, global = true)]
    corpus: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: Overrides,

    #[command(subcommand)]
    command: Commands,
}

/// Command-line settings layered over every other configuration source.
#[derive(clap::Args, Serialize)]
struct Overrides {
    /// Sentences per chunk
    #[arg(long, global = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    sentences_per_chunk: Option<usize>,

    /// Vocabulary size cap
    #[arg(long, global = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    max_features: Option<usize>,

    /// Sentence segmenter: "heuristic" or "linguistic"
    #[arg(long, global = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    segmenter: Option<SegmenterKind>,

    /// Extra abbreviation for the linguistic segmenter (repeatable)
    #[arg(long = "abbreviation", global = true)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    abbreviations: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank chunks against a query
    Search {
        /// Free-text query
        query: String,

        /// Number of results to return (defaults to the configured value)
        #[arg(short, long)]
        k: Option<usize>,

        /// Print the response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show index statistics
    Stats {
        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// List indexed chunks
    Chunks {
        /// Only show chunks of this document
        #[arg(long)]
        doc: Option<i64>,
    },
}

fn load_config(path: Option<&Path>, overrides: &Overrides) -> Result<EngineConfig> {
    let mut figment = Figment::from(Serialized::defaults(EngineConfig::default()));
    match path {
        Some(path) => {
            if !path.exists() {
                bail!("config file '{}' not found", path.display());
            }
            figment = figment.merge(Toml::file(path));
        }
        None => figment = figment.merge(Toml::file(DEFAULT_CONFIG_FILE)),
    }
    let config: EngineConfig = figment
        .merge(Env::prefixed("DOCSIFT_"))
        .merge(Serialized::defaults(overrides))
        .extract()
        .context("failed to load configuration")?;

    debug!(?config, "configuration loaded");
    Ok(config)
}

fn build_engine(corpus_path: Option<&Path>, config: EngineConfig) -> Result<SearchEngine> {
    let engine = match corpus_path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read corpus '{}'", path.display()))?;
            SearchEngine::from_json(&json, config)?
        }
        None => SearchEngine::new(corpus::sample_documents(), config)?,
    };
    Ok(engine)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref(), &cli.overrides)?;
    let engine = build_engine(cli.corpus.as_deref(), config)?;

    match cli.command {
        Commands::Search { query, k, json } => {
            let k = k.unwrap_or(engine.config().default_top_k);
            let response = engine.respond(&query, k)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
                return Ok(());
            }

            println!("Searching: '{}' (k={k})", response.query);
            if response.results.is_empty() {
                println!("\nNo matching chunks.");
            }
            println!("\n=== Results ===\n");
            for (i, result) in response.results.iter().enumerate() {
                println!(
                    "#{} (score: {:.4}) [{}] {} / chunk {}",
                    i + 1,
                    result.similarity_score,
                    result.doc_id,
                    result.doc_title,
                    result.chunk_index
                );
                println!("---");
                let preview: String = result.chunk_text.chars().take(300).collect();
                let ellipsis = if result.chunk_text.chars().count() > 300 { "..." } else { "" };
                println!("{preview}{ellipsis}\n");
            }
        }

        Commands::Stats { json } => {
            let stats = engine.stats();
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
                return Ok(());
            }

            println!("Documents:           {}", stats.total_documents);
            println!("Chunks:              {}", stats.total_chunks);
            println!("Avg chunks per doc:  {:.2}", stats.avg_chunks_per_doc);
            println!("Vocabulary size:     {}", engine.vocabulary().len());
        }

        Commands::Chunks { doc } => {
            let chunks: Vec<_> = engine
                .chunks()
                .iter()
                .filter(|c| doc.is_none_or(|id| c.doc_id == id))
                .collect();

            if chunks.is_empty() {
                println!("No chunks found.");
            }
            for chunk in chunks {
                println!(
                    "--- Chunk {} (doc {}: {}, sentences {}..{}) ---",
                    chunk.chunk_index,
                    chunk.doc_id,
                    chunk.doc_title,
                    chunk.sentence_span.start,
                    chunk.sentence_span.end
                );
                println!("{}\n", chunk.text);
            }
        }
    }

    Ok(())
}
