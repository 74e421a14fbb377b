//! Command line argument parsing for the Javelin CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Javelin - hybrid lexical and vector retrieval with question answering
#[derive(Parser, Debug, Clone)]
#[command(name = "javelin")]
#[command(about = "A hybrid lexical and vector retrieval engine")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct JavelinArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl JavelinArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search a corpus with hybrid retrieval
    Search(SearchArgs),

    /// Ask a question over a corpus
    Ask(AskArgs),

    /// Evaluate question answering over a labeled dataset
    Eval(EvalArgs),

    /// Show corpus and index statistics
    Stats(StatsArgs),
}

/// Arguments for hybrid search
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Path to the corpus file (one document per line)
    #[arg(value_name = "CORPUS_FILE")]
    pub corpus: PathBuf,

    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Fusion weight: 1.0 is pure dense, 0.0 is pure sparse
    #[arg(short, long, default_value = "0.5")]
    pub alpha: f32,

    /// Maximum number of results to return
    #[arg(short = 'k', long, default_value = "10")]
    pub top_k: usize,

    /// Embedding dimensionality for the local embedder
    #[arg(short, long, env = "JAVELIN_DIMENSION", default_value = "64")]
    pub dimension: usize,
}

/// Arguments for question answering
#[derive(Parser, Debug, Clone)]
pub struct AskArgs {
    /// Path to the corpus file (one document per line)
    #[arg(value_name = "CORPUS_FILE")]
    pub corpus: PathBuf,

    /// The question to answer
    #[arg(value_name = "QUESTION")]
    pub question: String,

    /// Fusion weight: 1.0 is pure dense, 0.0 is pure sparse
    #[arg(short, long, default_value = "0.5")]
    pub alpha: f32,

    /// Number of top hits used as answer context
    #[arg(short, long, default_value = "3")]
    pub context: usize,

    /// Embedding dimensionality for the local embedder
    #[arg(short, long, env = "JAVELIN_DIMENSION", default_value = "64")]
    pub dimension: usize,
}

/// Arguments for dataset evaluation
#[derive(Parser, Debug, Clone)]
pub struct EvalArgs {
    /// Path to the corpus file (one document per line)
    #[arg(value_name = "CORPUS_FILE")]
    pub corpus: PathBuf,

    /// Path to the dataset file (JSONL with question/answer objects)
    #[arg(value_name = "DATASET_FILE")]
    pub dataset: PathBuf,

    /// Fusion weight: 1.0 is pure dense, 0.0 is pure sparse
    #[arg(short, long, default_value = "0.5")]
    pub alpha: f32,

    /// Number of top hits used as answer context
    #[arg(short, long, default_value = "3")]
    pub context: usize,

    /// Embedding dimensionality for the local embedder
    #[arg(short, long, env = "JAVELIN_DIMENSION", default_value = "64")]
    pub dimension: usize,

    /// Include per-question outcomes in the output
    #[arg(long)]
    pub show_outcomes: bool,
}

/// Arguments for corpus statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the corpus file (one document per line)
    #[arg(value_name = "CORPUS_FILE")]
    pub corpus: PathBuf,

    /// Embedding dimensionality for the local embedder
    #[arg(short, long, env = "JAVELIN_DIMENSION", default_value = "64")]
    pub dimension: usize,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
