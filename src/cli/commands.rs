//! Command implementations for the Javelin CLI.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use tokio::runtime::Runtime;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::embedding::HashEmbedder;
use crate::engine::{EngineConfig, RagEngine};
use crate::error::Result;
use crate::eval::{self, QaPair};
use crate::generation::ExtractiveGenerator;

/// Execute a CLI command.
pub fn execute_command(args: JavelinArgs) -> Result<()> {
    let runtime = Runtime::new()?;
    match &args.command {
        Command::Search(search_args) => runtime.block_on(search(search_args.clone(), &args)),
        Command::Ask(ask_args) => runtime.block_on(ask(ask_args.clone(), &args)),
        Command::Eval(eval_args) => runtime.block_on(evaluate(eval_args.clone(), &args)),
        Command::Stats(stats_args) => runtime.block_on(stats(stats_args.clone(), &args)),
    }
}

/// Load a corpus file: one document per line, blank lines skipped.
fn load_corpus(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut documents = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            documents.push(line);
        }
    }
    Ok(documents)
}

/// Load an evaluation dataset: JSONL with one question/answer object per line.
fn load_dataset(path: &Path) -> Result<Vec<QaPair>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut pairs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        pairs.push(serde_json::from_str::<QaPair>(&line)?);
    }
    Ok(pairs)
}

/// Build an engine over the corpus file with the local providers.
async fn build_engine(
    corpus_path: &Path,
    config: EngineConfig,
    dimension: usize,
    cli_args: &JavelinArgs,
) -> Result<RagEngine> {
    let corpus = load_corpus(corpus_path)?;
    if cli_args.verbosity() > 1 {
        println!("Indexing {} document(s) from {}", corpus.len(), corpus_path.display());
    }

    let engine = RagEngine::new(
        config,
        Arc::new(HashEmbedder::new(dimension)),
        Arc::new(ExtractiveGenerator::new()),
    )?;
    engine.index_corpus(corpus).await?;
    Ok(engine)
}

/// Run a hybrid search over the corpus.
async fn search(args: SearchArgs, cli_args: &JavelinArgs) -> Result<()> {
    let config = EngineConfig {
        alpha: args.alpha,
        top_k: args.top_k,
        ..Default::default()
    };
    let engine = build_engine(&args.corpus, config, args.dimension, cli_args).await?;

    let start = Instant::now();
    let hits = engine.search(&args.query).await?;
    let duration_ms = start.elapsed().as_millis() as u64;

    output_result(
        &SearchCommandResult {
            query: args.query,
            total_hits: hits.len(),
            duration_ms,
            hits,
        },
        cli_args,
    )
}

/// Answer a question over the corpus.
async fn ask(args: AskArgs, cli_args: &JavelinArgs) -> Result<()> {
    let config = EngineConfig {
        alpha: args.alpha,
        context_top_k: args.context,
        ..Default::default()
    };
    let engine = build_engine(&args.corpus, config, args.dimension, cli_args).await?;

    let start = Instant::now();
    let answer = engine.ask(&args.question).await?;
    let duration_ms = start.elapsed().as_millis() as u64;

    output_result(
        &AskCommandResult {
            question: args.question,
            answer: answer.text,
            duration_ms,
            hits: answer.hits,
        },
        cli_args,
    )
}

/// Evaluate question answering over a labeled dataset.
async fn evaluate(args: EvalArgs, cli_args: &JavelinArgs) -> Result<()> {
    let config = EngineConfig {
        alpha: args.alpha,
        context_top_k: args.context,
        ..Default::default()
    };
    let engine = build_engine(&args.corpus, config, args.dimension, cli_args).await?;
    let dataset = load_dataset(&args.dataset)?;

    if cli_args.verbosity() > 1 {
        println!("Evaluating {} question(s)", dataset.len());
    }

    let start = Instant::now();
    let report = eval::evaluate(&engine, &dataset).await?;
    let duration_ms = start.elapsed().as_millis() as u64;

    output_result(
        &EvalCommandResult {
            duration_ms,
            report,
            show_outcomes: args.show_outcomes,
        },
        cli_args,
    )
}

/// Show corpus and index statistics.
async fn stats(args: StatsArgs, cli_args: &JavelinArgs) -> Result<()> {
    let engine = build_engine(
        &args.corpus,
        EngineConfig::default(),
        args.dimension,
        cli_args,
    )
    .await?;

    output_result(
        &StatsCommandResult {
            corpus: args.corpus.display().to_string(),
            stats: engine.stats(),
        },
        cli_args,
    )
}
