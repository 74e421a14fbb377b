//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{JavelinArgs, OutputFormat};
use crate::engine::EngineStats;
use crate::error::Result;
use crate::eval::EvalReport;
use crate::types::SearchHit;

/// Result structure for the search command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchCommandResult {
    pub query: String,
    pub total_hits: usize,
    pub duration_ms: u64,
    pub hits: Vec<SearchHit>,
}

/// Result structure for the ask command.
#[derive(Debug, Serialize, Deserialize)]
pub struct AskCommandResult {
    pub question: String,
    pub answer: String,
    pub duration_ms: u64,
    pub hits: Vec<SearchHit>,
}

/// Result structure for the eval command.
#[derive(Debug, Serialize, Deserialize)]
pub struct EvalCommandResult {
    pub duration_ms: u64,
    #[serde(flatten)]
    pub report: EvalReport,
    /// Whether per-question outcomes should be rendered.
    #[serde(skip)]
    pub show_outcomes: bool,
}

/// Result structure for the stats command.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsCommandResult {
    pub corpus: String,
    #[serde(flatten)]
    pub stats: EngineStats,
}

/// A command result that knows how to render itself for humans.
pub trait CommandReport: Serialize {
    /// Print the human-readable form to stdout.
    fn print_human(&self, args: &JavelinArgs);
}

/// Output a result in the format selected on the command line.
pub fn output_result<T: CommandReport>(result: &T, args: &JavelinArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            result.print_human(args);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

fn output_json<T: Serialize>(result: &T, args: &JavelinArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

impl CommandReport for SearchCommandResult {
    fn print_human(&self, args: &JavelinArgs) {
        if args.verbosity() > 0 {
            println!(
                "Found {} result(s) for {:?} in {}ms",
                self.total_hits, self.query, self.duration_ms
            );
            println!();
        }

        for (rank, hit) in self.hits.iter().enumerate() {
            println!(
                "{:>3}. [doc {}] (score {:.4}) {}",
                rank + 1,
                hit.doc_id,
                hit.score,
                hit.text
            );
        }

        if self.hits.is_empty() {
            println!("No results.");
        }
    }
}

impl CommandReport for AskCommandResult {
    fn print_human(&self, args: &JavelinArgs) {
        if self.answer.is_empty() {
            println!("No answer found.");
        } else {
            println!("{}", self.answer);
        }

        if args.verbosity() > 1 {
            println!();
            println!("Context ({} hit(s), {}ms):", self.hits.len(), self.duration_ms);
            for hit in &self.hits {
                println!("  [doc {}] (score {:.4}) {}", hit.doc_id, hit.score, hit.text);
            }
        }
    }
}

impl CommandReport for EvalCommandResult {
    fn print_human(&self, args: &JavelinArgs) {
        println!(
            "Accuracy: {:.1}% ({}/{}) in {}ms",
            self.report.accuracy * 100.0,
            self.report.correct,
            self.report.total,
            self.duration_ms
        );

        if self.show_outcomes || args.verbosity() > 1 {
            println!();
            for outcome in &self.report.outcomes {
                let mark = if outcome.correct { "ok " } else { "FAIL" };
                println!(
                    "[{mark}] {:?} expected={:?} generated={:?}",
                    outcome.question, outcome.expected, outcome.generated
                );
            }
        }
    }
}

impl CommandReport for StatsCommandResult {
    fn print_human(&self, _args: &JavelinArgs) {
        println!("Corpus: {}", self.corpus);
        match &self.stats.index {
            Some(index) => {
                println!("Documents:  {}", index.documents);
                println!("Vocabulary: {}", index.vocabulary);
                println!("Dimension:  {}", index.dimension);
            }
            None => println!("No documents indexed."),
        }
    }
}
