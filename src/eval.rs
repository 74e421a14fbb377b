//! Evaluation harness for the question-answering pipeline.
//!
//! Runs a dataset of (question, reference answer) pairs through an engine
//! and scores each generated answer by normalized token containment: a
//! generated answer counts as correct when the reference's tokens all occur
//! in it, or the other way around for terse generated answers.

use std::collections::HashSet;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::engine::RagEngine;
use crate::error::Result;

/// A labeled evaluation example.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaPair {
    /// The question to ask.
    pub question: String,
    /// The reference answer.
    pub answer: String,
}

/// The outcome of one evaluated question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalOutcome {
    /// The question asked.
    pub question: String,
    /// The reference answer from the dataset.
    pub expected: String,
    /// The answer the engine generated.
    pub generated: String,
    /// Whether the generated answer matched the reference.
    pub correct: bool,
}

/// Aggregate results over an evaluation dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalReport {
    /// Number of evaluated questions.
    pub total: usize,
    /// Number of correct answers.
    pub correct: usize,
    /// Fraction of correct answers, 0.0 for an empty dataset.
    pub accuracy: f64,
    /// Per-question outcomes in dataset order.
    pub outcomes: Vec<EvalOutcome>,
}

fn normalized_tokens(text: &str) -> HashSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}

fn answers_match(expected: &str, generated: &str) -> bool {
    let expected = normalized_tokens(expected);
    let generated = normalized_tokens(generated);

    if expected.is_empty() || generated.is_empty() {
        return expected == generated;
    }

    expected.is_subset(&generated) || generated.is_subset(&expected)
}

/// Evaluate an engine over a labeled dataset.
///
/// Questions are asked in dataset order against the engine's current index;
/// the report preserves that order.
pub async fn evaluate(engine: &RagEngine, dataset: &[QaPair]) -> Result<EvalReport> {
    let mut outcomes = Vec::with_capacity(dataset.len());
    let mut correct = 0;

    for pair in dataset {
        let answer = engine.ask(&pair.question).await?;
        let matched = answers_match(&pair.answer, &answer.text);
        if matched {
            correct += 1;
        } else {
            debug!(
                "mismatch for {:?}: expected {:?}, generated {:?}",
                pair.question, pair.answer, answer.text
            );
        }

        outcomes.push(EvalOutcome {
            question: pair.question.clone(),
            expected: pair.answer.clone(),
            generated: answer.text,
            correct: matched,
        });
    }

    let total = dataset.len();
    Ok(EvalReport {
        total,
        correct,
        accuracy: if total > 0 {
            correct as f64 / total as f64
        } else {
            0.0
        },
        outcomes,
    })
}
