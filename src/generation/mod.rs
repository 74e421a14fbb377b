//! Answer generation providers: the external (question, context) to answer
//! boundary.
//!
//! Generation is an opaque capability behind the [`AnswerGenerator`] trait;
//! the engine only supplies a context string built from retrieved documents
//! in fused-rank order. Provider failures propagate to the caller.

pub mod answer_generator;
pub mod extractive;

pub use answer_generator::AnswerGenerator;
pub use extractive::ExtractiveGenerator;
