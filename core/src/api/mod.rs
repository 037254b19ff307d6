//! Public entry points.
//!
//! [`Engine`] is the handle embedders hold; the free functions below are
//! conveniences over a default engine for one-shot use.

mod engine;
mod error;

pub use engine::Engine;
pub use error::{Diagnostic, Severity};

use crate::evaluator::EvaluationResult;
use crate::parser::{Model, ParseOutcome};

/// Parse a document with a default engine.
pub fn parse(source: &str) -> ParseOutcome {
    Engine::new().parse(source)
}

/// Validate a model with a default engine.
pub fn validate(model: &Model) -> Vec<Diagnostic> {
    Engine::new().validate(model)
}

/// Evaluate a model with a default engine.
pub fn evaluate(model: &Model) -> Vec<EvaluationResult> {
    Engine::new().evaluate(model)
}
