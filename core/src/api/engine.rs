//! The embeddable engine facade.

use tracing::debug;

use crate::api::Diagnostic;
use crate::evaluator::{self, EvaluationResult};
use crate::functions::{FunctionRegistry, Signature};
use crate::parser::{self, Model, ParseOutcome};
use crate::validator;

/// An engine instance.
///
/// The engine is a thin handle over the shared function registry; it is
/// cheap to construct and holds no mutable state, so one instance can be
/// shared freely or new ones created per call site.
#[derive(Debug, Clone, Copy)]
pub struct Engine {
    registry: &'static FunctionRegistry,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            registry: FunctionRegistry::global(),
        }
    }

    /// Parse a document into a model plus any syntax errors.
    ///
    /// Recovery is per top-level expression: a malformed expression is
    /// reported and skipped, and the expressions around it still land in
    /// the model.
    pub fn parse(&self, source: &str) -> ParseOutcome {
        let outcome = parser::parse(source);
        debug!(
            expressions = outcome.model.expressions.len(),
            errors = outcome.errors.len(),
            "parsed document"
        );
        outcome
    }

    /// Validate a model against the registry. Never raises; all findings
    /// come back as diagnostics.
    pub fn validate(&self, model: &Model) -> Vec<Diagnostic> {
        validator::validate(model)
    }

    /// Evaluate every top-level expression of the model, in order. Each
    /// expression succeeds or fails on its own.
    pub fn evaluate(&self, model: &Model) -> Vec<EvaluationResult> {
        evaluator::evaluate(model)
    }

    /// Parse and validate in one step. Syntax errors come first, then
    /// validation findings for whatever did parse.
    pub fn check(&self, source: &str) -> (Model, Vec<Diagnostic>) {
        let outcome = self.parse(source);
        let mut diagnostics: Vec<Diagnostic> = outcome
            .errors
            .iter()
            .map(|error| error.to_diagnostic())
            .collect();
        diagnostics.extend(validator::validate(&outcome.model));
        (outcome.model, diagnostics)
    }

    /// Names of all registered built-ins, in catalog order.
    pub fn function_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    /// Signature of one built-in, if registered.
    pub fn signature(&self, name: &str) -> Option<&'static Signature> {
        self.registry.resolve(name)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
