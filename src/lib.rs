//! Specter - an embeddable expression-language engine.
//!
//! This crate is the user-facing facade: it re-exports the engine from
//! `specter-core` and adds terminal-friendly diagnostic rendering on top.
//!
//! ```
//! use specter::{Engine, Value};
//!
//! let engine = Engine::new();
//! let outcome = engine.parse("add(5, 3)");
//! assert!(outcome.errors.is_empty());
//!
//! let diagnostics = engine.validate(&outcome.model);
//! assert!(diagnostics.is_empty());
//!
//! let results = engine.evaluate(&outcome.model);
//! assert_eq!(results[0].value, Some(Value::Number(8.0)));
//! ```

pub use specter_core::api::{Diagnostic, Engine, Severity, evaluate, parse, validate};
pub use specter_core::evaluator::{EvalError, EvaluationResult, Value};
pub use specter_core::functions::{FunctionRegistry, Signature};
pub use specter_core::parser::{
    Expr, LogicalOp, Model, ParseOutcome, Span, SpannedExpr, SyntaxError, SyntaxErrorKind,
};
pub use specter_core::types::{ParamType, TypeTag};

mod error_renderer;

pub use error_renderer::{
    render_diagnostics, render_diagnostics_to, render_diagnostics_to_string,
    render_diagnostics_to_string_no_color,
};
