//! Specter - an embeddable expression-language engine.
//!
//! The engine exposes three independent passes over the same document:
//!
//! 1. [`api::parse`] - source text to an ordered [`parser::Model`] of
//!    top-level expressions, plus any syntax errors.
//! 2. [`api::validate`] - semantic walk producing an ordered list of
//!    [`api::Diagnostic`]s; it never fails.
//! 3. [`api::evaluate`] - tree-walking interpretation producing one
//!    [`evaluator::EvaluationResult`] per top-level expression, with
//!    failures isolated at the expression boundary.
//!
//! Validator and evaluator share a single read-only
//! [`functions::FunctionRegistry`], built once for the whole process.

pub mod api;
pub mod evaluator;
pub mod functions;
pub mod parser;
pub mod types;
pub mod validator;
