//! The Specter AST.
//!
//! The parser produces an immutable [`Model`]: an ordered sequence of
//! top-level expressions (insertion order is source order and is
//! significant for result reporting). Every node kind is a variant of the
//! closed [`Expr`] sum type, so the validator and evaluator match
//! exhaustively and adding a node kind is a compile-time-checked change in
//! all three passes.

use serde::Serialize;

use crate::parser::Span;

/// An ordered sequence of top-level expressions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Model {
    pub expressions: Vec<SpannedExpr>,
}

/// An expression annotated with its source range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpannedExpr {
    pub expr: Expr,
    pub span: Span,
}

/// Logical connective. Both share a single precedence level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalOp::And => "AND",
            LogicalOp::Or => "OR",
        }
    }
}

/// A Specter expression.
///
/// `Call.name` is an opaque identifier at this level: whether it resolves
/// in the function registry is a validation/evaluation concern, never a
/// parse error. Array elements need not share a type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    Logical {
        op: LogicalOp,
        left: Box<SpannedExpr>,
        right: Box<SpannedExpr>,
    },
    Call {
        name: String,
        args: Vec<SpannedExpr>,
    },
    Paren(Box<SpannedExpr>),
    Number(f64),
    Str(String),
    Bool(bool),
    Array(Vec<SpannedExpr>),
}
