//! Runtime evaluation errors.
//!
//! These are errors that can occur while computing a value. They are
//! always scoped to the single top-level expression being evaluated: the
//! driver in [`super::eval`] converts them into a failed
//! [`super::EvaluationResult`] and moves on to the next expression.

use thiserror::Error;

use crate::types::TypeTag;

/// Runtime evaluation error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// The call named a function absent from the registry.
    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    /// `divide` with a right operand of exactly zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// A built-in received operand types outside its declared
    /// combinations. The validator flags this statically where it can, but
    /// nothing forces callers to validate before evaluating.
    #[error("'{function}' cannot operate on '{left}' and '{right}'")]
    InvalidOperands {
        function: &'static str,
        left: TypeTag,
        right: TypeTag,
    },

    /// Single-operand variant of [`EvalError::InvalidOperands`].
    #[error("'{function}' cannot operate on '{operand}'")]
    InvalidOperand {
        function: &'static str,
        operand: TypeTag,
    },

    /// The call supplied fewer arguments than the built-in consumes.
    #[error("'{function}' is missing argument {index}")]
    MissingArgument {
        function: &'static str,
        index: usize,
    },
}
