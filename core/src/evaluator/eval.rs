//! Tree-walking evaluation.

use serde::Serialize;
use tracing::debug;

use crate::evaluator::{EvalError, Value};
use crate::functions::FunctionRegistry;
use crate::parser::{Expr, LogicalOp, Model, SpannedExpr};
use crate::types::TypeTag;

/// Outcome of evaluating one top-level expression.
///
/// Failures carry `type_tag: error`, no value, and a message; they never
/// escape as a fault to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    pub value: Option<Value>,
    pub type_tag: TypeTag,
    pub success: bool,
    pub error: Option<String>,
}

impl EvaluationResult {
    pub(crate) fn ok(value: Value) -> Self {
        Self {
            type_tag: value.type_tag(),
            value: Some(value),
            success: true,
            error: None,
        }
    }

    pub(crate) fn fail(error: EvalError) -> Self {
        Self {
            value: None,
            type_tag: TypeTag::Error,
            success: false,
            error: Some(error.to_string()),
        }
    }
}

/// Evaluate every top-level expression of the model, in source order.
///
/// Each expression is evaluated independently: a failure is caught at the
/// top-level-expression boundary and converted into a failed result, and
/// evaluation continues with the next expression.
pub fn evaluate(model: &Model) -> Vec<EvaluationResult> {
    let registry = FunctionRegistry::global();

    model
        .expressions
        .iter()
        .map(|expr| match eval_expr(expr, registry) {
            Ok(value) => EvaluationResult::ok(value),
            Err(error) => {
                debug!(%error, span = ?expr.span, "expression evaluation failed");
                EvaluationResult::fail(error)
            }
        })
        .collect()
}

fn eval_expr(expr: &SpannedExpr, registry: &FunctionRegistry) -> Result<Value, EvalError> {
    match &expr.expr {
        Expr::Number(value) => Ok(Value::Number(*value)),
        Expr::Str(value) => Ok(Value::Str(value.clone())),
        Expr::Bool(value) => Ok(Value::Bool(*value)),

        Expr::Array(values) => Ok(Value::Array(
            values
                .iter()
                .map(|value| eval_expr(value, registry))
                .collect::<Result<Vec<_>, _>>()?,
        )),

        Expr::Paren(inner) => eval_expr(inner, registry),

        Expr::Logical { op, left, right } => {
            // Both operands are always evaluated: an error in either
            // propagates (left first), but a boolean outcome never
            // short-circuits the right operand.
            let left = eval_expr(left, registry)?;
            let right = eval_expr(right, registry)?;
            let value = match op {
                LogicalOp::And => left.is_truthy() && right.is_truthy(),
                LogicalOp::Or => left.is_truthy() || right.is_truthy(),
            };
            Ok(Value::Bool(value))
        }

        Expr::Call { name, args } => {
            // Arguments are evaluated before the name is resolved; the
            // first failing argument aborts the call with its error.
            let mut values = Vec::with_capacity(args.len());
            for arg in args {
                values.push(eval_expr(arg, registry)?);
            }

            let signature = registry
                .resolve(name)
                .ok_or_else(|| EvalError::UnknownFunction(name.clone()))?;
            signature.invoke(&values)
        }
    }
}
