//! Static validation.
//!
//! A single depth-first pre-order walk over the model, checking every call
//! against the registry. Validation is total: it reports findings as
//! diagnostics and never fails, no matter how wrong the document is.

use tracing::debug;

use crate::api::Diagnostic;
use crate::functions::{CURRENCY_CODE_LEN, DURATION_UNITS, FunctionRegistry, Signature};
use crate::parser::{Expr, Model, Span, SpannedExpr};
use crate::types::TypeTag;

/// Validate every expression of the model. Diagnostics come back in
/// pre-order walk order; a finding in one expression never suppresses
/// findings in another.
pub fn validate(model: &Model) -> Vec<Diagnostic> {
    let registry = FunctionRegistry::global();
    let mut diagnostics = Vec::new();
    for expr in &model.expressions {
        check_expr(expr, registry, &mut diagnostics);
    }
    diagnostics
}

fn check_expr(expr: &SpannedExpr, registry: &FunctionRegistry, out: &mut Vec<Diagnostic>) {
    match &expr.expr {
        Expr::Number(_) | Expr::Str(_) | Expr::Bool(_) => {}

        Expr::Array(values) => {
            for value in values {
                check_expr(value, registry, out);
            }
        }

        Expr::Paren(inner) => check_expr(inner, registry, out),

        // No constraint on operand types; non-booleans are coerced at
        // evaluation time.
        Expr::Logical { left, right, .. } => {
            check_expr(left, registry, out);
            check_expr(right, registry, out);
        }

        Expr::Call { name, args } => {
            check_call(name, args, &expr.span, registry, out);
            for arg in args {
                check_expr(arg, registry, out);
            }
        }
    }
}

fn check_call(
    name: &str,
    args: &[SpannedExpr],
    span: &Span,
    registry: &FunctionRegistry,
    out: &mut Vec<Diagnostic>,
) {
    let Some(signature) = registry.resolve(name) else {
        debug!(function = name, "unknown function in call");
        out.push(Diagnostic::error(
            span.clone(),
            format!(
                "Unknown function '{}'. Available functions: {}",
                name,
                registry.joined_names()
            ),
        ));
        return;
    };

    let arity = signature.arity();
    if args.len() < arity {
        out.push(Diagnostic::error(
            span.clone(),
            format!(
                "'{}' requires at least {} arguments, got {}",
                name,
                arity,
                args.len()
            ),
        ));
    } else if args.len() > arity {
        out.push(Diagnostic::error(
            span.clone(),
            format!(
                "'{}' expects at most {} arguments, got {}",
                name,
                arity,
                args.len()
            ),
        ));
    }

    if signature.is_polymorphic() {
        check_combinations(signature, args, out);
    } else {
        check_params(signature, args, out);
    }

    match name {
        "Currency" => check_currency_code(args, out),
        "Duration" => check_duration_unit(args, out),
        _ => {}
    }
}

/// Position-wise check of a simple signature. Arguments whose type cannot
/// be inferred are skipped, not reported.
fn check_params(signature: &Signature, args: &[SpannedExpr], out: &mut Vec<Diagnostic>) {
    for (position, (param, arg)) in signature.params.iter().zip(args).enumerate() {
        let Some(actual) = type_of(arg) else {
            continue;
        };
        if !param.ty.accepts(actual) {
            out.push(argument_type_error(
                signature,
                position,
                arg,
                param.ty.as_str(),
                actual,
            ));
        }
    }
}

/// Narrow the set of candidate combinations position by position. An
/// argument of unknown type narrows nothing; an argument no remaining
/// candidate accepts is an error citing the types that would have been
/// acceptable there.
fn check_combinations(signature: &Signature, args: &[SpannedExpr], out: &mut Vec<Diagnostic>) {
    let mut candidates: Vec<_> = signature.combinations.iter().collect();

    for (position, arg) in args.iter().take(signature.arity()).enumerate() {
        let Some(actual) = type_of(arg) else {
            continue;
        };

        let narrowed: Vec<_> = candidates
            .iter()
            .copied()
            .filter(|combo| combo.params[position] == actual)
            .collect();

        if narrowed.is_empty() {
            let mut acceptable: Vec<&str> = Vec::new();
            for combo in &candidates {
                let tag = combo.params[position].as_str();
                if !acceptable.contains(&tag) {
                    acceptable.push(tag);
                }
            }
            out.push(argument_type_error(
                signature,
                position,
                arg,
                &acceptable.join(" or "),
                actual,
            ));
            return;
        }

        candidates = narrowed;
    }
}

fn argument_type_error(
    signature: &Signature,
    position: usize,
    arg: &SpannedExpr,
    expected: &str,
    actual: TypeTag,
) -> Diagnostic {
    Diagnostic::error(
        arg.span.clone(),
        format!(
            "Argument {} of '{}' expects type '{}', got '{}'",
            position + 1,
            signature.name,
            expected,
            actual
        ),
    )
}

/// Codes are conventionally ISO 4217, three letters. Anything else is
/// suspicious but still evaluates.
fn check_currency_code(args: &[SpannedExpr], out: &mut Vec<Diagnostic>) {
    let Some(arg) = args.get(1) else { return };
    if let Expr::Str(code) = &arg.expr
        && code.chars().count() != CURRENCY_CODE_LEN
    {
        out.push(Diagnostic::warning(
            arg.span.clone(),
            format!(
                "Currency code '{}' should be {} characters",
                code, CURRENCY_CODE_LEN
            ),
        ));
    }
}

fn check_duration_unit(args: &[SpannedExpr], out: &mut Vec<Diagnostic>) {
    let Some(arg) = args.get(1) else { return };
    if let Expr::Str(unit) = &arg.expr
        && !DURATION_UNITS.contains(&unit.as_str())
    {
        out.push(Diagnostic::error(
            arg.span.clone(),
            format!(
                "Invalid duration unit '{}'. Valid units: {}",
                unit,
                DURATION_UNITS.join(", ")
            ),
        ));
    }
}

/// Infer the static type of an expression, if it has one.
///
/// Logical expressions are unconditionally `boolean` regardless of their
/// operands. Calls take the declared return tag, or the matched
/// combination's return tag for polymorphic built-ins; unresolved names
/// and unmatched combinations yield `None`.
pub fn type_of(expr: &SpannedExpr) -> Option<TypeTag> {
    match &expr.expr {
        Expr::Number(_) => Some(TypeTag::Number),
        Expr::Str(_) => Some(TypeTag::Str),
        Expr::Bool(_) => Some(TypeTag::Bool),
        Expr::Array(_) => Some(TypeTag::Array),
        Expr::Paren(inner) => type_of(inner),
        Expr::Logical { .. } => Some(TypeTag::Bool),
        Expr::Call { name, args } => {
            let signature = FunctionRegistry::global().resolve(name)?;
            if !signature.is_polymorphic() {
                return Some(signature.return_type);
            }
            signature
                .combinations
                .iter()
                .find(|combo| {
                    combo.params.len() == args.len()
                        && args.iter().zip(combo.params).all(|(arg, expected)| {
                            type_of(arg).is_none_or(|actual| actual == *expected)
                        })
                })
                .map(|combo| combo.return_type)
        }
    }
}
