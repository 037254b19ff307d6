//! The built-in catalog and its runtime implementations.
//!
//! Comparison and arithmetic functions are polymorphic over `number`,
//! `currency` and `duration` operands; they operate structurally on the
//! structured values (the operation applies to the amount, the left
//! operand's code/unit is preserved).

use crate::evaluator::{EvalError, Value};
use crate::functions::registry::{Param, Signature, TypeCombination};
use crate::types::{ParamType, TypeTag};

/// The units accepted by the `Duration` constructor, case-sensitive.
pub const DURATION_UNITS: [&str; 4] = ["DAYS", "WEEKS", "MONTHS", "YEARS"];

/// Length required of a `Currency` code; shorter/longer codes are a
/// validation warning, not an error.
pub const CURRENCY_CODE_LEN: usize = 3;

pub(super) fn catalog() -> Vec<Signature> {
    use ParamType::{Any, Exact};
    use TypeTag::*;

    vec![
        Signature {
            name: "GreaterThan",
            params: &[
                Param {
                    name: "left",
                    ty: Exact(Number),
                },
                Param {
                    name: "right",
                    ty: Exact(Number),
                },
            ],
            return_type: Bool,
            combinations: &[
                TypeCombination {
                    params: &[Number, Number],
                    return_type: Bool,
                },
                TypeCombination {
                    params: &[Currency, Currency],
                    return_type: Bool,
                },
                TypeCombination {
                    params: &[Duration, Duration],
                    return_type: Bool,
                },
            ],
            implementation: greater_than,
        },
        Signature {
            name: "LessThan",
            params: &[
                Param {
                    name: "left",
                    ty: Exact(Number),
                },
                Param {
                    name: "right",
                    ty: Exact(Number),
                },
            ],
            return_type: Bool,
            combinations: &[
                TypeCombination {
                    params: &[Number, Number],
                    return_type: Bool,
                },
                TypeCombination {
                    params: &[Currency, Currency],
                    return_type: Bool,
                },
                TypeCombination {
                    params: &[Duration, Duration],
                    return_type: Bool,
                },
            ],
            implementation: less_than,
        },
        Signature {
            name: "Equals",
            params: &[
                Param {
                    name: "left",
                    ty: Any,
                },
                Param {
                    name: "right",
                    ty: Any,
                },
            ],
            return_type: Bool,
            combinations: &[],
            implementation: equals,
        },
        Signature {
            name: "Not",
            params: &[Param {
                name: "value",
                ty: Exact(Bool),
            }],
            return_type: Bool,
            combinations: &[],
            implementation: not,
        },
        Signature {
            name: "Empty",
            params: &[Param {
                name: "value",
                ty: Exact(Str),
            }],
            return_type: Bool,
            combinations: &[],
            implementation: empty,
        },
        Signature {
            name: "Contains",
            params: &[
                Param {
                    name: "values",
                    ty: Exact(Array),
                },
                Param {
                    name: "value",
                    ty: Any,
                },
            ],
            return_type: Bool,
            combinations: &[],
            implementation: contains,
        },
        Signature {
            name: "add",
            params: &[
                Param {
                    name: "left",
                    ty: Exact(Number),
                },
                Param {
                    name: "right",
                    ty: Exact(Number),
                },
            ],
            return_type: Number,
            combinations: &[
                TypeCombination {
                    params: &[Number, Number],
                    return_type: Number,
                },
                TypeCombination {
                    params: &[Currency, Currency],
                    return_type: Currency,
                },
                TypeCombination {
                    params: &[Duration, Duration],
                    return_type: Duration,
                },
            ],
            implementation: add,
        },
        Signature {
            name: "subtract",
            params: &[
                Param {
                    name: "left",
                    ty: Exact(Number),
                },
                Param {
                    name: "right",
                    ty: Exact(Number),
                },
            ],
            return_type: Number,
            combinations: &[
                TypeCombination {
                    params: &[Number, Number],
                    return_type: Number,
                },
                TypeCombination {
                    params: &[Currency, Currency],
                    return_type: Currency,
                },
                TypeCombination {
                    params: &[Duration, Duration],
                    return_type: Duration,
                },
            ],
            implementation: subtract,
        },
        Signature {
            name: "multiply",
            params: &[
                Param {
                    name: "left",
                    ty: Exact(Number),
                },
                Param {
                    name: "right",
                    ty: Exact(Number),
                },
            ],
            return_type: Number,
            combinations: &[
                TypeCombination {
                    params: &[Number, Number],
                    return_type: Number,
                },
                TypeCombination {
                    params: &[Currency, Number],
                    return_type: Currency,
                },
                TypeCombination {
                    params: &[Duration, Number],
                    return_type: Duration,
                },
            ],
            implementation: multiply,
        },
        Signature {
            name: "divide",
            params: &[
                Param {
                    name: "left",
                    ty: Exact(Number),
                },
                Param {
                    name: "right",
                    ty: Exact(Number),
                },
            ],
            return_type: Number,
            combinations: &[
                TypeCombination {
                    params: &[Number, Number],
                    return_type: Number,
                },
                TypeCombination {
                    params: &[Currency, Number],
                    return_type: Currency,
                },
                TypeCombination {
                    params: &[Duration, Number],
                    return_type: Duration,
                },
            ],
            implementation: divide,
        },
        Signature {
            name: "Currency",
            params: &[
                Param {
                    name: "amount",
                    ty: Exact(Number),
                },
                Param {
                    name: "code",
                    ty: Exact(Str),
                },
            ],
            return_type: Currency,
            combinations: &[],
            implementation: currency,
        },
        Signature {
            name: "Duration",
            params: &[
                Param {
                    name: "amount",
                    ty: Exact(Number),
                },
                Param {
                    name: "unit",
                    ty: Exact(Str),
                },
            ],
            return_type: Duration,
            combinations: &[],
            implementation: duration,
        },
    ]
}

// ============================================================================
// Runtime implementations
// ============================================================================

fn arg<'a>(function: &'static str, args: &'a [Value], index: usize) -> Result<&'a Value, EvalError> {
    args.get(index).ok_or(EvalError::MissingArgument {
        function,
        index: index + 1,
    })
}

fn number_arg(function: &'static str, args: &[Value], index: usize) -> Result<f64, EvalError> {
    match arg(function, args, index)? {
        Value::Number(value) => Ok(*value),
        other => Err(EvalError::InvalidOperand {
            function,
            operand: other.type_tag(),
        }),
    }
}

fn string_arg(function: &'static str, args: &[Value], index: usize) -> Result<String, EvalError> {
    match arg(function, args, index)? {
        Value::Str(value) => Ok(value.clone()),
        other => Err(EvalError::InvalidOperand {
            function,
            operand: other.type_tag(),
        }),
    }
}

fn greater_than(args: &[Value]) -> Result<Value, EvalError> {
    compare("GreaterThan", args, |left, right| left > right)
}

fn less_than(args: &[Value]) -> Result<Value, EvalError> {
    compare("LessThan", args, |left, right| left < right)
}

/// Ordering comparison over same-typed operands: the amounts are compared,
/// codes/units are not consulted.
fn compare(
    function: &'static str,
    args: &[Value],
    cmp: fn(f64, f64) -> bool,
) -> Result<Value, EvalError> {
    let left = arg(function, args, 0)?;
    let right = arg(function, args, 1)?;
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => Ok(Value::Bool(cmp(*l, *r))),
        (Value::Currency { amount: l, .. }, Value::Currency { amount: r, .. }) => {
            Ok(Value::Bool(cmp(*l, *r)))
        }
        (Value::Duration { amount: l, .. }, Value::Duration { amount: r, .. }) => {
            Ok(Value::Bool(cmp(*l, *r)))
        }
        (l, r) => Err(EvalError::InvalidOperands {
            function,
            left: l.type_tag(),
            right: r.type_tag(),
        }),
    }
}

/// Deep structural equality over any pair of values.
fn equals(args: &[Value]) -> Result<Value, EvalError> {
    let left = arg("Equals", args, 0)?;
    let right = arg("Equals", args, 1)?;
    Ok(Value::Bool(left == right))
}

fn not(args: &[Value]) -> Result<Value, EvalError> {
    match arg("Not", args, 0)? {
        Value::Bool(value) => Ok(Value::Bool(!value)),
        other => Err(EvalError::InvalidOperand {
            function: "Not",
            operand: other.type_tag(),
        }),
    }
}

fn empty(args: &[Value]) -> Result<Value, EvalError> {
    match arg("Empty", args, 0)? {
        Value::Str(value) => Ok(Value::Bool(value.is_empty())),
        other => Err(EvalError::InvalidOperand {
            function: "Empty",
            operand: other.type_tag(),
        }),
    }
}

fn contains(args: &[Value]) -> Result<Value, EvalError> {
    let haystack = arg("Contains", args, 0)?;
    let needle = arg("Contains", args, 1)?;
    match haystack {
        Value::Array(values) => Ok(Value::Bool(values.contains(needle))),
        other => Err(EvalError::InvalidOperands {
            function: "Contains",
            left: other.type_tag(),
            right: needle.type_tag(),
        }),
    }
}

fn add(args: &[Value]) -> Result<Value, EvalError> {
    same_type_arithmetic("add", args, |left, right| left + right)
}

fn subtract(args: &[Value]) -> Result<Value, EvalError> {
    same_type_arithmetic("subtract", args, |left, right| left - right)
}

/// Addition-style arithmetic: both operands must share a type; the left
/// operand's code/unit is preserved on the result.
fn same_type_arithmetic(
    function: &'static str,
    args: &[Value],
    op: fn(f64, f64) -> f64,
) -> Result<Value, EvalError> {
    let left = arg(function, args, 0)?;
    let right = arg(function, args, 1)?;
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => Ok(Value::Number(op(*l, *r))),
        (Value::Currency { amount: l, code }, Value::Currency { amount: r, .. }) => {
            Ok(Value::Currency {
                amount: op(*l, *r),
                code: code.clone(),
            })
        }
        (Value::Duration { amount: l, unit }, Value::Duration { amount: r, .. }) => {
            Ok(Value::Duration {
                amount: op(*l, *r),
                unit: unit.clone(),
            })
        }
        (l, r) => Err(EvalError::InvalidOperands {
            function,
            left: l.type_tag(),
            right: r.type_tag(),
        }),
    }
}

fn multiply(args: &[Value]) -> Result<Value, EvalError> {
    scalar_arithmetic("multiply", args, |left, right| left * right, false)
}

fn divide(args: &[Value]) -> Result<Value, EvalError> {
    scalar_arithmetic("divide", args, |left, right| left / right, true)
}

/// Scaling arithmetic: the right operand is always a plain number, the
/// left may be a number, currency or duration.
fn scalar_arithmetic(
    function: &'static str,
    args: &[Value],
    op: fn(f64, f64) -> f64,
    fail_on_zero: bool,
) -> Result<Value, EvalError> {
    let left = arg(function, args, 0)?;
    let scalar = match arg(function, args, 1)? {
        Value::Number(value) => *value,
        other => {
            return Err(EvalError::InvalidOperands {
                function,
                left: left.type_tag(),
                right: other.type_tag(),
            });
        }
    };

    if fail_on_zero && scalar == 0.0 {
        return Err(EvalError::DivisionByZero);
    }

    match left {
        Value::Number(l) => Ok(Value::Number(op(*l, scalar))),
        Value::Currency { amount, code } => Ok(Value::Currency {
            amount: op(*amount, scalar),
            code: code.clone(),
        }),
        Value::Duration { amount, unit } => Ok(Value::Duration {
            amount: op(*amount, scalar),
            unit: unit.clone(),
        }),
        other => Err(EvalError::InvalidOperands {
            function,
            left: other.type_tag(),
            right: TypeTag::Number,
        }),
    }
}

/// Construct a currency value. The code is taken as given: a code of the
/// wrong length is a validation warning, never a runtime failure.
fn currency(args: &[Value]) -> Result<Value, EvalError> {
    let amount = number_arg("Currency", args, 0)?;
    let code = string_arg("Currency", args, 1)?;
    Ok(Value::Currency { amount, code })
}

/// Construct a duration value. Unit membership is checked by the
/// validator; evaluation constructs the value as given.
fn duration(args: &[Value]) -> Result<Value, EvalError> {
    let amount = number_arg("Duration", args, 0)?;
    let unit = string_arg("Duration", args, 1)?;
    Ok(Value::Duration { amount, unit })
}
