//! Runtime values.

use core::fmt;
use serde::Serialize;

use crate::types::TypeTag;

/// A concrete runtime value.
///
/// `Currency` and `Duration` are the structured values produced by the
/// constructor functions of the same name: a numeric amount plus a
/// code/unit tag. Structural equality (`PartialEq`) is the deep equality
/// used by the `Equals` and `Contains` built-ins.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    Number(f64),
    Str(String),
    Bool(bool),
    Array(Vec<Value>),
    Currency { amount: f64, code: String },
    Duration { amount: f64, unit: String },
}

impl Value {
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Value::Number(_) => TypeTag::Number,
            Value::Str(_) => TypeTag::Str,
            Value::Bool(_) => TypeTag::Bool,
            Value::Array(_) => TypeTag::Array,
            Value::Currency { .. } => TypeTag::Currency,
            Value::Duration { .. } => TypeTag::Duration,
        }
    }

    /// Truthiness used by the logical operators when an operand is not a
    /// boolean: `false`, `0` and the empty string are falsy, everything
    /// else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Bool(value) => *value,
            Value::Number(value) => *value != 0.0,
            Value::Str(value) => !value.is_empty(),
            Value::Array(_) | Value::Currency { .. } | Value::Duration { .. } => true,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(value) => {
                if value.fract() == 0.0 && value.is_finite() {
                    write!(f, "{:.0}", value)
                } else {
                    write!(f, "{}", value)
                }
            }
            Value::Str(value) => f.write_str(value),
            Value::Bool(value) => write!(f, "{}", value),
            Value::Array(values) => {
                f.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                f.write_str("]")
            }
            Value::Currency { amount, code } => {
                write!(f, "{} {}", Value::Number(*amount), code)
            }
            Value::Duration { amount, unit } => {
                write!(f, "{} {}", Value::Number(*amount), unit)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tags_follow_the_variant() {
        assert_eq!(Value::Number(1.0).type_tag(), TypeTag::Number);
        assert_eq!(Value::Array(vec![]).type_tag(), TypeTag::Array);
        assert_eq!(
            Value::Currency {
                amount: 5.0,
                code: "USD".to_string()
            }
            .type_tag(),
            TypeTag::Currency
        );
    }

    #[test]
    fn truthiness_matches_source_semantics() {
        assert!(!Value::Bool(false).is_truthy());
        assert!(!Value::Number(0.0).is_truthy());
        assert!(!Value::Str(String::new()).is_truthy());
        assert!(Value::Number(-1.0).is_truthy());
        assert!(Value::Str("x".to_string()).is_truthy());
        // An empty array is still truthy.
        assert!(Value::Array(vec![]).is_truthy());
    }

    #[test]
    fn display_is_human_readable() {
        assert_eq!(Value::Number(8.0).to_string(), "8");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(
            Value::Duration {
                amount: 30.0,
                unit: "DAYS".to_string()
            }
            .to_string(),
            "30 DAYS"
        );
        assert_eq!(
            Value::Array(vec![Value::Number(1.0), Value::Bool(true)]).to_string(),
            "[1, true]"
        );
    }
}
