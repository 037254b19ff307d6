//! The Specter type-tag domain.
//!
//! Types in Specter are flat tags: there are no parametrized or inferred
//! type variables. `currency` and `duration` tag structured runtime values
//! produced by the `Currency`/`Duration` constructor functions; `error` tags
//! the result of a failed evaluation.

use core::fmt;
use serde::Serialize;

/// Semantic type of an expression or runtime value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TypeTag {
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "string")]
    Str,
    #[serde(rename = "boolean")]
    Bool,
    #[serde(rename = "array")]
    Array,
    #[serde(rename = "currency")]
    Currency,
    #[serde(rename = "duration")]
    Duration,
    #[serde(rename = "error")]
    Error,
}

impl TypeTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Number => "number",
            TypeTag::Str => "string",
            TypeTag::Bool => "boolean",
            TypeTag::Array => "array",
            TypeTag::Currency => "currency",
            TypeTag::Duration => "duration",
            TypeTag::Error => "error",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared type of a function parameter.
///
/// `Any` accepts every argument type; it is how `Equals` and the needle
/// parameter of `Contains` are declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    Any,
    Exact(TypeTag),
}

impl ParamType {
    pub fn accepts(&self, tag: TypeTag) -> bool {
        match self {
            ParamType::Any => true,
            ParamType::Exact(expected) => *expected == tag,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::Any => "any",
            ParamType::Exact(tag) => tag.as_str(),
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
