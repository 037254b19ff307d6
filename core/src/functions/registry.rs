//! The function registry.
//!
//! One canonical, immutable catalog of built-in signatures, constructed on
//! first use and shared by reference between the validator, the evaluator
//! and the documentation/hover consumers. Nothing re-registers built-ins
//! per call.

use lazy_static::lazy_static;

use crate::evaluator::{EvalError, Value};
use crate::functions::builtins;
use crate::types::{ParamType, TypeTag};

/// Runtime implementation of a built-in.
pub type BuiltinFn = fn(&[Value]) -> Result<Value, EvalError>;

/// A named, typed function parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    pub name: &'static str,
    pub ty: ParamType,
}

/// One allowed `(parameter types) -> return type` mapping for a
/// polymorphic built-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeCombination {
    pub params: &'static [TypeTag],
    pub return_type: TypeTag,
}

/// Signature of a built-in function.
///
/// A signature with an empty `combinations` slice is simple: arguments are
/// checked position-wise against `params`. A non-empty slice makes it
/// polymorphic: arguments must match one of the combinations, and the
/// expression's type is that combination's return type.
#[derive(Debug, Clone, Copy)]
pub struct Signature {
    pub name: &'static str,
    pub params: &'static [Param],
    pub return_type: TypeTag,
    pub combinations: &'static [TypeCombination],
    pub(crate) implementation: BuiltinFn,
}

impl Signature {
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    pub fn is_polymorphic(&self) -> bool {
        !self.combinations.is_empty()
    }

    /// Human-readable signature lines, one per accepted shape. Used by
    /// hover/documentation consumers.
    pub fn describe(&self) -> String {
        if self.is_polymorphic() {
            self.combinations
                .iter()
                .map(|combo| {
                    let params = combo
                        .params
                        .iter()
                        .map(|ty| ty.as_str())
                        .collect::<Vec<_>>()
                        .join(", ");
                    format!("{}({}) -> {}", self.name, params, combo.return_type)
                })
                .collect::<Vec<_>>()
                .join("\n")
        } else {
            let params = self
                .params
                .iter()
                .map(|param| format!("{}: {}", param.name, param.ty))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}({}) -> {}", self.name, params, self.return_type)
        }
    }

    pub(crate) fn invoke(&self, args: &[Value]) -> Result<Value, EvalError> {
        (self.implementation)(args)
    }
}

/// The static catalog of built-in functions.
#[derive(Debug)]
pub struct FunctionRegistry {
    signatures: Vec<Signature>,
}

lazy_static! {
    static ref GLOBAL: FunctionRegistry = FunctionRegistry {
        signatures: builtins::catalog(),
    };
}

impl FunctionRegistry {
    /// The shared registry. Built once; read-only thereafter.
    pub fn global() -> &'static FunctionRegistry {
        &GLOBAL
    }

    pub fn resolve(&self, name: &str) -> Option<&Signature> {
        self.signatures.iter().find(|sig| sig.name == name)
    }

    /// All registered names, in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.signatures.iter().map(|sig| sig.name)
    }

    /// Comma-joined names, as cited by the unknown-function diagnostic.
    pub fn joined_names(&self) -> String {
        self.names().collect::<Vec<_>>().join(", ")
    }
}
