mod builtins;
mod registry;

pub use builtins::{CURRENCY_CODE_LEN, DURATION_UNITS};
pub use registry::{BuiltinFn, FunctionRegistry, Param, Signature, TypeCombination};
