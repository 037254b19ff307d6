mod error;
pub mod eval;
mod value;

pub use error::EvalError;
pub use eval::{EvaluationResult, evaluate};
pub use value::Value;
