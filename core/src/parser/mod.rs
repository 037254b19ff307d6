mod ast;
pub mod error;
pub mod parser;
mod syntax;

pub use ast::{Expr, LogicalOp, Model, SpannedExpr};
pub use error::{SyntaxError, SyntaxErrorKind};
pub use parser::{ParseOutcome, Rule, SpecterParser, parse};
pub use syntax::Span;
