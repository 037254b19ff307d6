use serde::Serialize;
use thiserror::Error;

use crate::api::Diagnostic;
use crate::parser::{Rule, Span};

/// A lexical or syntactic error with an approximate source range.
///
/// One syntax error never suppresses errors found at later top-level
/// expressions; the parser resynchronizes and keeps going.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("{kind}")]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub span: Span,
}

/// Specific kinds of syntax errors.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
pub enum SyntaxErrorKind {
    /// Unexpected token
    #[error("Expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },
    /// Invalid number literal
    #[error("Invalid number literal '{text}'")]
    InvalidNumber { text: String },
    /// Other parse errors (catch-all for Pest errors we don't specifically handle)
    #[error("{message}")]
    Other { message: String },
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Convert to a Diagnostic for the API boundary.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.span.clone(), self.kind.to_string())
    }
}

/// Convert a Pest error into a human-readable SyntaxError.
///
/// `offset` is the document position of the chunk the error was raised in;
/// Pest locations are chunk-relative and get mapped back to document
/// coordinates here.
pub(crate) fn convert_pest_error(err: pest::error::Error<Rule>, offset: usize) -> SyntaxError {
    use pest::error::ErrorVariant;

    let span = match err.location {
        pest::error::InputLocation::Pos(pos) => Span(pos..pos),
        pest::error::InputLocation::Span((start, end)) => Span(start..end),
    }
    .shifted(offset);

    let kind = match err.variant {
        ErrorVariant::ParsingError {
            positives,
            negatives,
        } => SyntaxErrorKind::UnexpectedToken {
            expected: format_expected_rules(&positives),
            found: format_found_rules(&negatives),
        },
        ErrorVariant::CustomError { message } => SyntaxErrorKind::Other { message },
    };

    SyntaxError::new(kind, span)
}

/// Format expected rules in a human-readable way.
fn format_expected_rules(rules: &[Rule]) -> String {
    if rules.is_empty() {
        return "something else".to_string();
    }

    // Group related rules into higher-level concepts
    let mut concepts: Vec<&'static str> = Vec::new();
    fn push(concepts: &mut Vec<&'static str>, concept: &'static str) {
        if !concepts.contains(&concept) {
            concepts.push(concept);
        }
    }

    for rule in rules {
        match rule {
            Rule::number | Rule::string | Rule::boolean | Rule::array => {
                push(&mut concepts, "a literal")
            }
            Rule::grouped | Rule::function_call | Rule::expression | Rule::entry => {
                push(&mut concepts, "an expression")
            }
            Rule::ident => push(&mut concepts, "a function name"),
            Rule::and_op | Rule::or_op => push(&mut concepts, "'AND' or 'OR'"),
            _ => push(&mut concepts, "an expression"),
        }
    }

    match concepts.len() {
        0 => "something else".to_string(),
        1 => concepts[0].to_string(),
        _ => {
            let last = concepts.pop().unwrap_or("something else");
            format!("{} or {}", concepts.join(", "), last)
        }
    }
}

/// Format found rules in a human-readable way.
fn format_found_rules(rules: &[Rule]) -> String {
    let Some(rule) = rules.first() else {
        return "unexpected token".to_string();
    };

    match rule {
        Rule::ident => "identifier".to_string(),
        Rule::number => "number".to_string(),
        Rule::boolean => "boolean".to_string(),
        Rule::string => "string".to_string(),
        Rule::array => "array".to_string(),
        Rule::grouped => "parenthesized expression".to_string(),
        Rule::function_call => "function call".to_string(),
        Rule::and_op | Rule::or_op => "logical operator".to_string(),
        other => format!("{:?}", other),
    }
}
