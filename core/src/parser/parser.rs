use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;
use serde::Serialize;

use crate::parser::ast::{Expr, LogicalOp, Model, SpannedExpr};
use crate::parser::error::{SyntaxError, SyntaxErrorKind, convert_pest_error};
use crate::parser::syntax::Span;

#[derive(Parser)]
#[grammar = "parser/expression.pest"]
pub struct SpecterParser;

/// Result of parsing a document: the model that could be built plus every
/// syntax error encountered. Both are always populated; a malformed
/// expression contributes an error while the remaining expressions still
/// contribute to the model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseOutcome {
    pub model: Model,
    pub errors: Vec<SyntaxError>,
}

/// Parse a document into an ordered model of top-level expressions.
///
/// Expressions are consumed one at a time. When one fails to parse, the
/// error is recorded and parsing resynchronizes at the next line, so later
/// top-level expressions are still reported.
pub fn parse(source: &str) -> ParseOutcome {
    let mut expressions = Vec::new();
    let mut errors = Vec::new();
    let mut offset = 0usize;

    loop {
        offset += leading_trivia(&source[offset..]);
        if offset >= source.len() {
            break;
        }
        let rest = &source[offset..];

        match SpecterParser::parse(Rule::entry, rest) {
            Ok(mut pairs) => {
                let Some(entry) = pairs.next() else { break };
                let Some(expr_pair) = entry.into_inner().next() else {
                    break;
                };
                let consumed = expr_pair.as_span().end();

                match build_expr(expr_pair, offset) {
                    Ok(expr) => expressions.push(expr),
                    Err(err) => errors.push(err),
                }

                if consumed == 0 {
                    // An expression always consumes input; guard against
                    // looping in place all the same.
                    match advance_past_line(rest) {
                        Some(skip) => offset += skip,
                        None => break,
                    }
                } else {
                    offset += consumed;
                }
            }
            Err(err) => {
                errors.push(convert_pest_error(err, offset));
                match advance_past_line(rest) {
                    Some(skip) => offset += skip,
                    None => break,
                }
            }
        }
    }

    ParseOutcome {
        model: Model { expressions },
        errors,
    }
}

/// Distance to just past the next newline, for error resynchronization.
fn advance_past_line(rest: &str) -> Option<usize> {
    rest.find('\n').map(|pos| pos + 1)
}

/// Byte length of leading whitespace and comments, mirroring the grammar's
/// trivia rules. Each chunk handed to the parser starts at real content,
/// which keeps error recovery line-accurate.
fn leading_trivia(source: &str) -> usize {
    let mut pos = 0;
    loop {
        let rest = &source[pos..];
        let trimmed = rest.trim_start();
        pos += rest.len() - trimmed.len();
        if let Some(after) = trimmed.strip_prefix("//") {
            match after.find('\n') {
                Some(end) => pos += 2 + end + 1,
                None => return source.len(),
            }
        } else if let Some(after) = trimmed.strip_prefix("/*") {
            match after.find("*/") {
                Some(end) => pos += 2 + end + 2,
                // Unterminated: stop here and let the parser report it.
                None => return pos,
            }
        } else {
            return pos;
        }
    }
}

fn span_of(pair: &Pair<Rule>, offset: usize) -> Span {
    let span = pair.as_span();
    Span(span.start() + offset..span.end() + offset)
}

fn malformed(message: impl Into<String>, span: Span) -> SyntaxError {
    SyntaxError::new(
        SyntaxErrorKind::Other {
            message: message.into(),
        },
        span,
    )
}

fn build_expr(pair: Pair<Rule>, offset: usize) -> Result<SpannedExpr, SyntaxError> {
    match pair.as_rule() {
        Rule::expression => {
            let span = span_of(&pair, offset);
            let mut inner = pair.into_inner();
            let first = inner
                .next()
                .ok_or_else(|| malformed("empty expression", span.clone()))?;
            let mut node = build_expr(first, offset)?;

            // Left-associative fold over the flat AND/OR chain.
            while let Some(op_pair) = inner.next() {
                let op = match op_pair.as_rule() {
                    Rule::and_op => LogicalOp::And,
                    Rule::or_op => LogicalOp::Or,
                    rule => {
                        return Err(malformed(
                            format!("unexpected operator rule: {:?}", rule),
                            span_of(&op_pair, offset),
                        ));
                    }
                };
                let rhs_pair = inner
                    .next()
                    .ok_or_else(|| malformed("missing right operand", span_of(&op_pair, offset)))?;
                let right = build_expr(rhs_pair, offset)?;
                let span = node.span.merge(&right.span);
                node = SpannedExpr {
                    expr: Expr::Logical {
                        op,
                        left: Box::new(node),
                        right: Box::new(right),
                    },
                    span,
                };
            }

            Ok(node)
        }

        Rule::grouped => {
            let span = span_of(&pair, offset);
            let inner = pair
                .into_inner()
                .next()
                .ok_or_else(|| malformed("empty parenthesized expression", span.clone()))?;
            Ok(SpannedExpr {
                expr: Expr::Paren(Box::new(build_expr(inner, offset)?)),
                span,
            })
        }

        Rule::function_call => {
            let span = span_of(&pair, offset);
            let mut inner = pair.into_inner();
            let name = inner
                .next()
                .ok_or_else(|| malformed("missing function name", span.clone()))?
                .as_str()
                .to_string();
            let args = inner
                .map(|arg| build_expr(arg, offset))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(SpannedExpr {
                expr: Expr::Call { name, args },
                span,
            })
        }

        Rule::array => {
            let span = span_of(&pair, offset);
            let values = pair
                .into_inner()
                .map(|value| build_expr(value, offset))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(SpannedExpr {
                expr: Expr::Array(values),
                span,
            })
        }

        Rule::number => {
            let span = span_of(&pair, offset);
            let text = pair.as_str();
            let value = text.parse::<f64>().map_err(|_| {
                SyntaxError::new(
                    SyntaxErrorKind::InvalidNumber {
                        text: text.to_string(),
                    },
                    span.clone(),
                )
            })?;
            Ok(SpannedExpr {
                expr: Expr::Number(value),
                span,
            })
        }

        Rule::string => {
            let span = span_of(&pair, offset);
            let text = pair.as_str();
            // Content between the quotes is taken verbatim; no escape
            // processing.
            let inner = &text[1..text.len() - 1];
            Ok(SpannedExpr {
                expr: Expr::Str(inner.to_string()),
                span,
            })
        }

        Rule::boolean => {
            let span = span_of(&pair, offset);
            Ok(SpannedExpr {
                expr: Expr::Bool(pair.as_str() == "true"),
                span,
            })
        }

        rule => Err(malformed(
            format!("unhandled rule: {:?}", rule),
            span_of(&pair, offset),
        )),
    }
}
