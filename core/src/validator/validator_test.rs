use pretty_assertions::assert_eq;

use crate::api::Severity;
use crate::parser::parse;
use crate::types::TypeTag;
use crate::validator::{type_of, validate};

fn diagnostics_for(source: &str) -> Vec<crate::api::Diagnostic> {
    let outcome = parse(source);
    assert_eq!(outcome.errors, vec![], "source must parse cleanly");
    validate(&outcome.model)
}

fn first_type(source: &str) -> Option<TypeTag> {
    let outcome = parse(source);
    assert_eq!(outcome.errors, vec![]);
    type_of(&outcome.model.expressions[0])
}

#[test]
fn clean_document_has_no_diagnostics() {
    assert_eq!(diagnostics_for("add(1, 2)"), vec![]);
    assert_eq!(diagnostics_for("GreaterThan(10, 5) AND true"), vec![]);
    assert_eq!(diagnostics_for("Contains([1, \"two\", true], 1)"), vec![]);
}

#[test]
fn unknown_function_lists_the_catalog() {
    let diagnostics = diagnostics_for("unknownFn(1, 2)");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Error);
    assert_eq!(
        diagnostics[0].message,
        "Unknown function 'unknownFn'. Available functions: GreaterThan, \
         LessThan, Equals, Not, Empty, Contains, add, subtract, multiply, \
         divide, Currency, Duration"
    );
}

#[test]
fn unknown_function_still_checks_its_arguments() {
    // The bad inner call is reported even though the outer name is bad too.
    let diagnostics = diagnostics_for("unknownFn(Not(1))");
    assert_eq!(diagnostics.len(), 2);
    assert!(diagnostics[0].message.starts_with("Unknown function"));
    assert_eq!(
        diagnostics[1].message,
        "Argument 1 of 'Not' expects type 'boolean', got 'number'"
    );
}

#[test]
fn arity_is_checked_both_ways() {
    let diagnostics = diagnostics_for("add(1)");
    assert_eq!(
        diagnostics[0].message,
        "'add' requires at least 2 arguments, got 1"
    );

    let diagnostics = diagnostics_for("Not(true, false)");
    assert_eq!(
        diagnostics[0].message,
        "'Not' expects at most 1 arguments, got 2"
    );
}

#[test]
fn simple_signature_checks_positions_independently() {
    let diagnostics = diagnostics_for("Empty(42)");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message,
        "Argument 1 of 'Empty' expects type 'string', got 'number'"
    );

    // Contains takes any needle; only the haystack is constrained.
    let diagnostics = diagnostics_for("Contains(\"nope\", 1)");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message,
        "Argument 1 of 'Contains' expects type 'array', got 'string'"
    );
}

#[test]
fn polymorphic_mismatch_cites_every_acceptable_tag() {
    let diagnostics = diagnostics_for("add(\"oops\", 2)");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message,
        "Argument 1 of 'add' expects type 'number or currency or duration', \
         got 'string'"
    );
}

#[test]
fn polymorphic_narrowing_follows_the_first_argument() {
    // A currency left operand narrows the right to currency.
    let diagnostics = diagnostics_for("add(Currency(1, \"USD\"), 2)");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message,
        "Argument 2 of 'add' expects type 'currency', got 'number'"
    );

    // multiply scales currency by a plain number; that shape is fine.
    assert_eq!(diagnostics_for("multiply(Currency(1, \"USD\"), 2)"), vec![]);
}

#[test]
fn unknown_argument_types_are_not_reported() {
    // The inner call does not resolve, so its type is unknown; the outer
    // call reports nothing about that position.
    let diagnostics = diagnostics_for("add(mystery(), 2)");
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.starts_with("Unknown function 'mystery'"));
}

#[test]
fn short_currency_code_is_a_warning() {
    let diagnostics = diagnostics_for("Currency(100, \"US\")");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Warning);
    assert_eq!(
        diagnostics[0].message,
        "Currency code 'US' should be 3 characters"
    );
}

#[test]
fn currency_code_length_counts_characters_not_bytes() {
    // Three characters, nine bytes: still the right length.
    assert_eq!(diagnostics_for("Currency(1, \"€€€\")"), vec![]);

    let diagnostics = diagnostics_for("Currency(1, \"€€\")");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Warning);
}

#[test]
fn bad_duration_unit_is_an_error() {
    let diagnostics = diagnostics_for("Duration(30, \"FOO\")");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Error);
    assert_eq!(
        diagnostics[0].message,
        "Invalid duration unit 'FOO'. Valid units: DAYS, WEEKS, MONTHS, YEARS"
    );

    assert_eq!(diagnostics_for("Duration(30, \"DAYS\")"), vec![]);
}

#[test]
fn logical_operands_are_unconstrained() {
    // Numbers and strings as logical operands are coerced at evaluation,
    // not flagged statically.
    assert_eq!(diagnostics_for("1 AND \"yes\" OR false"), vec![]);
}

#[test]
fn every_top_level_expression_is_validated() {
    let diagnostics = diagnostics_for("Empty(1)\nNot(2)");
    assert_eq!(diagnostics.len(), 2);
    assert!(diagnostics[0].message.contains("'Empty'"));
    assert!(diagnostics[1].message.contains("'Not'"));
}

#[test]
fn type_of_literals_and_logical() {
    assert_eq!(first_type("42"), Some(TypeTag::Number));
    assert_eq!(first_type("\"hi\""), Some(TypeTag::Str));
    assert_eq!(first_type("[1, 2]"), Some(TypeTag::Array));
    assert_eq!(first_type("1 AND 2"), Some(TypeTag::Bool));
}

#[test]
fn type_of_sees_through_parentheses() {
    assert_eq!(first_type("(42)"), Some(TypeTag::Number));
    assert_eq!(first_type("((add(1, 2)))"), Some(TypeTag::Number));
}

#[test]
fn type_of_calls_follows_the_matched_combination() {
    assert_eq!(first_type("add(1, 2)"), Some(TypeTag::Number));
    assert_eq!(
        first_type("add(Currency(1, \"USD\"), Currency(2, \"USD\"))"),
        Some(TypeTag::Currency)
    );
    assert_eq!(
        first_type("multiply(Duration(2, \"DAYS\"), 3)"),
        Some(TypeTag::Duration)
    );
    assert_eq!(first_type("GreaterThan(10, 5)"), Some(TypeTag::Bool));

    // Unresolved names and unmatched combinations have no type.
    assert_eq!(first_type("mystery()"), None);
    assert_eq!(first_type("add(\"a\", \"b\")"), None);
}
