//! End-to-end pipeline tests: parse, validate and evaluate the same
//! document through the public engine.

use pretty_assertions::assert_eq;

use specter_core::api::{Engine, Severity};
use specter_core::evaluator::Value;
use specter_core::types::TypeTag;

#[test]
fn the_three_stages_are_independent() {
    let engine = Engine::new();
    let outcome = engine.parse("add(5, 3)\ndivide(1, 0)\nEmpty(42)");
    assert_eq!(outcome.errors, vec![]);
    assert_eq!(outcome.model.expressions.len(), 3);

    // Validation flags the third expression.
    let diagnostics = engine.validate(&outcome.model);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message,
        "Argument 1 of 'Empty' expects type 'string', got 'number'"
    );

    // Evaluation still runs the whole document, failing per expression.
    let results = engine.evaluate(&outcome.model);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].value, Some(Value::Number(8.0)));
    assert!(!results[1].success);
    assert_eq!(results[1].error.as_deref(), Some("Division by zero"));
    assert!(!results[2].success);
}

#[test]
fn check_merges_syntax_errors_and_validation() {
    let engine = Engine::new();
    let (model, diagnostics) = engine.check("add(1,\nunknownFn(2)");
    assert_eq!(model.expressions.len(), 1);
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0].severity, Severity::Error);
    assert!(diagnostics[1].message.starts_with("Unknown function 'unknownFn'"));
}

#[test]
fn greater_than_and_literal_round_trip() {
    let engine = Engine::new();
    let outcome = engine.parse("GreaterThan(10, 5)\n\"verbatim\"");
    let results = engine.evaluate(&outcome.model);
    assert_eq!(results[0].value, Some(Value::Bool(true)));
    assert_eq!(results[0].type_tag, TypeTag::Bool);
    assert_eq!(results[1].value, Some(Value::Str("verbatim".to_string())));
}

#[test]
fn currency_warning_still_evaluates() {
    let engine = Engine::new();
    let outcome = engine.parse("Currency(100, \"US\")");
    let diagnostics = engine.validate(&outcome.model);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Warning);

    let results = engine.evaluate(&outcome.model);
    assert_eq!(
        results[0].value,
        Some(Value::Currency {
            amount: 100.0,
            code: "US".to_string()
        })
    );
}

#[test]
fn duration_unit_error_does_not_stop_evaluation() {
    let engine = Engine::new();
    let outcome = engine.parse("Duration(30, \"FOO\")");
    let diagnostics = engine.validate(&outcome.model);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Error);
    assert!(diagnostics[0].message.contains("DAYS, WEEKS, MONTHS, YEARS"));

    // Evaluation constructs the value as written.
    let results = engine.evaluate(&outcome.model);
    assert_eq!(
        results[0].value,
        Some(Value::Duration {
            amount: 30.0,
            unit: "FOO".to_string()
        })
    );
}

#[test]
fn unknown_function_is_flagged_and_fails() {
    let engine = Engine::new();
    let outcome = engine.parse("unknownFn(1, 2)");
    let diagnostics = engine.validate(&outcome.model);
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("Available functions: GreaterThan"));

    let results = engine.evaluate(&outcome.model);
    assert_eq!(
        results[0].error.as_deref(),
        Some("Unknown function: unknownFn")
    );
}

#[test]
fn flat_left_associative_logic_end_to_end() {
    let engine = Engine::new();
    // (true AND false) OR true = true; the other grouping would also be
    // true, so pin the shape with one where they differ:
    // (false OR true) AND false = false vs false OR (true AND false) = false.
    // Use three operators to separate the readings.
    let outcome = engine.parse("true OR true AND false");
    let results = engine.evaluate(&outcome.model);
    // Left grouping: (true OR true) AND false = false.
    assert_eq!(results[0].value, Some(Value::Bool(false)));
}

#[test]
fn non_short_circuit_logic_end_to_end() {
    let engine = Engine::new();
    let outcome = engine.parse("false AND divide(1, 0)");
    let results = engine.evaluate(&outcome.model);
    assert!(!results[0].success);
    assert_eq!(results[0].error.as_deref(), Some("Division by zero"));
}

#[test]
fn function_names_and_signatures_are_exposed() {
    let engine = Engine::new();
    let names = engine.function_names();
    assert_eq!(names.len(), 12);
    assert_eq!(names[0], "GreaterThan");

    let signature = engine.signature("divide").unwrap();
    assert_eq!(signature.arity(), 2);
    assert!(signature.is_polymorphic());
    assert!(engine.signature("nope").is_none());
}

#[test]
fn outputs_serialize_to_json() {
    let engine = Engine::new();
    let outcome = engine.parse("add(1, 2)");
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["errors"], serde_json::json!([]));

    let results = engine.evaluate(&outcome.model);
    let json = serde_json::to_value(&results).unwrap();
    assert_eq!(json[0]["success"], serde_json::json!(true));
    assert_eq!(json[0]["type_tag"], serde_json::json!("number"));
}
