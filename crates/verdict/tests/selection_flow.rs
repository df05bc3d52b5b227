//! End-to-end selection flows: named tests and inline predicates combined
//! with shaped options and side effects, the way call sites actually use
//! the engine.

use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use verdict::prelude::*;

/// Classifies scalars with a named test and objects with a predicate.
fn type_rules() -> RuleSet {
    vec![
        Rule::named("isa", json!(["bool", "string"])).with_value("boolORstr"),
        Rule::when(|v, _| v.is_object()).with_value(json!(["isObj", "truth!"])),
    ]
}

/// Accepts strings or arrays, folding the result to one lowercase string.
fn lower_first_options() -> Options {
    Options::new()
        .with_fallback("")
        .with_valid(|v| v.is_string() || v.is_array())
        .with_transform(|v, _| json!(shape::lc(&shape::first(&v, false))))
}

/// Accepts strings or arrays, folding the result to a list of non-blank
/// uppercase strings.
fn upper_list_options() -> Options {
    Options::new()
        .with_fallback(json!([]))
        .with_valid(|v| v.is_string() || v.is_array())
        .with_transform(|v, _| {
            Value::from(shape::array_with(
                &v,
                |item| !shape::text(item).trim().is_empty(),
                |item| json!(shape::uc(&item)),
            ))
        })
}

// ============================================================================
// LOWERCASE-FIRST FLOW
// ============================================================================

#[test]
fn lower_first_folds_scalar_values() {
    let rules = type_rules();
    let options = lower_first_options();
    assert_eq!(
        evaluate(&json!("a string"), &rules, &options).unwrap(),
        json!("boolorstr")
    );
    assert_eq!(
        evaluate(&json!(true), &rules, &options).unwrap(),
        json!("boolorstr")
    );
}

#[test]
fn lower_first_takes_the_head_of_list_values() {
    let rules = type_rules();
    let options = lower_first_options();
    assert_eq!(
        evaluate(&json!({"hello": "World"}), &rules, &options).unwrap(),
        json!("isobj")
    );
}

#[test]
fn lower_first_folds_the_fallback_to_empty() {
    let rules = type_rules();
    let options = lower_first_options();
    assert_eq!(evaluate(&json!(null), &rules, &options).unwrap(), json!(""));
}

// ============================================================================
// UPPERCASE-LIST FLOW
// ============================================================================

#[test]
fn upper_list_wraps_scalar_values() {
    let rules = type_rules();
    let options = upper_list_options();
    assert_eq!(
        evaluate(&json!("a string"), &rules, &options).unwrap(),
        json!(["BOOLORSTR"])
    );
}

#[test]
fn upper_list_keeps_list_values_whole() {
    let rules = type_rules();
    let options = upper_list_options();
    assert_eq!(
        evaluate(&json!({"hello": "World"}), &rules, &options).unwrap(),
        json!(["ISOBJ", "TRUTH!"])
    );
}

#[test]
fn upper_list_fallback_is_an_empty_list() {
    let rules = type_rules();
    let options = upper_list_options();
    assert_eq!(evaluate(&json!(null), &rules, &options).unwrap(), json!([]));
}

// ============================================================================
// SIDE-EFFECT FLOW
// ============================================================================

fn effect_rules(seen: &Arc<Mutex<String>>) -> RuleSet {
    let first_sink = seen.clone();
    let second_sink = seen.clone();
    vec![
        Rule::named("isa", json!(["string", "object"]))
            .with_value("Yes Please!")
            .with_run(move |v, ctx| {
                *first_sink.lock().unwrap() =
                    format!("{}||{}", v, shape::text(ctx.rule().value()));
            }),
        Rule::named("isa", json!(["bool"])).with_run(move |v, _| {
            *second_sink.lock().unwrap() = shape::text(v);
        }),
    ]
}

#[test]
fn matching_rule_records_value_and_context() {
    let seen = Arc::new(Mutex::new(String::new()));
    let rules = effect_rules(&seen);
    let options = upper_list_options();

    let got = evaluate(&json!("a string"), &rules, &options).unwrap();
    assert_eq!(got, json!(["YES PLEASE!"]));
    assert_eq!(*seen.lock().unwrap(), "\"a string\"||Yes Please!");

    let got = evaluate(&json!({"hello": "World"}), &rules, &options).unwrap();
    assert_eq!(got, json!(["YES PLEASE!"]));
    assert_eq!(*seen.lock().unwrap(), "{\"hello\":\"World\"}||Yes Please!");
}

#[test]
fn valueless_rule_still_records_before_fallback() {
    let seen = Arc::new(Mutex::new(String::new()));
    let rules = effect_rules(&seen);
    let options = upper_list_options();

    let got = evaluate(&json!(true), &rules, &options).unwrap();
    assert_eq!(got, json!([]));
    assert_eq!(*seen.lock().unwrap(), "true");
}
