//! The rule-evaluation loop.

use serde_json::Value;
use tracing::{trace, warn};

use crate::engine::{Options, Rule, When};
use crate::foundation::{EvalError, RuleContext};
use crate::registry::{self, TestRegistry};

/// Evaluates `value` against `rules` using the process-wide registry.
///
/// Rules are tried strictly in list order; the first rule whose test passes
/// and whose candidate value satisfies the validity predicate wins, and its
/// value is returned through the return transform. When no rule wins, the
/// transformed fallback is returned instead.
///
/// The registry is read-locked once for the whole call, so late
/// registrations never change the outcome of an evaluation already in
/// flight.
///
/// # Errors
///
/// Propagates any error raised by a predicate, named test, or side effect;
/// the evaluator itself adds none.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use verdict::engine::{Options, Rule, evaluate};
///
/// let rules = vec![
///     Rule::when(|v, _| v.is_string()).with_value("S"),
///     Rule::named("isa", json!(["number"])).with_value("N"),
/// ];
/// let options = Options::new().with_fallback("none");
///
/// assert_eq!(evaluate(&json!("x"), &rules, &options).unwrap(), json!("S"));
/// assert_eq!(evaluate(&json!(7), &rules, &options).unwrap(), json!("N"));
/// assert_eq!(evaluate(&json!(true), &rules, &options).unwrap(), json!("none"));
/// ```
pub fn evaluate(value: &Value, rules: &[Rule], options: &Options) -> Result<Value, EvalError> {
    let registry = registry::global()
        .read()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    evaluate_in(&registry, value, rules, options)
}

/// Evaluates `value` against `rules`, resolving named tests in an explicit
/// registry.
///
/// Behavior is identical to [`evaluate`]; embedders use this to keep rule
/// vocabularies isolated from the process-wide registry.
///
/// # Errors
///
/// Propagates any error raised by a predicate, named test, or side effect.
pub fn evaluate_in(
    registry: &TestRegistry,
    value: &Value,
    rules: &[Rule],
    options: &Options,
) -> Result<Value, EvalError> {
    trace!(rules = rules.len(), "evaluating value against rule list");

    for rule in rules {
        let ctx = RuleContext::new(rule, options);
        let value_ok = options.is_valid(&rule.value);

        match &rule.when {
            When::Predicate(pred) => {
                if pred(value, &ctx)? {
                    // The side effect fires on a passing test even when the
                    // candidate value turns out to be invalid.
                    rule.fire_effect(value, &ctx)?;
                    if value_ok {
                        return Ok(options.finish(rule.value.clone()));
                    }
                }
            }
            When::Named(entries) => {
                let mut recognized = false;
                for (name, raw_args) in entries {
                    let Some(test) = registry.get(name) else {
                        continue;
                    };
                    let Some(args) = raw_args.as_array() else {
                        continue;
                    };
                    recognized = true;
                    if test.test(value, args, &ctx)? {
                        // Fires once per passing entry, not once per rule:
                        // every entry is tried independently.
                        rule.fire_effect(value, &ctx)?;
                        if value_ok {
                            return Ok(options.finish(rule.value.clone()));
                        }
                    }
                }
                if !recognized {
                    let names: Vec<&str> = entries.keys().map(String::as_str).collect();
                    warn!(tests = ?names, "rule skipped: no named test recognized");
                }
            }
        }
    }

    Ok(options.finish(options.fallback.clone()))
}
