//! Rules: a test paired with a candidate value and an optional side effect.

use std::fmt;

use indexmap::IndexMap;
use serde_json::Value;

use crate::foundation::{EffectResult, EvalError, RuleContext, TestResult};

// ============================================================================
// CALLBACK TYPES
// ============================================================================

/// Boxed inline predicate stored by [`When::Predicate`].
pub type PredicateFn = Box<dyn Fn(&Value, &RuleContext<'_>) -> TestResult + Send + Sync>;

/// Boxed side-effect callback stored by a [`Rule`].
pub type EffectFn = Box<dyn Fn(&Value, &RuleContext<'_>) -> EffectResult + Send + Sync>;

// ============================================================================
// WHEN
// ============================================================================

/// The test half of a rule.
pub enum When {
    /// An inline predicate, invoked with the subject value and the
    /// evaluation context.
    Predicate(PredicateFn),

    /// An ordered map from registry test name to a raw argument value.
    ///
    /// An entry is *recognized* only when its name resolves in the registry
    /// and its arguments are an array; arguments stay raw so a malformed
    /// entry degrades into "not recognized" instead of failing the call.
    Named(IndexMap<String, Value>),
}

impl fmt::Debug for When {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Predicate(_) => f.write_str("Predicate(..)"),
            Self::Named(entries) => f.debug_tuple("Named").field(entries).finish(),
        }
    }
}

// ============================================================================
// RULE
// ============================================================================

/// One entry of a rule list: a test, a candidate value, and an optional
/// side effect.
///
/// Whether the candidate value may actually be returned is decided by the
/// active validity predicate at evaluation time, not by its presence here;
/// an unset value is `Null`, which the default predicate rejects.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use verdict::engine::Rule;
///
/// // Inline predicate:
/// let _ = Rule::when(|v, _| v.is_string()).with_value("S");
///
/// // Named registry test with an argument list:
/// let _ = Rule::named("isa", json!(["number"])).with_value("num");
/// ```
pub struct Rule {
    pub(crate) when: When,
    pub(crate) value: Value,
    pub(crate) run: Option<EffectFn>,
}

/// An ordered rule list; list order is precedence order.
pub type RuleSet = Vec<Rule>;

impl Rule {
    /// Creates a rule from an explicit [`When`].
    #[must_use]
    pub fn new(when: When) -> Self {
        Self {
            when,
            value: Value::Null,
            run: None,
        }
    }

    /// Creates a rule tested by an inline predicate.
    pub fn when<F>(pred: F) -> Self
    where
        F: Fn(&Value, &RuleContext<'_>) -> bool + Send + Sync + 'static,
    {
        Self::new(When::Predicate(Box::new(move |v, ctx| Ok(pred(v, ctx)))))
    }

    /// Creates a rule tested by a fallible inline predicate.
    ///
    /// An `Err` from the predicate aborts the whole evaluation call.
    pub fn try_when<F>(pred: F) -> Self
    where
        F: Fn(&Value, &RuleContext<'_>) -> TestResult + Send + Sync + 'static,
    {
        Self::new(When::Predicate(Box::new(pred)))
    }

    /// Creates a rule tested by one named registry entry.
    ///
    /// `args` must be an array value for the entry to be recognized at
    /// evaluation time; anything else leaves the rule unrecognized and the
    /// evaluator moves on.
    #[must_use]
    pub fn named(name: impl Into<String>, args: impl Into<Value>) -> Self {
        Self::named_any([(name, args)])
    }

    /// Creates a rule tested by several named entries.
    ///
    /// Entries are tried in order and every entry is tried independently:
    /// any passing entry makes the rule match, and the rule's side effect
    /// fires once per passing entry.
    #[must_use]
    pub fn named_any<N, A>(entries: impl IntoIterator<Item = (N, A)>) -> Self
    where
        N: Into<String>,
        A: Into<Value>,
    {
        let map = entries
            .into_iter()
            .map(|(name, args)| (name.into(), args.into()))
            .collect();
        Self::new(When::Named(map))
    }

    /// Sets the candidate value returned when this rule wins.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    /// Attaches a side effect, fired on every passing test regardless of
    /// whether the candidate value is valid.
    #[must_use]
    pub fn with_run<F>(mut self, run: F) -> Self
    where
        F: Fn(&Value, &RuleContext<'_>) + Send + Sync + 'static,
    {
        self.run = Some(Box::new(move |v, ctx| {
            run(v, ctx);
            Ok(())
        }));
        self
    }

    /// Attaches a fallible side effect.
    ///
    /// An `Err` from the side effect aborts the whole evaluation call.
    #[must_use]
    pub fn with_try_run<F>(mut self, run: F) -> Self
    where
        F: Fn(&Value, &RuleContext<'_>) -> EffectResult + Send + Sync + 'static,
    {
        self.run = Some(Box::new(run));
        self
    }

    /// The candidate value (`Null` when unset).
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Whether a side effect is attached.
    #[must_use]
    pub const fn has_effect(&self) -> bool {
        self.run.is_some()
    }

    pub(crate) fn fire_effect(
        &self,
        value: &Value,
        ctx: &RuleContext<'_>,
    ) -> Result<(), EvalError> {
        match &self.run {
            Some(run) => run(value, ctx),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("when", &self.when)
            .field("value", &self.value)
            .field("run", &self.run.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unset_value_is_null() {
        let rule = Rule::when(|_, _| true);
        assert!(rule.value().is_null());
        assert!(!rule.has_effect());
    }

    #[test]
    fn named_any_preserves_entry_order() {
        let rule = Rule::named_any([("b", json!([1])), ("a", json!([2]))]);
        let When::Named(entries) = &rule.when else {
            panic!("expected a named map");
        };
        let names: Vec<&str> = entries.keys().map(String::as_str).collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn debug_output_hides_callbacks() {
        let rule = Rule::when(|_, _| true).with_value(1).with_run(|_, _| {});
        let repr = format!("{rule:?}");
        assert!(repr.contains("Predicate(..)"));
        assert!(repr.contains("run: true"));
    }
}
