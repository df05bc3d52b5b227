//! Explicit evaluation context handed to predicates and side effects.

use crate::engine::{Options, Rule};

// ============================================================================
// RULE CONTEXT
// ============================================================================

/// The rule and options active for the callback being invoked.
///
/// The evaluator passes a context to every inline predicate, named test, and
/// side effect, so a callback can introspect the rule that owns it — for
/// example, a side effect can read the candidate value of its own rule:
///
/// ```
/// use serde_json::json;
/// use verdict::engine::{Options, Rule, evaluate};
///
/// let rules = vec![
///     Rule::when(|v, ctx| v == ctx.rule().value()).with_value("echo"),
/// ];
/// let got = evaluate(&json!("echo"), &rules, &Options::new()).unwrap();
/// assert_eq!(got, json!("echo"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    rule: &'a Rule,
    options: &'a Options,
}

impl<'a> RuleContext<'a> {
    pub(crate) const fn new(rule: &'a Rule, options: &'a Options) -> Self {
        Self { rule, options }
    }

    /// The rule whose test or side effect is being invoked.
    #[must_use]
    pub const fn rule(&self) -> &'a Rule {
        self.rule
    }

    /// The options active for this evaluation call.
    #[must_use]
    pub const fn options(&self) -> &'a Options {
        self.options
    }
}
