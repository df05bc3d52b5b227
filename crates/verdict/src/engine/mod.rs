//! The rule evaluator: rules, per-call options, and the evaluation loop.
//!
//! # Evaluation contract
//!
//! [`evaluate`] walks a rule list strictly in order. For each rule it
//! resolves the test — an inline predicate, or named entries looked up in
//! the registry at evaluation time — and on the first passing test whose
//! candidate value satisfies the validity predicate, returns that value
//! through the return transform. Passing tests with invalid values
//! contribute only their side effect; malformed named entries are reported
//! and skipped so one bad rule never hides the rules after it.

pub mod eval;
pub mod options;
pub mod rule;

pub use eval::{evaluate, evaluate_in};
pub use options::{Options, TransformFn, ValidFn};
pub use rule::{EffectFn, PredicateFn, Rule, RuleSet, When};
