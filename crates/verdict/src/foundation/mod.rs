//! Shared building blocks: errors, value kinds, and the evaluation context.
//!
//! Everything here is consumed by both halves of the crate — the evaluator
//! in [`engine`](crate::engine) and the named tests in
//! [`registry`](crate::registry) — without either depending on the other's
//! internals.

pub mod context;
pub mod error;
pub mod kind;

pub use context::RuleContext;
pub use error::EvalError;
pub use kind::{ParseKindError, ValueKind};

/// Result alias used by predicates and named tests.
pub type TestResult = Result<bool, EvalError>;

/// Result alias used by side-effect callbacks.
pub type EffectResult = Result<(), EvalError>;
