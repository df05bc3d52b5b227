//! Error type shared by the evaluator, named tests, and side effects.
//!
//! Only caller-authored failures surface here: the evaluator itself degrades
//! malformed rules into diagnostics and keeps walking the rule list. A
//! predicate or side effect that returns an error aborts the whole
//! evaluation call.

use std::borrow::Cow;

use crate::foundation::ValueKind;

// ============================================================================
// EVAL ERROR
// ============================================================================

/// Failure raised by [`evaluate`](crate::engine::evaluate) or one of the
/// callbacks it drives.
///
/// String fields use `Cow<'static, str>` so static messages allocate
/// nothing.
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    /// A named test was handed input it refuses to work on.
    ///
    /// The canonical producer is `not_blank` applied to `null`: the test has
    /// no null guard on purpose, so a null subject is an authoring error
    /// rather than a failed test.
    #[error("test `{test}` cannot be applied to a {kind} value")]
    UnsupportedInput {
        /// Registry name of the test.
        test: Cow<'static, str>,
        /// Kind of the offending input.
        kind: ValueKind,
    },

    /// An inline predicate failed in a way that should abort evaluation.
    #[error("predicate failed: {message}")]
    Predicate {
        /// What went wrong.
        message: Cow<'static, str>,
    },

    /// A rule's side effect failed.
    #[error("side effect failed: {message}")]
    Effect {
        /// What went wrong.
        message: Cow<'static, str>,
    },

    /// An embedder-defined failure carried through the engine untouched.
    #[error(transparent)]
    Custom(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl EvalError {
    /// A named test rejecting input of the given kind.
    pub fn unsupported_input(test: impl Into<Cow<'static, str>>, kind: ValueKind) -> Self {
        Self::UnsupportedInput {
            test: test.into(),
            kind,
        }
    }

    /// A failing inline predicate.
    pub fn predicate(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Predicate {
            message: message.into(),
        }
    }

    /// A failing side effect.
    pub fn effect(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Effect {
            message: message.into(),
        }
    }

    /// Wraps an arbitrary error for propagation through the engine.
    pub fn custom(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Custom(Box::new(err))
    }
}
