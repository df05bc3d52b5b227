//! Prelude module for convenient imports.
//!
//! A single `use verdict::prelude::*;` brings in everything needed to
//! author rules, build options, and run evaluations.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use verdict::prelude::*;
//!
//! let rules = vec![Rule::named("isa", json!(["string"])).with_value("S")];
//! let got = evaluate(&json!("x"), &rules, &Options::new()).unwrap();
//! assert_eq!(got, json!("S"));
//! ```

// ============================================================================
// ENGINE: rules, options, evaluation entry points
// ============================================================================

pub use crate::engine::{Options, Rule, RuleSet, When, evaluate, evaluate_in};

// ============================================================================
// FOUNDATION: errors, kinds, context, result aliases
// ============================================================================

pub use crate::foundation::{
    EffectResult, EvalError, ParseKindError, RuleContext, TestResult, ValueKind,
};

// ============================================================================
// REGISTRY: the trait, the collection, and the built-ins
// ============================================================================

pub use crate::registry::{Isa, NamedTest, NotBlank, TestRegistry, isa, not_blank};

// ============================================================================
// SHAPE: value adapters, used qualified (`shape::lc`, `shape::array`)
// ============================================================================

pub use crate::shape;
