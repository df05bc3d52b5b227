//! # verdict
//!
//! Declarative first-match rule evaluation over JSON values.
//!
//! Given a value and an ordered list of [`Rule`](engine::Rule)s — each
//! pairing a test with a candidate value and an optional side effect —
//! [`evaluate`](engine::evaluate) returns the value of the first rule whose
//! test passes and whose candidate survives the validity predicate, after
//! an optional return transform. Tests are inline predicates or named
//! entries resolved late in a [`TestRegistry`](registry::TestRegistry).
//!
//! ## Quick start
//!
//! ```
//! use serde_json::json;
//! use verdict::prelude::*;
//!
//! let rules = vec![
//!     Rule::named("isa", json!(["string", "number"])).with_value("scalar"),
//!     Rule::when(|v, _| v.is_array()).with_value("list"),
//! ];
//! let options = Options::new().with_fallback("other");
//!
//! assert_eq!(evaluate(&json!("hi"), &rules, &options).unwrap(), json!("scalar"));
//! assert_eq!(evaluate(&json!([1]), &rules, &options).unwrap(), json!("list"));
//! assert_eq!(evaluate(&json!(true), &rules, &options).unwrap(), json!("other"));
//! ```
//!
//! ## Extending the test vocabulary
//!
//! Register new tests with [`named_test!`] or a plain closure — names are
//! resolved at evaluation time, so registration order and rule construction
//! order are independent. See [`registry`] for the extension contract.

// Boxed callback signatures (predicates, effects, transforms) are inherent
// to the dynamic rule model.
#![allow(clippy::type_complexity)]

pub mod engine;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod registry;
pub mod shape;
