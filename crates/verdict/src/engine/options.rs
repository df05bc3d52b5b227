//! Per-call options: fallback, validity predicate, and return transform.

use std::fmt;

use serde_json::Value;

// ============================================================================
// CALLBACK TYPES
// ============================================================================

/// Boxed validity predicate deciding whether a candidate value may be
/// returned.
pub type ValidFn = Box<dyn Fn(&Value) -> bool + Send + Sync>;

/// Boxed return transform applied to the chosen value (or the fallback)
/// before it becomes the call's result.
pub type TransformFn = Box<dyn Fn(Value, &Options) -> Value + Send + Sync>;

// ============================================================================
// OPTIONS
// ============================================================================

/// Options for one evaluation call.
///
/// Typically built once per call site and reused across many evaluations.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use verdict::engine::Options;
/// use verdict::shape;
///
/// let options = Options::new()
///     .with_fallback("")
///     .with_valid(|v| v.is_string() || v.is_array())
///     .with_transform(|v, _| json!(shape::lc(&shape::first(&v, false))));
/// # let _ = options;
/// ```
pub struct Options {
    pub(crate) fallback: Value,
    pub(crate) valid: Option<ValidFn>,
    pub(crate) transform: Option<TransformFn>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            fallback: Value::Null,
            valid: None,
            transform: None,
        }
    }
}

impl Options {
    /// Default options: `Null` fallback, "not null" validity, identity
    /// transform.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value returned when no rule produces a valid match.
    ///
    /// The fallback goes through the return transform like any chosen
    /// value.
    #[must_use]
    pub fn with_fallback(mut self, fallback: impl Into<Value>) -> Self {
        self.fallback = fallback.into();
        self
    }

    /// Sets the validity predicate for candidate values.
    ///
    /// Unset, any value other than `Null` is valid.
    #[must_use]
    pub fn with_valid<F>(mut self, valid: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.valid = Some(Box::new(valid));
        self
    }

    /// Sets the return transform.
    ///
    /// Unset, the chosen value is returned as-is.
    #[must_use]
    pub fn with_transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(Value, &Options) -> Value + Send + Sync + 'static,
    {
        self.transform = Some(Box::new(transform));
        self
    }

    /// The configured fallback value.
    #[must_use]
    pub const fn fallback(&self) -> &Value {
        &self.fallback
    }

    /// Whether `candidate` may be returned from an evaluation.
    #[must_use]
    pub fn is_valid(&self, candidate: &Value) -> bool {
        match &self.valid {
            Some(valid) => valid(candidate),
            None => !candidate.is_null(),
        }
    }

    /// Applies the return transform to `chosen` (identity when unset).
    #[must_use]
    pub fn finish(&self, chosen: Value) -> Value {
        match &self.transform {
            Some(transform) => transform(chosen, self),
            None => chosen,
        }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("fallback", &self.fallback)
            .field("valid", &self.valid.is_some())
            .field("transform", &self.transform.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_validity_rejects_only_null() {
        let options = Options::new();
        assert!(!options.is_valid(&json!(null)));
        assert!(options.is_valid(&json!(false)));
        assert!(options.is_valid(&json!("")));
        assert!(options.is_valid(&json!(0)));
    }

    #[test]
    fn custom_validity_overrides_default() {
        let options = Options::new().with_valid(|v| v.is_number());
        assert!(options.is_valid(&json!(1)));
        assert!(!options.is_valid(&json!("1")));
    }

    #[test]
    fn finish_defaults_to_identity() {
        let options = Options::new();
        assert_eq!(options.finish(json!("x")), json!("x"));
    }

    #[test]
    fn finish_applies_transform_with_options() {
        let options = Options::new()
            .with_fallback("fb")
            .with_transform(|v, opts| json!([v, opts.fallback().clone()]));
        assert_eq!(options.finish(json!(1)), json!([1, "fb"]));
    }
}
