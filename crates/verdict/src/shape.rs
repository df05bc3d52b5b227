//! Value-shaping adapters.
//!
//! Pure functions over [`serde_json::Value`] used to build rule arguments
//! and the `valid` / `transform` halves of
//! [`Options`](crate::engine::Options): case folding, generic conversion,
//! indexed single-value extraction, and list normalization.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use verdict::shape;
//!
//! assert_eq!(shape::uc(&json!("hello")), "HELLO");
//! assert_eq!(shape::last(&json!([1, 2, 3]), false), json!(3));
//! assert_eq!(shape::array(&json!(42)), vec![json!(42)]);
//! ```

use serde_json::Value;

// ============================================================================
// STRING FORM
// ============================================================================

/// Canonical string form of a value.
///
/// `Null` maps to the empty string, strings are their own contents, booleans
/// and numbers use their display form, and arrays and objects render as
/// their compact JSON text.
#[must_use]
pub fn text(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => v.to_string(),
    }
}

/// Lowercase string form of any value.
///
/// ```
/// use serde_json::json;
/// use verdict::shape::lc;
///
/// assert_eq!(lc(&json!("A String")), "a string");
/// assert_eq!(lc(&json!(null)), "");
/// ```
#[must_use]
pub fn lc(v: &Value) -> String {
    text(v).to_lowercase()
}

/// Uppercase string form of any value.
///
/// ```
/// use serde_json::json;
/// use verdict::shape::uc;
///
/// assert_eq!(uc(&json!("A String")), "A STRING");
/// assert_eq!(uc(&json!(null)), "");
/// ```
#[must_use]
pub fn uc(v: &Value) -> String {
    text(v).to_uppercase()
}

// ============================================================================
// CONVERSION
// ============================================================================

/// Conversion strategy accepted by [`convert`].
pub enum Converter<'a> {
    /// Apply a function to the value.
    Func(&'a dyn Fn(&Value) -> Value),
    /// Invoke a named conversion, provided the value's kind supports it.
    ///
    /// Supported names: `trim`, `lower`, `upper` on strings; `len` on
    /// strings, arrays, and objects; `first`, `last` on arrays; `keys` on
    /// objects.
    Named(&'a str),
}

impl<'a> From<&'a str> for Converter<'a> {
    fn from(name: &'a str) -> Self {
        Self::Named(name)
    }
}

impl std::fmt::Debug for Converter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Func(_) => f.write_str("Func(..)"),
            Self::Named(name) => f.debug_tuple("Named").field(name).finish(),
        }
    }
}

/// Converts `v` with `converter`, or yields `default` when the conversion
/// does not apply.
///
/// A [`Converter::Func`] always applies. A [`Converter::Named`] applies only
/// when the value's kind supports the named conversion, the way a method
/// call only exists on the types that define it.
///
/// ```
/// use serde_json::json;
/// use verdict::shape::{Converter, convert};
///
/// assert_eq!(
///     convert(&json!("  pad  "), Converter::Named("trim"), json!(null)),
///     json!("pad"),
/// );
/// // Numbers have no `trim`: the default wins.
/// assert_eq!(
///     convert(&json!(7), Converter::Named("trim"), json!("fallback")),
///     json!("fallback"),
/// );
/// ```
#[must_use]
pub fn convert(v: &Value, converter: Converter<'_>, default: Value) -> Value {
    match converter {
        Converter::Func(f) => f(v),
        Converter::Named(name) => named_conversion(v, name).unwrap_or(default),
    }
}

fn named_conversion(v: &Value, name: &str) -> Option<Value> {
    match (name, v) {
        ("trim", Value::String(s)) => Some(Value::from(s.trim())),
        ("lower", Value::String(s)) => Some(Value::from(s.to_lowercase())),
        ("upper", Value::String(s)) => Some(Value::from(s.to_uppercase())),
        ("len", Value::String(s)) => Some(Value::from(s.chars().count())),
        ("len", Value::Array(items)) => Some(Value::from(items.len())),
        ("len", Value::Object(map)) => Some(Value::from(map.len())),
        ("first", Value::Array(_)) => Some(single(v, 0, false)),
        ("last", Value::Array(_)) => Some(single(v, -1, false)),
        ("keys", Value::Object(map)) => Some(Value::from(
            map.keys().cloned().collect::<Vec<_>>(),
        )),
        _ => None,
    }
}

// ============================================================================
// SINGLE-VALUE EXTRACTION
// ============================================================================

/// Extracts one element of a list-like value, with negative-index
/// wraparound.
///
/// Arrays index directly: `0` is the first element, `-1` the last, and an
/// out-of-range index yields `Null`. An object — iterable but not a list —
/// is materialized into its values in entry order and indexed the same way,
/// unless `skip_object` is set. Anything else is already singular and comes
/// back unchanged.
///
/// ```
/// use serde_json::json;
/// use verdict::shape::single;
///
/// assert_eq!(single(&json!(["a", "b", "c"]), -1, false), json!("c"));
/// assert_eq!(single(&json!(["a"]), 5, false), json!(null));
/// assert_eq!(single(&json!("scalar"), 0, false), json!("scalar"));
/// ```
#[must_use]
pub fn single(v: &Value, index: i64, skip_object: bool) -> Value {
    match v {
        Value::Array(items) => pick(items, index),
        Value::Object(map) if !skip_object => {
            let items: Vec<Value> = map.values().cloned().collect();
            pick(&items, index)
        }
        _ => v.clone(),
    }
}

fn pick(items: &[Value], index: i64) -> Value {
    let len = items.len() as i64;
    let at = if index < 0 { len + index } else { index };
    if (0..len).contains(&at) {
        items[at as usize].clone()
    } else {
        Value::Null
    }
}

/// [`single`] pinned to the first element.
#[must_use]
pub fn first(v: &Value, skip_object: bool) -> Value {
    single(v, 0, skip_object)
}

/// [`single`] pinned to the last element.
#[must_use]
pub fn last(v: &Value, skip_object: bool) -> Value {
    single(v, -1, skip_object)
}

// ============================================================================
// LIST NORMALIZATION
// ============================================================================

/// Normalizes any value into a list.
///
/// Arrays keep their elements, objects contribute their values in entry
/// order, and anything else becomes a one-element list.
#[must_use]
pub fn array(v: &Value) -> Vec<Value> {
    match v {
        Value::Array(items) => items.clone(),
        Value::Object(map) => map.values().cloned().collect(),
        _ => vec![v.clone()],
    }
}

/// Normalizes into a list, then filters, then maps — always in that order.
///
/// ```
/// use serde_json::{Value, json};
/// use verdict::shape::array_with;
///
/// let out = array_with(
///     &json!([1, 2, 3, 4]),
///     |n| n.as_i64().is_some_and(|n| n % 2 == 0),
///     |n| json!(n.as_i64().unwrap_or(0) * 10),
/// );
/// assert_eq!(out, vec![json!(20), json!(40)]);
/// ```
#[must_use]
pub fn array_with(
    v: &Value,
    filter: impl Fn(&Value) -> bool,
    map: impl Fn(Value) -> Value,
) -> Vec<Value> {
    array(v).into_iter().filter(|item| filter(item)).map(map).collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn text_of_null_is_empty() {
        assert_eq!(text(&json!(null)), "");
    }

    #[test]
    fn text_of_scalars_uses_display_form() {
        assert_eq!(text(&json!(true)), "true");
        assert_eq!(text(&json!(7)), "7");
        assert_eq!(text(&json!("plain")), "plain");
    }

    #[test]
    fn text_of_containers_is_compact_json() {
        assert_eq!(text(&json!([1, 2])), "[1,2]");
        assert_eq!(text(&json!({"a": 1})), r#"{"a":1}"#);
    }

    #[test]
    fn case_folding_maps_null_to_empty() {
        assert_eq!(lc(&json!(null)), "");
        assert_eq!(uc(&json!(null)), "");
    }

    #[test]
    fn case_folding_stringifies_non_strings() {
        assert_eq!(uc(&json!(true)), "TRUE");
        assert_eq!(lc(&json!("MiXeD")), "mixed");
    }

    #[test]
    fn convert_func_always_applies() {
        let doubled = convert(
            &json!(21),
            Converter::Func(&|v| json!(v.as_i64().unwrap_or(0) * 2)),
            json!(null),
        );
        assert_eq!(doubled, json!(42));
    }

    #[test]
    fn convert_named_applies_when_supported() {
        assert_eq!(
            convert(&json!(" x "), "trim".into(), json!(null)),
            json!("x")
        );
        assert_eq!(
            convert(&json!([9, 8]), "len".into(), json!(null)),
            json!(2)
        );
        assert_eq!(
            convert(&json!({"k": 1}), "keys".into(), json!(null)),
            json!(["k"])
        );
    }

    #[test]
    fn convert_named_falls_back_when_unsupported() {
        assert_eq!(convert(&json!(7), "trim".into(), json!("d")), json!("d"));
        assert_eq!(
            convert(&json!(null), "upper".into(), json!("d")),
            json!("d")
        );
        assert_eq!(
            convert(&json!("s"), "no_such".into(), json!("d")),
            json!("d")
        );
    }

    #[test]
    fn single_indexes_arrays_with_wraparound() {
        let v = json!(["a", "b", "c"]);
        assert_eq!(single(&v, 0, false), json!("a"));
        assert_eq!(single(&v, 2, false), json!("c"));
        assert_eq!(single(&v, -1, false), json!("c"));
        assert_eq!(single(&v, -3, false), json!("a"));
    }

    #[test]
    fn single_out_of_range_is_null() {
        let v = json!(["a"]);
        assert_eq!(single(&v, 3, false), json!(null));
        assert_eq!(single(&v, -2, false), json!(null));
    }

    #[test]
    fn single_materializes_object_values() {
        let v = json!({"x": 1, "y": 2});
        assert_eq!(single(&v, 0, false), json!(1));
        assert_eq!(single(&v, -1, false), json!(2));
    }

    #[test]
    fn object_values_keep_entry_order_not_key_order() {
        let v = json!({"z": "first", "a": "second"});
        assert_eq!(single(&v, 0, false), json!("first"));
        assert_eq!(array(&v), vec![json!("first"), json!("second")]);
    }

    #[test]
    fn single_skips_object_materialization_on_request() {
        let v = json!({"x": 1});
        assert_eq!(single(&v, 0, true), v);
    }

    #[test]
    fn single_passes_scalars_through() {
        assert_eq!(single(&json!(9), 4, false), json!(9));
        assert_eq!(single(&json!(null), 0, false), json!(null));
    }

    #[test]
    fn first_and_last_pin_the_index() {
        let v = json!([10, 20, 30]);
        assert_eq!(first(&v, false), json!(10));
        assert_eq!(last(&v, false), json!(30));
    }

    #[test]
    fn array_keeps_lists_and_wraps_scalars() {
        assert_eq!(array(&json!([1, 2])), vec![json!(1), json!(2)]);
        assert_eq!(array(&json!("one")), vec![json!("one")]);
        assert_eq!(array(&json!(null)), vec![json!(null)]);
    }

    #[test]
    fn array_materializes_object_values() {
        assert_eq!(array(&json!({"a": 1, "b": 2})), vec![json!(1), json!(2)]);
    }

    #[test]
    fn array_with_filters_before_mapping() {
        // Mapping even numbers to odd ones must not re-trigger the filter.
        let out = array_with(
            &json!([1, 2, 3, 4]),
            |n| n.as_i64().is_some_and(|n| n % 2 == 0),
            |n| json!(n.as_i64().unwrap_or(0) + 1),
        );
        assert_eq!(out, vec![json!(3), json!(5)]);
    }
}
