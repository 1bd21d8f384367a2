//! Collection utilities over JSON values
//!
//! Array rules normalize a field's value with these before it is stored:
//! wrap scalars, drop falsy entries, dedupe, order.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sort direction for [`order_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Exactly `"desc"` is descending, anything else ascending.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name == "desc" {
            Self::Desc
        } else {
            Self::Asc
        }
    }
}

/// Wraps a non-array value into a one-element array. Arrays pass through.
#[must_use]
pub fn cast_array(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        other => vec![other],
    }
}

/// JavaScript truthiness: `false`, `null`, `0` and `""` are falsy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Removes falsy values, keeping order.
///
/// ```
/// use serde_json::json;
/// use valid8_validator::collection::compact;
///
/// assert_eq!(compact(vec![json!(0), json!(1), json!(false), json!(2), json!(""), json!(3)]),
///            vec![json!(1), json!(2), json!(3)]);
/// ```
#[must_use]
pub fn compact(values: Vec<Value>) -> Vec<Value> {
    values.into_iter().filter(is_truthy).collect()
}

/// Default element equality: numbers by numeric value, so `1`, `1.0` and
/// `-0.0`/`0` are each one value; everything else structurally.
#[must_use]
pub fn same_value(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        _ => a == b,
    }
}

/// Removes duplicates under [`same_value`], keeping the first occurrence.
///
/// ```
/// use serde_json::{Value, json};
/// use valid8_validator::collection::uniq;
///
/// let values: Value = serde_json::from_str("[1, 1.0, 2]").unwrap();
/// assert_eq!(uniq(values.as_array().cloned().unwrap()), vec![json!(1), json!(2)]);
/// ```
#[must_use]
pub fn uniq(values: Vec<Value>) -> Vec<Value> {
    uniq_with(values, same_value)
}

/// Removes duplicates under `eq`, keeping the first occurrence.
#[must_use]
pub fn uniq_with<F>(values: Vec<Value>, eq: F) -> Vec<Value>
where
    F: Fn(&Value, &Value) -> bool,
{
    let mut kept: Vec<Value> = Vec::with_capacity(values.len());
    for value in values {
        if !kept.iter().any(|k| eq(k, &value)) {
            kept.push(value);
        }
    }
    kept
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

/// Total order over JSON values: by type (`null < bool < number < string <
/// array < object`), then by value. Arrays compare element-wise, objects by
/// their serialized form.
#[must_use]
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => {
            let (x, y) = (x.as_f64().unwrap_or(0.0), y.as_f64().unwrap_or(0.0));
            x.total_cmp(&y)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Array(x), Value::Array(y)) => x
            .iter()
            .zip(y)
            .map(|(l, r)| compare_values(l, r))
            .find(|o| o.is_ne())
            .unwrap_or_else(|| x.len().cmp(&y.len())),
        (Value::Object(_), Value::Object(_)) => a.to_string().cmp(&b.to_string()),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

/// Stable sort by [`compare_values`] in the given direction.
#[must_use]
pub fn order_by(mut values: Vec<Value>, order: SortOrder) -> Vec<Value> {
    values.sort_by(|a, b| match order {
        SortOrder::Asc => compare_values(a, b),
        SortOrder::Desc => compare_values(b, a),
    });
    values
}

/// `null`, `""`, `[]` and `{}` are empty. Numbers and booleans are empty too,
/// since they hold no elements.
#[must_use]
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
