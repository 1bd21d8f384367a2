//! Value casting at the document boundary
//!
//! Values are cast for their field kind on assignment, and coerced to
//! strings before string predicates see them.

use serde_json::{Number, Value};

use crate::field::FieldKind;

/// Magnitudes outside `[PLAIN_MIN, PLAIN_MAX)` print in exponent form.
const PLAIN_MIN: f64 = 1e-6;
const PLAIN_MAX: f64 = 1e21;

/// The string form a predicate sees.
///
/// Integral numbers print without a fraction (`-0` as `0`), other numbers in
/// shortest round-trip form, very large or small ones as `1e+21`/`1e-7`.
/// Arrays join their elements with commas.
///
/// ```
/// use serde_json::json;
/// use valid8_schema::cast::to_display_string;
///
/// assert_eq!(to_display_string(&json!(123.0)), "123");
/// assert_eq!(to_display_string(&json!(0.5)), "0.5");
/// assert_eq!(to_display_string(&json!(["a", 1, null])), "a,1,");
/// ```
#[must_use]
pub fn to_display_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(b) => b.to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => number_to_string(n),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => to_display_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_owned(),
    }
}

fn number_to_string(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    let f = n.as_f64().unwrap_or(0.0);
    if f == 0.0 {
        return "0".to_owned();
    }
    if !(PLAIN_MIN..PLAIN_MAX).contains(&f.abs()) {
        let exponent = format!("{f:e}");
        return match exponent.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => exponent,
        };
    }
    if f.fract() == 0.0 {
        format!("{f:.0}")
    } else {
        f.to_string()
    }
}

/// Parses a string the way `Number()` does: surrounding whitespace ignored,
/// blank is zero, `0x`/`0o`/`0b` prefixes allowed. Non-finite results are
/// rejected since JSON cannot hold them.
#[must_use]
pub fn parse_number(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }

    let radix = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)]
        .into_iter()
        .find_map(|(prefix, radix)| trimmed.strip_prefix(prefix).map(|digits| (digits, radix)));

    let parsed = match radix {
        Some((digits, radix)) => u64::from_str_radix(digits, radix).ok().map(|n| n as f64),
        None => trimmed.parse::<f64>().ok(),
    };

    parsed.filter(|f| f.is_finite())
}

/// A JSON number for `f`, integral values stored as integers.
#[must_use]
pub fn number_value(f: f64) -> Option<Value> {
    if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Some(Value::from(f as i64))
    } else {
        Number::from_f64(f).map(Value::Number)
    }
}

/// Casts `value` for a field of `kind`. `Err` holds the uncastable value.
///
/// - number: numeric strings are parsed, booleans become `1`/`0`
/// - string: numbers and booleans become their string form
/// - array: `null` becomes `[]`, any other scalar a one-element array
/// - date: stored as given
///
/// `null` is kept for every kind but array.
pub fn cast(kind: FieldKind, value: Value) -> Result<Value, Value> {
    match (kind, value) {
        (FieldKind::Array, Value::Null) => Ok(Value::Array(Vec::new())),
        (FieldKind::Array, Value::Array(items)) => Ok(Value::Array(items)),
        (FieldKind::Array, other) => Ok(Value::Array(vec![other])),
        (_, Value::Null) => Ok(Value::Null),

        (FieldKind::Number, Value::Number(n)) => Ok(Value::Number(n)),
        (FieldKind::Number, Value::Bool(b)) => Ok(Value::from(u8::from(b))),
        (FieldKind::Number, Value::String(s)) => match parse_number(&s).and_then(number_value) {
            Some(number) => Ok(number),
            None => Err(Value::String(s)),
        },
        (FieldKind::Number, other) => Err(other),

        (FieldKind::String, scalar @ (Value::Number(_) | Value::Bool(_))) => {
            Ok(Value::String(to_display_string(&scalar)))
        }
        (FieldKind::String | FieldKind::Date, other) => Ok(other),
    }
}
