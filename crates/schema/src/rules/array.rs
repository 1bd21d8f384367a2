//! Array field rules
//!
//! `empty` is a validator over the raw array. `compact`, `duplicate` and
//! `sort` are transforms: each wraps a scalar into a one-element array and
//! drops falsy entries before doing its own work.

use std::sync::Arc;

use serde_json::Value;
use valid8_validator::collection::{self, SortOrder};

use super::{Installer, explicitly_off, install_validator};
use crate::field::{Field, FieldContext};
use crate::options::{EqualityFn, OptionValue};

pub const RULES: &[(&str, Installer)] = &[
    ("empty", empty),
    ("compact", compact),
    ("duplicate", duplicate),
    ("sort", sort),
];

/// Rejects empty arrays when `options` is falsy (`false`, `0`, `""`). Any
/// truthy option lets empty arrays through.
///
/// ```
/// use serde_json::json;
/// use valid8_schema::{ArrayRules, Field, FieldKind};
///
/// let mut field = Field::new("tags", FieldKind::Array);
/// field.empty(false, None);
/// assert!(!field.validators()[0].check(&json!([])));
/// assert!(field.validators()[0].check(&json!(["a"])));
/// ```
pub fn empty(field: &mut Field, options: Option<&OptionValue>, message: Option<&str>) {
    install_validator(field, "empty", options, message, |o| {
        let allow = o.is_truthy();
        Ok(Arc::new(move |value: &Value| allow || !collection::is_empty(value)))
    });
}

fn prepare(value: Value) -> Vec<Value> {
    collection::compact(collection::cast_array(value))
}

fn dedupe(values: Vec<Value>, eq: Option<&EqualityFn>) -> Vec<Value> {
    match eq {
        Some(eq) => collection::uniq_with(values, |a, b| eq(a, b)),
        None => collection::uniq(values),
    }
}

/// Removes falsy values: `false`, `null`, `0` and `""`.
pub fn compact(field: &mut Field, should_apply: Option<&OptionValue>, _message: Option<&str>) {
    if explicitly_off(should_apply) {
        return;
    }
    field.push_transform(
        "compact",
        Arc::new(|value: Value, _: &FieldContext<'_>| Value::Array(prepare(value))),
    );
}

/// Removes duplicates, keeping first occurrences. An equality function as
/// `should_apply` decides what counts as a duplicate; any other truthy
/// argument installs nothing.
pub fn duplicate(field: &mut Field, should_apply: Option<&OptionValue>, _message: Option<&str>) {
    let eq = should_apply.and_then(OptionValue::as_equality).cloned();
    if should_apply.is_some_and(OptionValue::is_truthy) && eq.is_none() {
        return;
    }
    field.push_transform(
        "duplicate",
        Arc::new(move |value: Value, _: &FieldContext<'_>| {
            Value::Array(dedupe(prepare(value), eq.as_ref()))
        }),
    );
}

/// Dedupes then orders the array, ascending unless `should_apply` is the
/// string `"desc"`.
///
/// Duplicates are found with the equality function declared as the field's
/// `sort` option, when there is one.
pub fn sort(field: &mut Field, should_apply: Option<&OptionValue>, _message: Option<&str>) {
    if explicitly_off(should_apply) {
        return;
    }
    let order = should_apply
        .and_then(OptionValue::as_str)
        .map(SortOrder::from_name)
        .unwrap_or_default();

    field.push_transform(
        "sort",
        Arc::new(move |value: Value, context: &FieldContext<'_>| {
            let eq = context.options.get("sort").and_then(OptionValue::as_equality);
            Value::Array(collection::order_by(dedupe(prepare(value), eq), order))
        }),
    );
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::field::FieldKind;

    fn field() -> Field {
        Field::new("tags", FieldKind::Array)
    }

    #[test]
    fn empty_follows_truthiness() {
        for (option, allows) in [
            (OptionValue::from(false), false),
            (OptionValue::from(json!(0)), false),
            (OptionValue::from(true), true),
            (OptionValue::from(json!({"message": "m"})), true),
        ] {
            let mut f = field();
            empty(&mut f, Some(&option), None);
            assert_eq!(f.validators()[0].check(&json!([])), allows, "{option:?}");
            assert!(f.validators()[0].check(&json!([1])));
        }
    }

    #[test]
    fn empty_unset_removes() {
        let mut f = field();
        empty(&mut f, Some(&false.into()), None);
        empty(&mut f, Some(&OptionValue::Unset), None);
        assert!(f.validators().is_empty());
    }

    #[test]
    fn compact_wraps_and_drops_falsy() {
        let mut f = field();
        compact(&mut f, None, None);
        assert_eq!(
            f.transform(json!([null, "a", 0, false, "", "b"])),
            json!(["a", "b"])
        );
        assert_eq!(f.transform(json!("a")), json!(["a"]));

        let mut f = field();
        compact(&mut f, Some(&false.into()), None);
        assert!(f.transforms().is_empty());
    }

    #[test]
    fn duplicate_arguments() {
        let mut f = field();
        duplicate(&mut f, Some(&true.into()), None);
        assert!(f.transforms().is_empty());

        let mut f = field();
        duplicate(&mut f, Some(&false.into()), None);
        assert_eq!(f.transform(json!(["a", "a", "b", null])), json!(["a", "b"]));
    }

    #[test]
    fn duplicate_with_equality() {
        let mut f = field();
        let same_id = OptionValue::equality(|a: &Value, b: &Value| a["id"] == b["id"]);
        duplicate(&mut f, Some(&same_id), None);
        assert_eq!(
            f.transform(json!([{"id": 1, "n": "a"}, {"id": 1, "n": "b"}, {"id": 2}])),
            json!([{"id": 1, "n": "a"}, {"id": 2}])
        );
    }

    #[test]
    fn sort_orders() {
        let mut f = field();
        sort(&mut f, Some(&true.into()), None);
        assert_eq!(f.transform(json!(["b", "a", "c", "b"])), json!(["a", "b", "c"]));

        let mut f = field();
        sort(&mut f, Some(&"desc".into()), None);
        assert_eq!(f.transform(json!([1, 3, 2, 3, 0])), json!([3, 2, 1]));

        let mut f = field();
        sort(&mut f, Some(&"".into()), None);
        assert!(f.transforms().is_empty());
    }

    #[test]
    fn sort_dedupes_with_declared_equality() {
        let case_insensitive = OptionValue::equality(|a: &Value, b: &Value| {
            a.as_str().map(str::to_lowercase) == b.as_str().map(str::to_lowercase)
        });
        let mut f = field().with_option("sort", case_insensitive.clone());
        sort(&mut f, Some(&case_insensitive), None);
        assert_eq!(f.transform(json!(["b", "A", "a", "B"])), json!(["A", "b"]));
    }
}
