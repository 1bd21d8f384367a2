//! Property-based tests for rule installation and document validation.

use proptest::prelude::*;
use serde_json::{Value, json};
use valid8_schema::prelude::*;

fn option_strategy() -> impl Strategy<Value = OptionValue> {
    prop_oneof![
        Just(OptionValue::Unset),
        any::<bool>().prop_map(OptionValue::from),
        "[a-z ]{0,12}".prop_map(|m| OptionValue::from(json!({ "message": m }))),
    ]
}

fn array_item() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        (-5i64..5).prop_map(Value::from),
        "[a-c]{0,2}".prop_map(Value::from),
    ]
}

proptest! {
    /// However often a rule is reconfigured, at most one validator of its
    /// tag remains, and only when the last call was not a disable.
    #[test]
    fn reconfiguration_keeps_one_validator(
        calls in prop::collection::vec(
            (option_strategy(), proptest::option::of("[a-z]{0,6}")),
            1..8,
        )
    ) {
        let mut field = Field::new("email", FieldKind::String);
        for (options, message) in &calls {
            field.email(options.clone(), message.as_deref());
        }

        let (last, last_message) = calls.last().unwrap();
        let installed: Vec<_> = field.validators().iter().filter(|v| v.tag == "email").collect();
        prop_assert_eq!(installed.len(), usize::from(!last.is_unset()));

        if let Some(validator) = installed.first() {
            let expected = last
                .message()
                .filter(|m| !m.is_empty())
                .or_else(|| last_message.as_deref().filter(|m| !m.is_empty()))
                .unwrap_or("`{VALUE}` is not a valid email address for path `{PATH}`.");
            prop_assert_eq!(validator.message.as_str(), expected);
        }
    }

    /// Stored array values never hold falsy entries or duplicates once
    /// `sort` is declared, and are in order.
    #[test]
    fn sorted_arrays_are_normalized(items in prop::collection::vec(array_item(), 0..12)) {
        let schema = Schema::builder()
            .field(Field::new("tags", FieldKind::Array).with_option("sort", true))
            .build()
            .unwrap();
        let doc = schema.document(json!({ "tags": items })).unwrap();
        let stored = doc.get("tags").and_then(Value::as_array).cloned().unwrap();

        for (i, value) in stored.iter().enumerate() {
            prop_assert!(!matches!(value, Value::Null | Value::Bool(false)));
            prop_assert!(value != &json!(0) && value != &json!(""));
            prop_assert!(!stored[i + 1..].contains(value));
        }
        for pair in stored.windows(2) {
            prop_assert!(
                valid8_validator::collection::compare_values(&pair[0], &pair[1]).is_lt()
            );
        }
    }

    /// Integers always validate as `integer` and `numeric`, whether assigned
    /// as numbers or numeric strings.
    #[test]
    fn integers_pass_number_rules(n in any::<i32>(), as_string in any::<bool>()) {
        let schema = Schema::builder()
            .field(
                Field::new("n", FieldKind::Number)
                    .with_option("integer", true)
                    .with_option("numeric", true),
            )
            .build()
            .unwrap();
        let value = if as_string { json!(n.to_string()) } else { json!(n) };
        let doc = schema.document(json!({ "n": value })).unwrap();
        prop_assert!(schema.validate(&doc).is_ok());
        prop_assert_eq!(doc.get("n"), Some(&json!(n)));
    }
}

#[tokio::test]
async fn concurrent_validation_matches_sequential() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let schema = Schema::builder()
        .field(Field::new("email", FieldKind::String).with_option("email", true))
        .field(Field::new("ip", FieldKind::String).with_option("ip", true))
        .field(Field::new("age", FieldKind::Number).with_option("integer", true))
        .field(Field::new("tags", FieldKind::Array).with_option("empty", false))
        .field(Field::new("uuid", FieldKind::String).with_option("uuid", true))
        .build()
        .unwrap();

    let documents = [
        json!({"email": "a@b.co", "ip": "::1", "age": 3, "tags": ["x"]}),
        json!({"email": "nope", "ip": "256.0.0.0", "age": "x", "tags": []}),
        json!({"email": "a@b.co", "ip": "1.2.3.4", "age": 1.5, "uuid": "934859"}),
    ];

    for json in documents {
        let doc = schema.document(json).unwrap();
        let concurrent = schema.validate_concurrent(&doc).await;
        pretty_assertions::assert_eq!(schema.validate(&doc), concurrent);
    }
}
