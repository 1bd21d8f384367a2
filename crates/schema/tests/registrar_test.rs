use pretty_assertions::assert_eq;
use serde_json::json;
use valid8_schema::prelude::*;

fn with_option(kind: FieldKind, name: &str, value: impl Into<OptionValue>) -> Schema {
    let mut schema = Schema::builder()
        .field(Field::new("value", kind).with_option(name, value))
        .build()
        .unwrap();
    schema.plugin(&Registrar::new());
    schema
}

fn tags(schema: &Schema) -> Vec<String> {
    let field = schema.field("value").unwrap();
    field.validators().iter().map(|v| v.tag.to_string()).collect()
}

#[test]
fn flag_installs_predicate() {
    let schema = with_option(FieldKind::String, "isEmail", true);
    let field = schema.field("value").unwrap();
    assert_eq!(field.validators().len(), 1);
    assert_eq!(field.validators()[0].tag, "email");

    let doc = schema.document(json!({"value": "invalid.com"})).unwrap();
    let err = schema.validate(&doc).unwrap_err();
    assert_eq!(
        err.get("value").unwrap().message,
        "`invalid.com` is not a valid email address for path `value`."
    );
}

#[test]
fn config_message_and_arguments() {
    let schema = with_option(
        FieldKind::Date,
        "isBefore",
        json!({"message": "too late", "date": "2020-01-01"}),
    );

    let doc = schema.document(json!({"value": "2019-06-30"})).unwrap();
    assert!(schema.validate(&doc).is_ok());

    let doc = schema.document(json!({"value": "2021-02-03"})).unwrap();
    let violation = schema.validate(&doc).unwrap_err().get("value").cloned().unwrap();
    assert_eq!(violation.tag, "before");
    assert_eq!(violation.message, "too late");
}

#[test]
fn value_option_is_a_positional_argument() {
    let schema = with_option(FieldKind::String, "contains", "@");
    let field = schema.field("value").unwrap();
    assert!(field.validators()[0].check(&json!("a@b")));
    assert!(!field.validators()[0].check(&json!("ab")));
}

#[test]
fn missing_message_uses_general_template() {
    let schema = with_option(FieldKind::String, "isUppercase", true);
    let doc = schema.document(json!({"value": "abc"})).unwrap();
    assert_eq!(
        schema.validate(&doc).unwrap_err().get("value").unwrap().message,
        "Validator failed for path `value` with value `abc`"
    );
}

#[test]
fn configured_messages_take_over() {
    let config = RegistrarConfig {
        messages: Some(MessageTable::default().with(
            FieldKind::String,
            "uppercase",
            "SHOUT {PATH}",
        )),
        ..RegistrarConfig::default()
    };
    let mut schema = Schema::builder()
        .field(Field::new("value", FieldKind::String).with_option("isUppercase", true))
        .build()
        .unwrap();
    schema.plugin(&Registrar::with_config(config));

    let field = schema.field("value").unwrap();
    assert_eq!(field.validators()[0].message, "SHOUT {PATH}");
}

#[test]
fn running_twice_duplicates() {
    let mut schema = with_option(FieldKind::String, "isEmail", true);
    schema.plugin(&Registrar::new());
    assert_eq!(tags(&schema), ["email", "email"]);
}

#[test]
fn sanitizers_and_meta_are_excluded() {
    for name in ["trim", "escape", "version", "init", "extend"] {
        let schema = with_option(FieldKind::String, name, true);
        assert!(schema.field("value").unwrap().validators().is_empty(), "{name}");
    }
}

#[test]
fn rejected_arguments_install_nothing() {
    let schema = with_option(FieldKind::String, "isIP", json!({"version": 5}));
    assert!(schema.field("value").unwrap().validators().is_empty());
}

#[test]
fn extension_rules_and_registrar_coexist() {
    let mut schema = Schema::builder()
        .field(
            Field::new("value", FieldKind::String)
                .with_option("email", true)
                .with_option("isLength", json!({"min": 1, "max": 8})),
        )
        .build()
        .unwrap();
    schema.plugin(&Registrar::new());

    assert_eq!(tags(&schema), ["email", "length"]);

    let doc = schema.document(json!({"value": "abcdef@example.com"})).unwrap();
    assert_eq!(schema.validate(&doc).unwrap_err().get("value").unwrap().tag, "length");
}
