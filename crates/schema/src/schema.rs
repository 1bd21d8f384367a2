//! Schemas: an ordered set of fields sharing one message table

use std::borrow::Cow;
use std::sync::Arc;

use futures::future::join_all;
use indexmap::IndexMap;
use serde_json::Value;

use crate::cast::to_display_string;
use crate::document::Document;
use crate::error::{DocumentError, FieldViolation, SchemaError};
use crate::field::{Field, FieldKind};
use crate::messages::{self, MessageTable};
use crate::rules::RuleRegistry;

/// What an array field holds when no value was assigned.
static NO_ITEMS: Value = Value::Array(Vec::new());

/// Something that reconfigures a built schema, such as the
/// [`Registrar`](crate::Registrar).
pub trait Plugin {
    fn apply(&self, schema: &mut Schema);
}

// ============================================================================
// BUILDER
// ============================================================================

/// Collects fields, the message table and the rule registry.
///
/// [`build`](Self::build) routes each field's declared options to the
/// registry's installers in declaration order.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: Vec<Field>,
    messages: MessageTable,
    registry: RuleRegistry,
}

impl SchemaBuilder {
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Replaces the message table (default: [`MessageTable::default`]).
    #[must_use = "builder methods must be chained or built"]
    pub fn messages(mut self, messages: MessageTable) -> Self {
        self.messages = messages;
        self
    }

    /// Replaces the rule registry (default: [`RuleRegistry::default`]).
    #[must_use = "builder methods must be chained or built"]
    pub fn registry(mut self, registry: RuleRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Builds the schema.
    ///
    /// # Errors
    ///
    /// [`SchemaError::DuplicatePath`] if two fields share a path.
    pub fn build(self) -> Result<Schema, SchemaError> {
        let messages = Arc::new(self.messages);
        let mut fields = IndexMap::with_capacity(self.fields.len());

        for mut field in self.fields {
            if fields.contains_key(field.path()) {
                return Err(SchemaError::DuplicatePath {
                    path: field.path().to_owned(),
                });
            }
            field.set_messages(Arc::clone(&messages));
            field.apply_declared(&self.registry);
            fields.insert(field.path().to_owned(), field);
        }

        tracing::debug!(fields = fields.len(), "schema built");
        Ok(Schema { fields, messages })
    }
}

// ============================================================================
// SCHEMA
// ============================================================================

/// An ordered set of fields.
///
/// ```
/// use serde_json::json;
/// use valid8_schema::{Field, FieldKind, Schema};
///
/// let schema = Schema::builder()
///     .field(Field::new("email", FieldKind::String).with_option("email", true))
///     .field(Field::new("tags", FieldKind::Array).with_option("sort", "desc"))
///     .build()
///     .unwrap();
///
/// let doc = schema.document(json!({"email": "a@b.co", "tags": ["x", "z", "x"]})).unwrap();
/// assert_eq!(doc.get("tags"), Some(&json!(["z", "x"])));
/// assert!(schema.validate(&doc).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Schema {
    fields: IndexMap<String, Field>,
    messages: Arc<MessageTable>,
}

impl Schema {
    #[must_use]
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Field paths in declaration order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.values()
    }

    /// Every `(path, field)`, for plugins that rewrite fields.
    pub fn fields_mut(&mut self) -> impl Iterator<Item = (&str, &mut Field)> {
        self.fields.iter_mut().map(|(path, field)| (path.as_str(), field))
    }

    #[must_use]
    pub fn field(&self, path: &str) -> Option<&Field> {
        self.fields.get(path)
    }

    pub fn field_mut(&mut self, path: &str) -> Option<&mut Field> {
        self.fields.get_mut(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn messages(&self) -> &MessageTable {
        &self.messages
    }

    /// Applies a plugin.
    pub fn plugin<P: Plugin + ?Sized>(&mut self, plugin: &P) -> &mut Self {
        plugin.apply(self);
        self
    }

    /// A document holding the values of `json`, each cast and transformed as
    /// [`Document::set`] does. Keys without a field are ignored.
    ///
    /// # Errors
    ///
    /// [`SchemaError::NotAnObject`] unless `json` is an object.
    pub fn document(&self, json: Value) -> Result<Document<'_>, SchemaError> {
        let Value::Object(map) = json else {
            return Err(SchemaError::NotAnObject {
                actual: json_type(&json).to_owned(),
            });
        };

        let mut document = Document::new(self);
        for (key, value) in map {
            if self.fields.contains_key(&key) {
                document.set(&key, value)?;
            } else {
                tracing::debug!(path = %key, "ignoring value without a field");
            }
        }
        Ok(document)
    }

    /// Runs every field's validators against `document`.
    ///
    /// Fields without a value are skipped. An explicit `null` is validated
    /// like any other value, in its string form `"null"`.
    ///
    /// # Errors
    ///
    /// A [`DocumentError`] with the first failure of each failing field.
    pub fn validate(&self, document: &Document<'_>) -> Result<(), DocumentError> {
        DocumentError::check(
            self.fields
                .values()
                .filter_map(|field| self.check_field(field, document))
                .map(|violation| (violation.path.clone(), violation))
                .collect(),
        )
    }

    /// [`validate`](Self::validate), with each field checked as its own
    /// future.
    ///
    /// # Errors
    ///
    /// Same as [`validate`](Self::validate).
    pub async fn validate_concurrent(&self, document: &Document<'_>) -> Result<(), DocumentError> {
        let checks = self
            .fields
            .values()
            .map(|field| async move { self.check_field(field, document) });

        DocumentError::check(
            join_all(checks)
                .await
                .into_iter()
                .flatten()
                .map(|violation| (violation.path.clone(), violation))
                .collect(),
        )
    }

    fn check_field(&self, field: &Field, document: &Document<'_>) -> Option<FieldViolation> {
        let path = field.path();

        if let Some(raw) = document.cast_failure(path) {
            let template = self.messages.resolve(field.kind(), messages::CAST);
            tracing::debug!(path, kind = %field.kind(), "cast failure reported");
            return Some(FieldViolation {
                path: path.to_owned(),
                tag: Cow::Borrowed(field.kind().name()),
                message: messages::render(template, path, &to_display_string(raw)),
                value: raw.clone(),
            });
        }

        let value = match document.get(path) {
            Some(value) => value,
            None if field.kind() == FieldKind::Array => &NO_ITEMS,
            None => return None,
        };

        let failed = field.validators().iter().find(|v| !v.check(value))?;
        tracing::debug!(path, tag = %failed.tag, "validator rejected value");
        Some(FieldViolation {
            path: path.to_owned(),
            tag: failed.tag.clone(),
            message: messages::render(&failed.message, path, &to_display_string(value)),
            value: value.clone(),
        })
    }
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::rules::StringRules;

    fn schema() -> Schema {
        Schema::builder()
            .field(Field::new("email", FieldKind::String).with_option("email", true))
            .field(Field::new("age", FieldKind::Number).with_option("integer", true))
            .field(Field::new("tags", FieldKind::Array).with_option("empty", false))
            .build()
            .unwrap()
    }

    #[test]
    fn declared_options_install_rules() {
        let schema = schema();
        assert_eq!(schema.paths().collect::<Vec<_>>(), ["email", "age", "tags"]);
        for field in schema.fields() {
            assert_eq!(field.validators().len(), 1, "{}", field.path());
        }
    }

    #[test]
    fn duplicate_paths_are_rejected() {
        let err = Schema::builder()
            .field(Field::new("a", FieldKind::String))
            .field(Field::new("a", FieldKind::Number))
            .build()
            .unwrap_err();
        assert_eq!(err, SchemaError::DuplicatePath { path: "a".into() });
    }

    #[test]
    fn absent_values_skip_but_arrays_do_not() {
        let schema = schema();
        let doc = schema.document(json!({})).unwrap();
        let err = schema.validate(&doc).unwrap_err();

        assert_eq!(err.len(), 1);
        let violation = err.get("tags").unwrap();
        assert_eq!(violation.tag, "empty");
        assert_eq!(violation.message, "Path `tags` can not be empty.");
    }

    #[test]
    fn cast_failures_are_tagged_with_the_kind() {
        let schema = schema();
        let doc = schema.document(json!({"age": "foo", "tags": ["a"]})).unwrap();
        let violation = schema.validate(&doc).unwrap_err().get("age").cloned().unwrap();

        assert_eq!(violation.tag, "Number");
        assert_eq!(violation.value, json!("foo"));
        assert_eq!(violation.message, "Cast to Number failed for value `foo` at path `age`.");
    }

    #[test]
    fn first_failure_wins() {
        let mut schema = schema();
        schema
            .field_mut("email")
            .unwrap()
            .alpha(true, Some("letters only"));

        let doc = schema.document(json!({"email": "a b", "tags": ["a"]})).unwrap();
        let err = schema.validate(&doc).unwrap_err();
        assert_eq!(err.get("email").unwrap().tag, "email");
        assert_eq!(
            err.get("email").unwrap().message,
            "`a b` is not a valid email address for path `email`."
        );
    }

    #[test]
    fn documents_must_be_objects() {
        let err = schema().document(json!([1])).unwrap_err();
        assert_eq!(err, SchemaError::NotAnObject { actual: "array".into() });
    }

    #[test]
    fn custom_message_table() {
        let schema = Schema::builder()
            .messages(MessageTable::default().with(
                FieldKind::Array,
                "empty",
                "{PATH} needs items",
            ))
            .field(Field::new("tags", FieldKind::Array).with_option("empty", false))
            .build()
            .unwrap();
        let doc = schema.document(json!({"tags": []})).unwrap();
        let err = schema.validate(&doc).unwrap_err();
        assert_eq!(err.get("tags").unwrap().message, "tags needs items");
    }

    #[tokio::test]
    async fn concurrent_matches_sequential() {
        let schema = schema();
        let doc = schema
            .document(json!({"email": "nope", "age": 1.5, "tags": []}))
            .unwrap();

        let sequential = schema.validate(&doc).unwrap_err();
        let concurrent = schema.validate_concurrent(&doc).await.unwrap_err();
        assert_eq!(sequential, concurrent);
        assert_eq!(concurrent.len(), 3);
    }
}
