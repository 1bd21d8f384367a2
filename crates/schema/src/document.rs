//! Documents: values assigned through a schema

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::cast::cast;
use crate::error::{DocumentError, SchemaError};
use crate::field::FieldKind;
use crate::schema::Schema;

/// Field values of one schema, keyed by path.
///
/// Every assignment is cast for the field's kind and then passed through
/// the field's transforms. A value that cannot be cast is kept aside and
/// reported by validation. Array fields start out as `[]`.
#[derive(Debug, Clone)]
pub struct Document<'s> {
    schema: &'s Schema,
    values: IndexMap<String, Value>,
    cast_failures: IndexMap<String, Value>,
}

impl<'s> Document<'s> {
    pub(crate) fn new(schema: &'s Schema) -> Self {
        let values = schema
            .fields()
            .filter(|field| field.kind() == FieldKind::Array)
            .map(|field| (field.path().to_owned(), Value::Array(Vec::new())))
            .collect();

        Self {
            schema,
            values,
            cast_failures: IndexMap::new(),
        }
    }

    #[must_use]
    pub const fn schema(&self) -> &'s Schema {
        self.schema
    }

    /// Assigns `value` to `path`.
    ///
    /// ```
    /// use serde_json::json;
    /// use valid8_schema::{Field, FieldKind, Schema};
    ///
    /// let schema = Schema::builder()
    ///     .field(Field::new("name", FieldKind::String).with_option("startcase", true))
    ///     .build()
    ///     .unwrap();
    ///
    /// let mut doc = schema.document(json!({})).unwrap();
    /// doc.set("name", json!("john_doe")).unwrap();
    /// assert_eq!(doc.get("name"), Some(&json!("John Doe")));
    /// assert!(doc.set("nickname", json!("jd")).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// [`SchemaError::UnknownPath`] if the schema has no such field.
    pub fn set(&mut self, path: &str, value: Value) -> Result<&mut Self, SchemaError> {
        let field = self
            .schema
            .field(path)
            .ok_or_else(|| SchemaError::UnknownPath {
                path: path.to_owned(),
            })?;

        match cast(field.kind(), value) {
            Ok(value) => {
                self.cast_failures.shift_remove(path);
                self.values.insert(path.to_owned(), field.transform(value));
            }
            Err(raw) => {
                tracing::debug!(path, kind = %field.kind(), "value could not be cast");
                self.values.shift_remove(path);
                self.cast_failures.insert(path.to_owned(), raw);
            }
        }
        Ok(self)
    }

    /// The stored value of `path`, if one was assigned.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Value> {
        self.values.get(path)
    }

    /// The value last assigned to `path` if it could not be cast.
    #[must_use]
    pub fn cast_failure(&self, path: &str) -> Option<&Value> {
        self.cast_failures.get(path)
    }

    #[must_use]
    pub const fn values(&self) -> &IndexMap<String, Value> {
        &self.values
    }

    /// The stored values as a JSON object.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.values
                .iter()
                .map(|(path, value)| (path.clone(), value.clone()))
                .collect::<Map<_, _>>(),
        )
    }

    /// Validates against the schema this document was made from.
    ///
    /// # Errors
    ///
    /// See [`Schema::validate`].
    pub fn validate(&self) -> Result<(), DocumentError> {
        self.schema.validate(self)
    }
}
