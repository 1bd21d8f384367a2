//! # valid8-schema
//!
//! Declarative validation and normalization rules for schema field types,
//! and the small schema/document host they install into.
//!
//! Rules are installed three ways:
//!
//! - declared field options, routed through a [`RuleRegistry`] when the
//!   schema is built;
//! - the typed extension traits [`StringRules`], [`NumberRules`] and
//!   [`ArrayRules`] on [`Field`];
//! - the [`Registrar`] plugin, which turns options named after catalog
//!   predicates (`isEmail`, `isLength`, ...) into validators.
//!
//! ```
//! use serde_json::json;
//! use valid8_schema::prelude::*;
//!
//! let mut schema = Schema::builder()
//!     .field(Field::new("email", FieldKind::String).with_option("email", true))
//!     .field(Field::new("age", FieldKind::Number).with_option("integer", true))
//!     .field(
//!         Field::new("tags", FieldKind::Array)
//!             .with_option("sort", true)
//!             .with_option("empty", false),
//!     )
//!     .field(Field::new("code", FieldKind::String).with_option("isUppercase", true))
//!     .build()
//!     .unwrap();
//! schema.plugin(&Registrar::new());
//!
//! let doc = schema
//!     .document(json!({"email": "x", "age": "7", "tags": ["b", "a", "b"], "code": "ab"}))
//!     .unwrap();
//! assert_eq!(doc.get("tags"), Some(&json!(["a", "b"])));
//!
//! let err = schema.validate(&doc).unwrap_err();
//! assert_eq!(err.get("email").unwrap().tag, "email");
//! assert_eq!(err.get("code").unwrap().tag, "uppercase");
//! assert!(err.get("age").is_none());
//! ```

pub mod cast;
pub mod document;
pub mod error;
pub mod field;
pub mod messages;
pub mod options;
pub mod registrar;
pub mod rules;
pub mod schema;

pub use document::Document;
pub use error::{DocumentError, FieldViolation, SchemaError};
pub use field::{
    Field, FieldContext, FieldKind, Predicate, Transform, TransformFn, ValidatorDescriptor,
};
pub use messages::MessageTable;
pub use options::{EqualityFn, OptionValue};
pub use registrar::{Registrar, RegistrarConfig};
pub use rules::{ArrayRules, Installer, NumberRules, RuleRegistry, StringRules};
pub use schema::{Plugin, Schema, SchemaBuilder};

pub mod prelude {
    pub use crate::document::Document;
    pub use crate::error::{DocumentError, FieldViolation, SchemaError};
    pub use crate::field::{Field, FieldKind};
    pub use crate::messages::MessageTable;
    pub use crate::options::OptionValue;
    pub use crate::registrar::{Registrar, RegistrarConfig};
    pub use crate::rules::{ArrayRules, NumberRules, RuleRegistry, StringRules};
    pub use crate::schema::{Plugin, Schema};
}
