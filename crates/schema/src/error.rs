//! Error types
//!
//! [`SchemaError`] is a programmer error caught while building or writing
//! through a schema. [`DocumentError`] carries the values a schema rejected.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::field::FieldKind;

/// Error type for schema construction and document writes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// No field with this path.
    #[error("unknown path `{path}`")]
    UnknownPath { path: String },

    /// No installer with this name for the field kind.
    #[error("no `{name}` rule for {kind} fields")]
    UnknownRule { kind: FieldKind, name: String },

    /// Two fields share a path.
    #[error("duplicate path `{path}`")]
    DuplicatePath { path: String },

    /// A document was built from something other than a JSON object.
    #[error("document must be a JSON object, got {actual}")]
    NotAnObject { actual: String },
}

impl SchemaError {
    /// Machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::UnknownPath { .. } => "SCHEMA_UNKNOWN_PATH",
            Self::UnknownRule { .. } => "SCHEMA_UNKNOWN_RULE",
            Self::DuplicatePath { .. } => "SCHEMA_DUPLICATE_PATH",
            Self::NotAnObject { .. } => "SCHEMA_NOT_AN_OBJECT",
        }
    }
}

// ============================================================================
// REJECTED VALUES
// ============================================================================

/// The first failed rule of one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub path: String,
    /// Rule tag, or the field kind name when the value could not be cast.
    pub tag: Cow<'static, str>,
    /// The rendered message.
    pub message: String,
    /// The offending value.
    pub value: Value,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Every field a document failed on, by path in schema order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("validation failed: {}", summary(.violations))]
pub struct DocumentError {
    pub violations: IndexMap<String, FieldViolation>,
}

impl DocumentError {
    /// `Err` when there are violations.
    pub fn check(violations: IndexMap<String, FieldViolation>) -> Result<(), Self> {
        if violations.is_empty() {
            Ok(())
        } else {
            Err(Self { violations })
        }
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&FieldViolation> {
        self.violations.get(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldViolation> {
        self.violations.values()
    }
}

fn summary(violations: &IndexMap<String, FieldViolation>) -> String {
    violations
        .iter()
        .map(|(path, v)| format!("{path}: {}", v.message))
        .collect::<Vec<_>>()
        .join(", ")
}
