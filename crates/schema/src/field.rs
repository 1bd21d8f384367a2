//! Field descriptors
//!
//! A [`Field`] is one named, typed value slot of a [`Schema`](crate::Schema).
//! It owns its declared options, the ordered validator list checked by
//! [`Schema::validate`](crate::Schema::validate) and the ordered transform
//! list applied by [`Document::set`](crate::Document::set).

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SchemaError;
use crate::messages::MessageTable;
use crate::options::OptionValue;
use crate::rules::RuleRegistry;

/// A shared value predicate.
pub type Predicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// A shared value transform.
pub type TransformFn = Arc<dyn Fn(Value, &FieldContext<'_>) -> Value + Send + Sync>;

// ============================================================================
// FIELD KIND
// ============================================================================

/// The type category of a field. Rules and default messages are grouped by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    String,
    Number,
    Array,
    Date,
}

impl FieldKind {
    pub const ALL: [Self; 4] = [Self::String, Self::Number, Self::Array, Self::Date];

    /// The type name reported when a value cannot be cast to this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Number => "Number",
            Self::Array => "Array",
            Self::Date => "Date",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// DESCRIPTORS
// ============================================================================

/// One installed check: predicate, message template and rule tag.
#[derive(Clone)]
pub struct ValidatorDescriptor {
    pub predicate: Predicate,
    pub message: String,
    pub tag: Cow<'static, str>,
}

impl ValidatorDescriptor {
    pub fn new(
        tag: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
        predicate: Predicate,
    ) -> Self {
        Self {
            predicate,
            message: message.into(),
            tag: tag.into(),
        }
    }

    /// Runs the predicate.
    #[must_use]
    pub fn check(&self, value: &Value) -> bool {
        (self.predicate)(value)
    }
}

impl fmt::Debug for ValidatorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorDescriptor")
            .field("tag", &self.tag)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// One installed value transform.
#[derive(Clone)]
pub struct Transform {
    pub tag: &'static str,
    pub apply: TransformFn,
}

impl Transform {
    pub fn new(tag: &'static str, apply: TransformFn) -> Self {
        Self { tag, apply }
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform").field("tag", &self.tag).finish_non_exhaustive()
    }
}

/// What a transform sees of its field besides the value.
#[derive(Debug, Clone, Copy)]
pub struct FieldContext<'a> {
    pub path: &'a str,
    pub kind: FieldKind,
    pub options: &'a IndexMap<String, OptionValue>,
}

// ============================================================================
// FIELD
// ============================================================================

/// One schema field.
///
/// Rules installed through [`install`](Self::install) keep at most one
/// validator per tag: the previous predicate of that tag is found by identity
/// and removed first. [`push_validator`](Self::push_validator) appends without
/// that guard.
///
/// ```
/// use serde_json::json;
/// use valid8_schema::{Field, FieldKind, StringRules};
///
/// let mut field = Field::new("email", FieldKind::String);
/// field.email(true, None).email(true, Some("bad address"));
///
/// assert_eq!(field.validators().len(), 1);
/// assert_eq!(field.validators()[0].message, "bad address");
/// assert!(!field.validators()[0].check(&json!("nope")));
/// ```
#[derive(Clone)]
pub struct Field {
    path: String,
    kind: FieldKind,
    options: IndexMap<String, OptionValue>,
    validators: Vec<ValidatorDescriptor>,
    transforms: Vec<Transform>,
    installed: IndexMap<&'static str, Predicate>,
    installed_transforms: IndexMap<&'static str, TransformFn>,
    messages: Arc<MessageTable>,
}

impl Field {
    #[must_use]
    pub fn new(path: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            path: path.into(),
            kind,
            options: IndexMap::new(),
            validators: Vec::new(),
            transforms: Vec::new(),
            installed: IndexMap::new(),
            installed_transforms: IndexMap::new(),
            messages: Arc::new(MessageTable::default()),
        }
    }

    /// Declares an option. Declared options are routed to installers when the
    /// field is added to a schema.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.options.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Declared options, in declaration order.
    #[must_use]
    pub const fn options(&self) -> &IndexMap<String, OptionValue> {
        &self.options
    }

    #[must_use]
    pub fn option(&self, name: &str) -> Option<&OptionValue> {
        self.options.get(name)
    }

    #[must_use]
    pub fn validators(&self) -> &[ValidatorDescriptor] {
        &self.validators
    }

    pub const fn validators_mut(&mut self) -> &mut Vec<ValidatorDescriptor> {
        &mut self.validators
    }

    #[must_use]
    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    /// The message table default messages are read from.
    #[must_use]
    pub fn messages(&self) -> &MessageTable {
        &self.messages
    }

    pub(crate) fn set_messages(&mut self, messages: Arc<MessageTable>) {
        self.messages = messages;
    }

    pub(crate) fn context(&self) -> FieldContext<'_> {
        FieldContext {
            path: &self.path,
            kind: self.kind,
            options: &self.options,
        }
    }

    // ------------------------------------------------------------------------
    // Validators
    // ------------------------------------------------------------------------

    /// Appends a validator.
    pub fn push_validator(&mut self, descriptor: ValidatorDescriptor) -> &mut Self {
        tracing::debug!(path = %self.path, tag = %descriptor.tag, "validator appended");
        self.validators.push(descriptor);
        self
    }

    /// Installs the validator for `tag`, replacing the one a previous call
    /// installed.
    pub fn install(
        &mut self,
        tag: &'static str,
        message: impl Into<String>,
        predicate: Predicate,
    ) -> &mut Self {
        self.uninstall(tag);
        self.installed.insert(tag, Arc::clone(&predicate));
        self.validators.push(ValidatorDescriptor::new(tag, message, predicate));
        tracing::debug!(path = %self.path, tag, "validator installed");
        self
    }

    /// Removes the validator a previous [`install`](Self::install) of `tag`
    /// added. Validators appended under the same tag are kept.
    pub fn uninstall(&mut self, tag: &str) -> &mut Self {
        if let Some(previous) = self.installed.shift_remove(tag) {
            self.validators.retain(|v| !Arc::ptr_eq(&v.predicate, &previous));
            tracing::debug!(path = %self.path, tag, "validator removed");
        }
        self
    }

    // ------------------------------------------------------------------------
    // Transforms
    // ------------------------------------------------------------------------

    /// Appends a transform.
    pub fn push_transform(&mut self, tag: &'static str, apply: TransformFn) -> &mut Self {
        tracing::debug!(path = %self.path, tag, "transform appended");
        self.transforms.push(Transform::new(tag, apply));
        self
    }

    /// Installs the transform for `tag`, replacing the one a previous call
    /// installed.
    pub fn install_transform(&mut self, tag: &'static str, apply: TransformFn) -> &mut Self {
        self.uninstall_transform(tag);
        self.installed_transforms.insert(tag, Arc::clone(&apply));
        self.push_transform(tag, apply)
    }

    pub fn uninstall_transform(&mut self, tag: &str) -> &mut Self {
        if let Some(previous) = self.installed_transforms.shift_remove(tag) {
            self.transforms.retain(|t| !Arc::ptr_eq(&t.apply, &previous));
            tracing::debug!(path = %self.path, tag, "transform removed");
        }
        self
    }

    /// Runs every transform over `value`, in installation order.
    #[must_use]
    pub fn transform(&self, value: Value) -> Value {
        let context = self.context();
        self.transforms.iter().fold(value, |value, transform| {
            tracing::trace!(path = %self.path, tag = transform.tag, "applying transform");
            (transform.apply)(value, &context)
        })
    }

    // ------------------------------------------------------------------------
    // Rules
    // ------------------------------------------------------------------------

    /// Runs the installer `name` registered for this field's kind.
    ///
    /// `options` of `None` is an absent argument; see the individual rules
    /// for what that means.
    pub fn apply(
        &mut self,
        registry: &RuleRegistry,
        name: &str,
        options: Option<&OptionValue>,
        message: Option<&str>,
    ) -> Result<&mut Self, SchemaError> {
        let installer = registry
            .get(self.kind, name)
            .ok_or_else(|| SchemaError::UnknownRule {
                kind: self.kind,
                name: name.to_owned(),
            })?;
        installer(self, options, message);
        Ok(self)
    }

    /// Routes every declared option with a registered installer to it.
    pub(crate) fn apply_declared(&mut self, registry: &RuleRegistry) {
        let declared: Vec<(String, OptionValue)> = self
            .options
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();

        for (name, value) in &declared {
            if let Some(installer) = registry.get(self.kind, name) {
                installer(self, Some(value), None);
            }
        }
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("path", &self.path)
            .field("kind", &self.kind)
            .field("options", &self.options)
            .field("validators", &self.validators)
            .field("transforms", &self.transforms)
            .finish_non_exhaustive()
    }
}
