//! Option-driven registration of catalog predicates
//!
//! The [`Registrar`] plugin walks every field and, for each declared option
//! named after a catalog predicate (`isEmail`, `contains`, `isBefore`, ...),
//! appends a validator built from that predicate. Sanitizers, meta members
//! and the configured exclusions are skipped.

use serde::{Deserialize, Serialize};
use smallvec::smallvec;
use valid8_validator::catalog::{self, Args, Member};

use crate::field::{Field, ValidatorDescriptor};
use crate::messages::MessageTable;
use crate::options::OptionValue;
use crate::rules::string_predicate;
use crate::schema::{Plugin, Schema};

/// Option names the registrar never treats as predicates.
const RESERVED: &[&str] = &["version", "extend", "init"];

/// Registrar settings.
///
/// ```
/// use valid8_schema::RegistrarConfig;
///
/// let config: RegistrarConfig =
///     serde_json::from_str(r#"{"excluded": ["contains"]}"#).unwrap();
/// assert_eq!(config.excluded, ["contains"]);
/// assert!(RegistrarConfig::default().excluded.iter().any(|name| name == "trim"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrarConfig {
    /// Option names to skip.
    pub excluded: Vec<String>,
    /// Default messages. `None` uses each field's own table.
    pub messages: Option<MessageTable>,
}

impl Default for RegistrarConfig {
    fn default() -> Self {
        Self {
            excluded: RESERVED
                .iter()
                .copied()
                .chain(catalog::sanitizer_names())
                .map(str::to_owned)
                .collect(),
            messages: None,
        }
    }
}

/// Appends catalog predicates named by field options.
///
/// Every run appends, so applying the registrar twice leaves two validators
/// per matching option.
///
/// ```
/// use serde_json::json;
/// use valid8_schema::{Field, FieldKind, Registrar, Schema};
///
/// let mut schema = Schema::builder()
///     .field(Field::new("email", FieldKind::String).with_option("isEmail", true))
///     .build()
///     .unwrap();
/// schema.plugin(&Registrar::new());
///
/// let field = schema.field("email").unwrap();
/// assert_eq!(field.validators()[0].tag, "email");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registrar {
    config: RegistrarConfig,
}

impl Registrar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_config(config: RegistrarConfig) -> Self {
        Self { config }
    }

    /// Adds `name` to the exclusion list.
    #[must_use = "builder methods must be chained or built"]
    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.config.excluded.push(name.into());
        self
    }

    #[must_use]
    pub const fn config(&self) -> &RegistrarConfig {
        &self.config
    }

    fn is_excluded(&self, name: &str) -> bool {
        self.config.excluded.iter().any(|excluded| excluded == name)
    }

    /// Appends a validator for every matching option of `field`. Returns how
    /// many were appended.
    pub fn register(&self, field: &mut Field) -> usize {
        let declared: Vec<(String, OptionValue)> = field
            .options()
            .iter()
            .filter(|(name, _)| !self.is_excluded(name))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();

        let mut appended = 0;
        for (name, option) in &declared {
            let Some(Member::Predicate(factory)) = catalog::lookup(name) else {
                continue;
            };
            let Some((args, message)) = arguments(option) else {
                tracing::warn!(
                    path = field.path(),
                    option = %name,
                    "option is not a predicate argument"
                );
                continue;
            };
            let predicate = match factory(&args) {
                Ok(predicate) => predicate,
                Err(error) => {
                    tracing::warn!(path = field.path(), option = %name, %error, "option skipped");
                    continue;
                }
            };

            let tag = tag_for(name);
            let message = message.map_or_else(
                || {
                    self.config
                        .messages
                        .as_ref()
                        .unwrap_or_else(|| field.messages())
                        .resolve(field.kind(), &tag)
                        .to_owned()
                },
                str::to_owned,
            );

            field.push_validator(ValidatorDescriptor::new(
                tag,
                message,
                string_predicate(predicate),
            ));
            appended += 1;
        }
        appended
    }
}

impl Plugin for Registrar {
    fn apply(&self, schema: &mut Schema) {
        let mut total = 0;
        for (_, field) in schema.fields_mut() {
            total += self.register(field);
        }
        tracing::debug!(validators = total, "registrar applied");
    }
}

/// Positional arguments and message for an option, `None` when the option
/// cannot be passed to a predicate.
fn arguments(option: &OptionValue) -> Option<(Args, Option<&str>)> {
    match option {
        OptionValue::Unset | OptionValue::Equality(_) => None,
        OptionValue::Flag(_) => Some((Args::new(), None)),
        OptionValue::Value(value) => Some((smallvec![value.clone()], None)),
        OptionValue::Config(_) => Some((
            option.arguments().map(|(_, v)| v.clone()).collect(),
            option.message(),
        )),
    }
}

/// The rule tag of a catalog member: `isEmail` is `email`, `contains` stays
/// `contains`.
fn tag_for(name: &str) -> String {
    let Some(rest) = name.strip_prefix("is") else {
        return name.to_owned();
    };
    let mut chars = rest.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => name.to_owned(),
    }
}
