//! Default error messages
//!
//! Templates use `{PATH}` and `{VALUE}` placeholders, filled in with
//! [`render`] when a value is rejected.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::field::FieldKind;

const GENERAL: &str = "Validator failed for path `{PATH}` with value `{VALUE}`";

/// Tag of the cast failure entry of a category.
pub const CAST: &str = "cast";

const STRING_DEFAULTS: &[(&str, &str)] = &[
    ("email", "`{VALUE}` is not a valid email address for path `{PATH}`."),
    ("macaddress", "`{VALUE}` is not a valid mac address for path `{PATH}`."),
    ("ip", "`{VALUE}` is not a valid ip address for path `{PATH}`."),
    ("fqdn", "`{VALUE}` is not a valid fully qualified domain name for path `{PATH}`."),
    ("alpha", "`{VALUE}` is not a valid alpha value for path `{PATH}`."),
    ("alphanumeric", "`{VALUE}` is not a valid alphanumeric value for path `{PATH}`."),
    ("md5", "`{VALUE}` is not a valid md5 value for path `{PATH}`."),
    ("uuid", "`{VALUE}` is not a valid uuid value for path `{PATH}`."),
    ("creditcard", "`{VALUE}` is not a valid credit card value for path `{PATH}`."),
    ("base64", "`{VALUE}` is not a valid base64 value for path `{PATH}`."),
    ("mobile", "`{VALUE}` is not a valid mobile phone number value for path `{PATH}`."),
    ("mimetype", "`{VALUE}` is not a valid mimetype value for path `{PATH}`."),
    ("hex", "`{VALUE}` is not a valid hexadecimal value for path `{PATH}`."),
    ("hexcolor", "`{VALUE}` is not a valid hex color for path `{PATH}`."),
    ("url", "`{VALUE}` is not a valid url for path `{PATH}`."),
    ("jwt", "`{VALUE}` is not a valid jwt for path `{PATH}`."),
    ("datauri", "`{VALUE}` is not a valid data uri for path `{PATH}`."),
    ("phone", "`{VALUE}` is not a valid phone number for path `{PATH}`."),
];

const NUMBER_DEFAULTS: &[(&str, &str)] = &[
    ("numeric", "`{VALUE}` is not a valid numeric value for path `{PATH}`."),
    ("integer", "`{VALUE}` is not a valid integer value for path `{PATH}`."),
    ("float", "`{VALUE}` is not a valid float value for path `{PATH}`."),
    (CAST, "Cast to Number failed for value `{VALUE}` at path `{PATH}`."),
];

const ARRAY_DEFAULTS: &[(&str, &str)] = &[("empty", "Path `{PATH}` can not be empty.")];

/// Message templates keyed by field kind and rule tag.
///
/// `Default` holds the built-in messages. Deserializing a partial table fills
/// missing fields from the defaults.
///
/// ```
/// use valid8_schema::{FieldKind, MessageTable};
///
/// let mut table = MessageTable::default();
/// table.set(FieldKind::String, "email", "`{PATH}` needs an email");
///
/// assert_eq!(table.resolve(FieldKind::String, "email"), "`{PATH}` needs an email");
/// assert_eq!(table.resolve(FieldKind::Date, "before"), table.general());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageTable {
    general: String,
    categories: IndexMap<FieldKind, IndexMap<String, String>>,
}

impl Default for MessageTable {
    fn default() -> Self {
        let mut table = Self::empty();
        for (kind, defaults) in [
            (FieldKind::String, STRING_DEFAULTS),
            (FieldKind::Number, NUMBER_DEFAULTS),
            (FieldKind::Array, ARRAY_DEFAULTS),
        ] {
            table.extend(kind, defaults.iter().map(|(tag, msg)| (*tag, *msg)));
        }
        table
    }
}

impl MessageTable {
    /// A table with only the general fallback.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            general: GENERAL.to_owned(),
            categories: IndexMap::new(),
        }
    }

    /// The template for `(kind, tag)`, if one is set.
    #[must_use]
    pub fn get(&self, kind: FieldKind, tag: &str) -> Option<&str> {
        self.categories.get(&kind)?.get(tag).map(String::as_str)
    }

    /// The template for `(kind, tag)`, or the general fallback.
    #[must_use]
    pub fn resolve(&self, kind: FieldKind, tag: &str) -> &str {
        self.get(kind, tag).unwrap_or(&self.general)
    }

    #[must_use]
    pub fn general(&self) -> &str {
        &self.general
    }

    /// Sets one entry, replacing what was there.
    pub fn set(
        &mut self,
        kind: FieldKind,
        tag: impl Into<String>,
        template: impl Into<String>,
    ) -> &mut Self {
        self.categories
            .entry(kind)
            .or_default()
            .insert(tag.into(), template.into());
        self
    }

    /// Adds entries to a category, keeping any already present.
    pub fn extend<I, T, M>(&mut self, kind: FieldKind, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = (T, M)>,
        T: Into<String>,
        M: Into<String>,
    {
        let category = self.categories.entry(kind).or_default();
        for (tag, template) in entries {
            category.entry(tag.into()).or_insert_with(|| template.into());
        }
        self
    }

    /// Replaces the general fallback.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_general(mut self, template: impl Into<String>) -> Self {
        self.general = template.into();
        self
    }

    /// Builder form of [`set`](Self::set).
    #[must_use = "builder methods must be chained or built"]
    pub fn with(
        mut self,
        kind: FieldKind,
        tag: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        self.set(kind, tag, template);
        self
    }
}

/// Fills `{PATH}` and `{VALUE}` in a template.
#[must_use]
pub fn render(template: &str, path: &str, value: &str) -> String {
    template.replace("{PATH}", path).replace("{VALUE}", value)
}
