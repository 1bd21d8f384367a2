//! Field rules
//!
//! Every rule is a plain [`Installer`] function registered in a
//! [`RuleRegistry`] under its field kind and name. The schema builder routes
//! declared options through the registry. [`StringRules`], [`NumberRules`]
//! and [`ArrayRules`] call the same installers from typed methods on
//! [`Field`].
//!
//! # Validator rules
//!
//! Called with `(options, message)`:
//!
//! - `None` or [`OptionValue::Unset`] removes the rule's validator and
//!   installs nothing. `Flag(false)` still installs one.
//! - A configuration object's `message` overrides `message`, which overrides
//!   the field's message table.
//! - Calling a rule again replaces the validator it installed before.
//!
//! # Transform rules
//!
//! Called with a single `should_apply`: `None` is an absent argument and
//! installs the transform, see each rule for explicit arguments.

pub mod array;
pub mod number;
pub mod string;

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;
use valid8_validator::catalog::CatalogError;
use valid8_validator::foundation::StrPredicate;

use crate::cast::to_display_string;
use crate::field::{Field, FieldKind, Predicate};
use crate::options::OptionValue;

/// Installs one rule on a field: `(field, options, message)`.
pub type Installer = fn(&mut Field, Option<&OptionValue>, Option<&str>);

// ============================================================================
// REGISTRY
// ============================================================================

/// Rule installers by field kind and name.
///
/// `Default` registers every built-in rule; [`new`](Self::new) starts empty.
///
/// ```
/// use valid8_schema::{FieldKind, RuleRegistry};
///
/// let registry = RuleRegistry::default();
/// assert!(registry.get(FieldKind::String, "email").is_some());
/// assert!(registry.get(FieldKind::Number, "email").is_none());
/// ```
#[derive(Clone)]
pub struct RuleRegistry {
    installers: IndexMap<FieldKind, IndexMap<String, Installer>>,
}

impl RuleRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            installers: IndexMap::new(),
        }
    }

    /// Registers `installer` as `name` for `kind`, replacing an earlier one.
    pub fn register(
        &mut self,
        kind: FieldKind,
        name: impl Into<String>,
        installer: Installer,
    ) -> &mut Self {
        self.installers
            .entry(kind)
            .or_default()
            .insert(name.into(), installer);
        self
    }

    /// Builder form of [`register`](Self::register).
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, kind: FieldKind, name: impl Into<String>, installer: Installer) -> Self {
        self.register(kind, name, installer);
        self
    }

    #[must_use]
    pub fn get(&self, kind: FieldKind, name: &str) -> Option<Installer> {
        self.installers.get(&kind)?.get(name).copied()
    }

    /// Rule names registered for `kind`, in registration order.
    pub fn names(&self, kind: FieldKind) -> impl Iterator<Item = &str> {
        self.installers
            .get(&kind)
            .into_iter()
            .flat_map(IndexMap::keys)
            .map(String::as_str)
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        for (kind, rules) in [
            (FieldKind::String, string::RULES),
            (FieldKind::Number, number::RULES),
            (FieldKind::Array, array::RULES),
        ] {
            for (name, installer) in rules {
                registry.register(kind, *name, *installer);
            }
        }
        registry
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (kind, rules) in &self.installers {
            map.entry(kind, &rules.keys().collect::<Vec<_>>());
        }
        map.finish()
    }
}

// ============================================================================
// SHARED CONTRACT
// ============================================================================

/// Adapts a string predicate to field values, seen in string form.
pub fn string_predicate(predicate: StrPredicate) -> Predicate {
    Arc::new(move |value: &Value| predicate.is_valid(&to_display_string(value)))
}

/// Replaces the validator for `tag` following the validator rule contract.
/// Returns whether one was installed.
pub(crate) fn install_validator<B>(
    field: &mut Field,
    tag: &'static str,
    options: Option<&OptionValue>,
    message: Option<&str>,
    build: B,
) -> bool
where
    B: FnOnce(&OptionValue) -> Result<Predicate, CatalogError>,
{
    field.uninstall(tag);

    let Some(options) = options.filter(|o| !o.is_unset()) else {
        return false;
    };

    let predicate = match build(options) {
        Ok(predicate) => predicate,
        Err(error) => {
            tracing::warn!(path = field.path(), tag, %error, "rule arguments rejected");
            return false;
        }
    };

    let message = options
        .message()
        .filter(|m| !m.is_empty())
        .or_else(|| message.filter(|m| !m.is_empty()))
        .map_or_else(|| field.messages().resolve(field.kind(), tag).to_owned(), str::to_owned);

    field.install(tag, message, predicate);
    true
}

/// An explicit falsy `should_apply`.
pub(crate) fn explicitly_off(should_apply: Option<&OptionValue>) -> bool {
    should_apply.is_some_and(|o| !o.is_truthy())
}

/// A configuration key as a positional predicate argument, `null` if absent.
pub(crate) fn argument(options: &OptionValue, key: &str) -> Value {
    options.get(key).cloned().unwrap_or(Value::Null)
}

/// Configuration entries other than `message`, as an options object.
pub(crate) fn arguments_object(options: &OptionValue) -> Value {
    Value::Object(
        options
            .arguments()
            .map(|(k, v)| (k.to_owned(), v.clone()))
            .collect(),
    )
}

// ============================================================================
// TYPED EXTENSION TRAITS
// ============================================================================

macro_rules! rule_trait {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(validator $validator:ident => $vinstall:path;)*
            $(transform $transform:ident => $tinstall:path;)*
        }
    ) => {
        $(#[$meta])*
        pub trait $name {
            $(
                fn $validator(
                    &mut self,
                    options: impl Into<OptionValue>,
                    message: Option<&str>,
                ) -> &mut Self;
            )*
            $(
                fn $transform(&mut self, should_apply: Option<OptionValue>) -> &mut Self;
            )*
        }

        impl $name for Field {
            $(
                fn $validator(
                    &mut self,
                    options: impl Into<OptionValue>,
                    message: Option<&str>,
                ) -> &mut Self {
                    $vinstall(self, Some(&options.into()), message);
                    self
                }
            )*
            $(
                fn $transform(&mut self, should_apply: Option<OptionValue>) -> &mut Self {
                    $tinstall(self, should_apply.as_ref(), None);
                    self
                }
            )*
        }
    };
}

rule_trait! {
    /// String field rules.
    ///
    /// ```
    /// use serde_json::json;
    /// use valid8_schema::{Field, FieldKind, OptionValue, StringRules};
    ///
    /// let mut field = Field::new("contact", FieldKind::String);
    /// field
    ///     .mobile(OptionValue::from(json!({"locale": "sw-TZ"})), None)
    ///     .capitalize(None);
    /// assert_eq!(field.validators()[0].tag, "mobile");
    /// ```
    StringRules {
        validator email => string::email;
        validator macaddress => string::macaddress;
        validator ip => string::ip;
        validator fqdn => string::fqdn;
        validator alpha => string::alpha;
        validator alphanumeric => string::alphanumeric;
        validator md5 => string::md5;
        validator uuid => string::uuid;
        validator creditcard => string::creditcard;
        validator base64 => string::base64;
        validator mobile => string::mobile;
        validator mimetype => string::mimetype;
        validator hex => string::hex;
        validator hexcolor => string::hexcolor;
        validator url => string::url;
        validator jwt => string::jwt;
        validator datauri => string::datauri;
        validator phone => string::phone;
        transform capitalize => string::capitalize;
        transform startcase => string::startcase;
    }
}

rule_trait! {
    /// Number field rules.
    NumberRules {
        validator numeric => number::numeric;
        validator integer => number::integer;
        validator float => number::float;
    }
}

rule_trait! {
    /// Array field rules.
    ///
    /// ```
    /// use serde_json::json;
    /// use valid8_schema::{ArrayRules, Field, FieldKind};
    ///
    /// let mut field = Field::new("tags", FieldKind::Array);
    /// field.sort(Some("desc".into()));
    /// assert_eq!(field.transform(json!(["a", null, "c", "b", "a"])), json!(["c", "b", "a"]));
    /// ```
    ArrayRules {
        validator empty => array::empty;
        transform compact => array::compact;
        transform duplicate => array::duplicate;
        transform sort => array::sort;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_registers_every_rule() {
        let registry = RuleRegistry::default();
        assert_eq!(registry.names(FieldKind::String).count(), 20);
        assert_eq!(
            registry.names(FieldKind::Number).collect::<Vec<_>>(),
            ["numeric", "integer", "float"]
        );
        assert_eq!(
            registry.names(FieldKind::Array).collect::<Vec<_>>(),
            ["empty", "compact", "duplicate", "sort"]
        );
        assert_eq!(registry.names(FieldKind::Date).count(), 0);
    }

    #[test]
    fn custom_rules_can_be_registered() {
        fn positive(field: &mut Field, options: Option<&OptionValue>, message: Option<&str>) {
            install_validator(field, "positive", options, message, |_| {
                Ok(Arc::new(|v: &Value| v.as_f64().is_some_and(|n| n > 0.0)))
            });
        }

        let registry = RuleRegistry::new().with(FieldKind::Number, "positive", positive);
        let mut field = Field::new("n", FieldKind::Number);
        field
            .apply(&registry, "positive", Some(&true.into()), Some("must be positive"))
            .unwrap();

        assert_eq!(field.validators()[0].message, "must be positive");
        assert!(!field.validators()[0].check(&serde_json::json!(-1)));
    }
}
