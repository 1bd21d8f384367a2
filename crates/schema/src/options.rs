//! Declared option values and rule arguments

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;
use valid8_validator::collection;

/// A custom equality used to dedupe array values.
pub type EqualityFn = Arc<dyn Fn(&Value, &Value) -> bool + Send + Sync>;

/// The value of one declared field option, or the argument of a rule.
///
/// `Unset` is the null/absent case: rules treat it as "disable", unlike
/// `Flag(false)`.
#[derive(Clone, Default)]
pub enum OptionValue {
    #[default]
    Unset,
    Flag(bool),
    /// A configuration object, keys in declaration order.
    Config(IndexMap<String, Value>),
    /// A string, number or array.
    Value(Value),
    Equality(EqualityFn),
}

impl OptionValue {
    /// Wraps an equality function.
    pub fn equality<F>(eq: F) -> Self
    where
        F: Fn(&Value, &Value) -> bool + Send + Sync + 'static,
    {
        Self::Equality(Arc::new(eq))
    }

    /// Builds a configuration object from key/value pairs.
    pub fn config<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Self::Config(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// JavaScript truthiness of the option.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Unset => false,
            Self::Flag(b) => *b,
            Self::Config(_) | Self::Equality(_) => true,
            Self::Value(value) => collection::is_truthy(value),
        }
    }

    /// The `message` key of a configuration object.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Config(map) => map.get("message").and_then(Value::as_str),
            _ => None,
        }
    }

    /// A key of a configuration object, `null` treated as absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Config(map) => map.get(key).filter(|v| !v.is_null()),
            _ => None,
        }
    }

    /// Configuration entries other than `message`.
    pub fn arguments(&self) -> impl Iterator<Item = (&str, &Value)> {
        let entries = match self {
            Self::Config(map) => Some(map.iter()),
            _ => None,
        };
        entries
            .into_iter()
            .flatten()
            .filter(|(k, _)| *k != "message")
            .map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Value(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_equality(&self) -> Option<&EqualityFn> {
        match self {
            Self::Equality(eq) => Some(eq),
            _ => None,
        }
    }
}

impl fmt::Debug for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => f.write_str("Unset"),
            Self::Flag(b) => f.debug_tuple("Flag").field(b).finish(),
            Self::Config(map) => f.debug_tuple("Config").field(map).finish(),
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Equality(_) => f.write_str("Equality(..)"),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        Self::Value(Value::String(s.to_owned()))
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        Self::Value(Value::String(s))
    }
}

impl<T: Into<OptionValue>> From<Option<T>> for OptionValue {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Unset, Into::into)
    }
}

/// `null` is `Unset`, booleans are flags, objects are configuration.
impl From<Value> for OptionValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Unset,
            Value::Bool(b) => Self::Flag(b),
            Value::Object(map) => Self::Config(map.into_iter().collect()),
            other => Self::Value(other),
        }
    }
}
