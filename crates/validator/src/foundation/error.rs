//! Error type for predicate failures
//!
//! A predicate either accepts its input or explains why not. The explanation
//! is a machine-readable `code` plus an English `message`, and optionally a
//! few parameters (the expected format, the offending fragment, a bound).
//!
//! All string fields use `Cow<'static, str>` so the common case of static
//! codes and messages never allocates.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

/// Parameters attached to an error; almost always zero to two entries.
pub type ErrorParams = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>;

/// A predicate rejection.
///
/// # Examples
///
/// ```
/// use valid8_validator::foundation::ValidationError;
///
/// let error = ValidationError::invalid_format("email").with_param("input", "a@b");
/// assert_eq!(error.code, "invalid_format");
/// assert_eq!(error.param("expected"), Some("email"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Error code for programmatic handling, e.g. `invalid_format`, `luhn`.
    pub code: Cow<'static, str>,

    /// Human-readable message in English.
    pub message: Cow<'static, str>,

    /// Ordered key/value parameters.
    pub params: ErrorParams,
}

impl ValidationError {
    /// Creates a new error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: SmallVec::new(),
        }
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// The input does not have the shape named by `expected`.
    pub fn invalid_format(expected: impl Into<Cow<'static, str>>) -> Self {
        let expected = expected.into();
        Self::new("invalid_format", format!("Value is not a valid {expected}"))
            .with_param("expected", expected)
    }

    /// The input is empty where content is required.
    pub fn empty(what: &'static str) -> Self {
        Self::new("empty", format!("{what} cannot be empty"))
    }

    /// The input parses but falls outside a bound.
    pub fn out_of_range(
        what: &'static str,
        bound: impl fmt::Display,
        actual: impl fmt::Display,
    ) -> Self {
        Self::new("out_of_range", format!("{what} is out of range"))
            .with_param("bound", bound.to_string())
            .with_param("actual", actual.to_string())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;

        if !self.params.is_empty() {
            write!(f, " (")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, ")")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}
