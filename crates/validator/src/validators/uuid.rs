//! UUID validator (RFC 4122 text form, optionally pinned to a version).

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Validate, ValidationError};

static UUID_ANY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$").unwrap()
});
static UUID_V3: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-3[0-9a-f]{3}-[0-9a-f]{4}-[0-9a-f]{12}$").unwrap()
});
static UUID_V4: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .unwrap()
});
static UUID_V5: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-5[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .unwrap()
});

/// Validates UUIDs.
///
/// With no version every hyphenated 8-4-4-4-12 hex string is accepted.
/// Versions 3, 4 and 5 check the version nibble (and the variant nibble for
/// 4 and 5).
///
/// # Examples
///
/// ```
/// use valid8_validator::validators::Uuid;
/// use valid8_validator::foundation::Validate;
///
/// assert!(Uuid::new().is_valid("A987FBC9-4BED-4078-8F07-9141BA07C9F3"));
/// assert!(!Uuid::version(3).is_valid("A987FBC9-4BED-4078-8F07-9141BA07C9F3"));
/// assert!(!Uuid::new().is_valid("934859"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Uuid {
    version: Option<u8>,
}

impl Uuid {
    /// Any version.
    #[must_use]
    pub const fn new() -> Self {
        Self { version: None }
    }

    /// Pins the version. Values other than 3, 4 and 5 mean any version.
    #[must_use]
    pub const fn version(version: u8) -> Self {
        match version {
            3..=5 => Self { version: Some(version) },
            _ => Self::new(),
        }
    }

    fn pattern(self) -> &'static Regex {
        match self.version {
            Some(3) => &UUID_V3,
            Some(4) => &UUID_V4,
            Some(5) => &UUID_V5,
            _ => &UUID_ANY,
        }
    }
}

impl Validate for Uuid {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if self.pattern().is_match(input) {
            return Ok(());
        }
        let error = ValidationError::invalid_format("uuid");
        Err(match self.version {
            Some(version) => error.with_param("version", version.to_string()),
            None => error,
        })
    }
}
