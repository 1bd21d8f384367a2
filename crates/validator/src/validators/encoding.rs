//! Base64 and JSON Web Token validators.

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, URL_SAFE, URL_SAFE_NO_PAD};

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// BASE64 VALIDATOR
// ============================================================================

/// Validates padded base64 text.
///
/// # Examples
///
/// ```
/// use valid8_validator::validators::Base64;
/// use valid8_validator::foundation::Validate;
///
/// assert!(Base64::new().is_valid("Zm9vYmE="));
/// assert!(!Base64::new().is_valid("Zg="));
/// assert!(!Base64::new().is_valid(""));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Base64 {
    url_safe: bool,
}

impl Base64 {
    /// The standard alphabet (`+`, `/`) with `=` padding.
    #[must_use]
    pub const fn new() -> Self {
        Self { url_safe: false }
    }

    /// The URL-safe alphabet (`-`, `_`) with `=` padding.
    #[must_use = "builder methods must be chained or built"]
    pub const fn url_safe(mut self) -> Self {
        self.url_safe = true;
        self
    }
}

impl Validate for Base64 {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if input.is_empty() {
            return Err(ValidationError::empty("Base64 string"));
        }

        let decoded = if self.url_safe {
            URL_SAFE.decode(input)
        } else {
            STANDARD.decode(input)
        };

        decoded.map(|_| ()).map_err(|e| {
            ValidationError::invalid_format("base64").with_param("reason", e.to_string())
        })
    }
}

// ============================================================================
// JWT VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates the shape of a JSON Web Token: two or three dot-separated
    /// unpadded base64url segments. Signatures are not verified.
    pub Jwt for str;
    rule(input) {
        let segments: Vec<&str> = input.split('.').collect();
        (2..=3).contains(&segments.len())
            && segments.iter().all(|s| s.is_empty() || URL_SAFE_NO_PAD.decode(s).is_ok())
            && !segments[0].is_empty()
    }
    error(input) { ValidationError::invalid_format("JWT") }
    fn jwt();
}
