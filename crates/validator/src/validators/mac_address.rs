//! MAC address validator.
//!
//! Six octets of two hex digits each, separated by colons (`ab:ab:ab:ab:ab:ab`)
//! or hyphens (`AB-AB-AB-AB-AB-AB`). The bare twelve-digit form is opt-in.

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// MAC ADDRESS VALIDATOR
// ============================================================================

/// Validates 48-bit MAC addresses.
///
/// # Examples
///
/// ```
/// use valid8_validator::validators::MacAddress;
/// use valid8_validator::foundation::Validate;
///
/// let v = MacAddress::new();
/// assert!(v.is_valid("01:AB:03:04:05:06"));
/// assert!(v.is_valid("01-AB-03-04-05-06"));
/// assert!(!v.is_valid("1:2:3:4:5:6"));
/// assert!(!v.is_valid("01AB03040506"));
/// assert!(MacAddress::new().allow_no_separator().is_valid("01AB03040506"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacAddress {
    allow_colon: bool,
    allow_hyphen: bool,
    allow_no_separator: bool,
}

impl MacAddress {
    /// Accepts colon- and hyphen-separated addresses.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            allow_colon: true,
            allow_hyphen: true,
            allow_no_separator: false,
        }
    }

    /// Only accepts the colon-separated form.
    #[must_use = "builder methods must be chained or built"]
    pub const fn colon_only(mut self) -> Self {
        self.allow_hyphen = false;
        self.allow_no_separator = false;
        self
    }

    /// Also accepts twelve hex digits with no separator.
    #[must_use = "builder methods must be chained or built"]
    pub const fn allow_no_separator(mut self) -> Self {
        self.allow_no_separator = true;
        self
    }

    fn check_octets<'a>(parts: impl Iterator<Item = &'a str>) -> Result<(), ValidationError> {
        let mut count = 0;
        for part in parts {
            count += 1;
            if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(ValidationError::new(
                    "invalid_hex",
                    format!("Each octet must be exactly 2 hex digits, got '{part}'"),
                ));
            }
        }

        if count == 6 {
            Ok(())
        } else {
            Err(ValidationError::new(
                "invalid_mac_format",
                "MAC address must have 6 octets",
            )
            .with_param("actual", count.to_string()))
        }
    }
}

impl Default for MacAddress {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for MacAddress {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if input.is_empty() {
            return Err(ValidationError::empty("MAC address"));
        }

        if input.contains(':') {
            if !self.allow_colon {
                return Err(ValidationError::invalid_format("MAC address"));
            }
            return Self::check_octets(input.split(':'));
        }

        if input.contains('-') {
            if !self.allow_hyphen {
                return Err(ValidationError::invalid_format("MAC address"));
            }
            return Self::check_octets(input.split('-'));
        }

        if self.allow_no_separator && input.len() == 12 && input.is_ascii() {
            return Self::check_octets((0..6).map(|i| &input[i * 2..i * 2 + 2]));
        }

        Err(ValidationError::invalid_format("MAC address"))
    }
}
