//! Fully qualified domain name validator.
//!
//! Rules applied per label (the parts between dots):
//! - 1..=63 characters
//! - letters, digits, hyphens and non-ASCII letters only
//! - no full-width forms (U+FF01..U+FF5E)
//! - must not start or end with a hyphen
//! - underscores only when explicitly allowed
//!
//! The last label is the TLD: at least two letters, or a punycode `xn--` label.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Validate, ValidationError};

static TLD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:[a-z\u{00A1}-\u{00A8}\u{00AA}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFEF}]{2,}|xn[a-z0-9-]{2,})$",
    )
    .unwrap()
});

static LABEL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z_\u{00A1}-\u{FFFF}0-9-]+$").unwrap());

static FULL_WIDTH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\u{FF01}-\u{FF5E}]").unwrap());

/// Validates fully qualified domain names.
///
/// # Examples
///
/// ```
/// use valid8_validator::validators::Fqdn;
/// use valid8_validator::foundation::Validate;
///
/// let v = Fqdn::new();
/// assert!(v.is_valid("domain.com"));
/// assert!(v.is_valid("xn--froschgrn-x9a.com"));
/// assert!(!v.is_valid("abc"));          // no TLD
/// assert!(!v.is_valid("_.com"));        // underscore
/// assert!(!v.is_valid("domain.com."));  // trailing dot
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fqdn {
    require_tld: bool,
    allow_underscores: bool,
    allow_trailing_dot: bool,
    allow_numeric_tld: bool,
}

impl Fqdn {
    /// Strict defaults: TLD required, no underscores, no trailing dot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            require_tld: true,
            allow_underscores: false,
            allow_trailing_dot: false,
            allow_numeric_tld: false,
        }
    }

    /// Accepts single-label names such as `localhost`.
    #[must_use = "builder methods must be chained or built"]
    pub const fn without_tld(mut self) -> Self {
        self.require_tld = false;
        self
    }

    /// Accepts underscores inside labels.
    #[must_use = "builder methods must be chained or built"]
    pub const fn allow_underscores(mut self) -> Self {
        self.allow_underscores = true;
        self
    }

    /// Accepts one trailing dot (`example.com.`).
    #[must_use = "builder methods must be chained or built"]
    pub const fn allow_trailing_dot(mut self) -> Self {
        self.allow_trailing_dot = true;
        self
    }

    /// Accepts an all-digit TLD.
    #[must_use = "builder methods must be chained or built"]
    pub const fn allow_numeric_tld(mut self) -> Self {
        self.allow_numeric_tld = true;
        self
    }

    fn check_label(&self, label: &str) -> Result<(), ValidationError> {
        if label.chars().count() > 63 {
            return Err(ValidationError::new(
                "label_too_long",
                "Domain labels must be at most 63 characters",
            )
            .with_param("label", label.to_owned()));
        }

        if !LABEL_REGEX.is_match(label) || FULL_WIDTH_REGEX.is_match(label) {
            return Err(ValidationError::new(
                "invalid_label",
                format!("Label '{label}' contains invalid characters"),
            ));
        }

        if label.starts_with('-') || label.ends_with('-') {
            return Err(ValidationError::new(
                "label_hyphen",
                format!("Label '{label}' must not start or end with a hyphen"),
            ));
        }

        if !self.allow_underscores && label.contains('_') {
            return Err(ValidationError::new(
                "label_underscore",
                format!("Label '{label}' must not contain underscores"),
            ));
        }

        Ok(())
    }
}

impl Default for Fqdn {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Fqdn {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if input.is_empty() {
            return Err(ValidationError::empty("Domain name"));
        }

        let name = if self.allow_trailing_dot {
            input.strip_suffix('.').unwrap_or(input)
        } else {
            input
        };

        let labels: Vec<&str> = name.split('.').collect();
        let Some(tld) = labels.last() else {
            return Err(ValidationError::invalid_format("fqdn"));
        };

        if self.require_tld {
            if labels.len() < 2 {
                return Err(ValidationError::new(
                    "missing_tld",
                    "Domain name must have a top-level domain",
                ));
            }
            if !TLD_REGEX.is_match(tld) || tld.chars().any(char::is_whitespace) {
                return Err(ValidationError::new(
                    "invalid_tld",
                    format!("'{tld}' is not a valid top-level domain"),
                ));
            }
        }

        if !self.allow_numeric_tld && !tld.is_empty() && tld.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::new(
                "numeric_tld",
                "Top-level domain must not be numeric",
            ));
        }

        for label in &labels {
            self.check_label(label)?;
        }

        Ok(())
    }
}
