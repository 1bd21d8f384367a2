//! Date ordering validators.
//!
//! Inputs and reference dates are parsed as RFC 3339 timestamps
//! (`2024-03-01T10:00:00Z`), naive date-times (`2024-03-01T10:00:00`, read as
//! UTC) or plain dates (`2024-03-01`, midnight UTC).

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::foundation::{Validate, ValidationError};

/// Parses the date formats the date validators accept.
#[must_use]
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ordering {
    Before,
    After,
}

fn check(
    ordering: Ordering,
    input: &str,
    reference: DateTime<Utc>,
) -> Result<(), ValidationError> {
    let Some(value) = parse_date(input) else {
        return Err(ValidationError::invalid_format("date"));
    };

    let accepted = match ordering {
        Ordering::Before => value < reference,
        Ordering::After => value > reference,
    };

    if accepted {
        Ok(())
    } else {
        let (code, message) = match ordering {
            Ordering::Before => ("before", "Date must be before the reference date"),
            Ordering::After => ("after", "Date must be after the reference date"),
        };
        Err(ValidationError::new(code, message).with_param("reference", reference.to_rfc3339()))
    }
}

/// Accepts dates strictly before a reference date (default: now).
///
/// ```
/// use valid8_validator::validators::{Before, parse_date};
/// use valid8_validator::foundation::Validate;
///
/// let v = Before::new(parse_date("2020-01-01").unwrap());
/// assert!(v.is_valid("2019-12-31"));
/// assert!(!v.is_valid("2020-01-01T00:00:00Z"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Before {
    reference: Option<DateTime<Utc>>,
}

impl Before {
    #[must_use]
    pub const fn new(reference: DateTime<Utc>) -> Self {
        Self { reference: Some(reference) }
    }

    /// Compares against the current time at each check.
    #[must_use]
    pub const fn now() -> Self {
        Self { reference: None }
    }
}

impl Validate for Before {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        check(Ordering::Before, input, self.reference.unwrap_or_else(Utc::now))
    }
}

/// Accepts dates strictly after a reference date (default: now).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct After {
    reference: Option<DateTime<Utc>>,
}

impl After {
    #[must_use]
    pub const fn new(reference: DateTime<Utc>) -> Self {
        Self { reference: Some(reference) }
    }

    #[must_use]
    pub const fn now() -> Self {
        Self { reference: None }
    }
}

impl Validate for After {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        check(Ordering::After, input, self.reference.unwrap_or_else(Utc::now))
    }
}
