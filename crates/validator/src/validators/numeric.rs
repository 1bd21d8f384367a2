//! Numeric string validators: plain numerals, integers and floats.
//!
//! These check the textual form. Bounds, when set, are checked on the parsed
//! value.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Validate, ValidationError};

static NUMERIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?(?:[0-9]*\.)?[0-9]+$").unwrap());
static NUMERIC_NO_SYMBOLS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());
static INT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-+]?[0-9]+$").unwrap());
static INT_NO_LEADING_ZEROES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[-+]?[1-9][0-9]*|[-+]?0)$").unwrap());
static FLOAT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?(?:[0-9]+)?(?:\.[0-9]*)?(?:[eE][+-]?[0-9]+)?$").unwrap()
});

// ============================================================================
// NUMERIC VALIDATOR
// ============================================================================

/// Validates decimal numerals: optional sign, digits, optional fraction.
///
/// ```
/// use valid8_validator::validators::Numeric;
/// use valid8_validator::foundation::Validate;
///
/// assert!(Numeric::new().is_valid("-00123"));
/// assert!(!Numeric::new().is_valid("1e5"));
/// assert!(!Numeric::new().no_symbols().is_valid("+1"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Numeric {
    no_symbols: bool,
}

impl Numeric {
    #[must_use]
    pub const fn new() -> Self {
        Self { no_symbols: false }
    }

    /// Digits only: no sign, no decimal point.
    #[must_use = "builder methods must be chained or built"]
    pub const fn no_symbols(mut self) -> Self {
        self.no_symbols = true;
        self
    }
}

impl Validate for Numeric {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let pattern = if self.no_symbols {
            &NUMERIC_NO_SYMBOLS_REGEX
        } else {
            &NUMERIC_REGEX
        };
        if pattern.is_match(input) {
            Ok(())
        } else {
            Err(ValidationError::invalid_format("number"))
        }
    }
}

// ============================================================================
// INTEGER VALIDATOR
// ============================================================================

/// Validates integer numerals, optionally within bounds.
///
/// Leading zeroes (`01`, `-01`, `000`) are accepted unless disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Int {
    allow_leading_zeroes: bool,
    min: Option<i64>,
    max: Option<i64>,
}

impl Int {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            allow_leading_zeroes: true,
            min: None,
            max: None,
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn no_leading_zeroes(mut self) -> Self {
        self.allow_leading_zeroes = false;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }
}

impl Default for Int {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Int {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let pattern = if self.allow_leading_zeroes {
            &INT_REGEX
        } else {
            &INT_NO_LEADING_ZEROES_REGEX
        };
        if !pattern.is_match(input) {
            return Err(ValidationError::invalid_format("integer"));
        }

        if self.min.is_none() && self.max.is_none() {
            return Ok(());
        }

        let value: i128 = input
            .parse()
            .map_err(|_| ValidationError::out_of_range("Integer", "i64", input.to_owned()))?;
        check_bounds("Integer", value, self.min.map(i128::from), self.max.map(i128::from))
    }
}

// ============================================================================
// FLOAT VALIDATOR
// ============================================================================

/// Validates floating point numerals (`123.`, `.5`, `-1e-3`), optionally
/// within bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Float {
    min: Option<f64>,
    max: Option<f64>,
}

impl Float {
    #[must_use]
    pub const fn new() -> Self {
        Self { min: None, max: None }
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

impl Validate for Float {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if matches!(input, "" | "." | "-" | "+") || !FLOAT_REGEX.is_match(input) {
            return Err(ValidationError::invalid_format("float"));
        }

        if self.min.is_none() && self.max.is_none() {
            return Ok(());
        }

        let value: f64 = input
            .parse()
            .map_err(|_| ValidationError::invalid_format("float"))?;
        check_bounds("Float", value, self.min, self.max)
    }
}

fn check_bounds<T>(
    what: &'static str,
    value: T,
    min: Option<T>,
    max: Option<T>,
) -> Result<(), ValidationError>
where
    T: PartialOrd + Copy + std::fmt::Display,
{
    if let Some(min) = min {
        if value < min {
            return Err(ValidationError::out_of_range(what, min, value));
        }
    }
    if let Some(max) = max {
        if value > max {
            return Err(ValidationError::out_of_range(what, max, value));
        }
    }
    Ok(())
}
