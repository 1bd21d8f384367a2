//! String length validator, counted in characters.

use crate::foundation::{Validate, ValidationError};

/// Validates that a string's character count falls within `min..=max`.
///
/// ```
/// use valid8_validator::validators::Length;
/// use valid8_validator::foundation::Validate;
///
/// assert!(Length::new(2, Some(3)).is_valid("abc"));
/// assert!(!Length::new(2, Some(3)).is_valid("a"));
/// assert!(Length::new(1, None).is_valid("ŉ 日本"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Length {
    min: usize,
    max: Option<usize>,
}

impl Length {
    #[must_use]
    pub const fn new(min: usize, max: Option<usize>) -> Self {
        Self { min, max }
    }
}

impl Validate for Length {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let count = input.chars().count();

        if count < self.min {
            return Err(ValidationError::new(
                "min_length",
                format!("String must be at least {} characters", self.min),
            )
            .with_param("min", self.min.to_string())
            .with_param("actual", count.to_string()));
        }

        if let Some(max) = self.max.filter(|max| count > *max) {
            return Err(ValidationError::new(
                "max_length",
                format!("String must be at most {max} characters"),
            )
            .with_param("max", max.to_string())
            .with_param("actual", count.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_characters_not_bytes() {
        assert!(Length::new(0, Some(2)).is_valid("日本"));
    }

    #[test]
    fn reports_bounds() {
        let err = Length::new(3, None).validate("ab").unwrap_err();
        assert_eq!(err.code, "min_length");
        assert_eq!(err.param("actual"), Some("2"));

        let err = Length::new(0, Some(1)).validate("ab").unwrap_err();
        assert_eq!(err.code, "max_length");
        assert_eq!(err.param("max"), Some("1"));
    }
}
