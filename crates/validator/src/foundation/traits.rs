//! The predicate trait.

use std::sync::Arc;

use crate::foundation::ValidationError;

/// The trait every predicate implements.
///
/// Generic over the input type so string predicates take `&str` and
/// collection predicates take `&[T]` without copying.
///
/// # Examples
///
/// ```
/// use valid8_validator::foundation::{Validate, ValidationError};
///
/// struct Even;
///
/// impl Validate for Even {
///     type Input = i64;
///
///     fn validate(&self, input: &i64) -> Result<(), ValidationError> {
///         if input % 2 == 0 {
///             Ok(())
///         } else {
///             Err(ValidationError::new("even", "Value must be even"))
///         }
///     }
/// }
///
/// assert!(Even.is_valid(&4));
/// assert!(!Even.is_valid(&3));
/// ```
pub trait Validate {
    /// The type being validated (`?Sized` so `str` and `[T]` work).
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Boolean form of [`validate`](Self::validate), for callers that only
    /// need the verdict.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Arc<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

/// A type-erased, thread-safe string predicate.
pub type StrPredicate = Arc<dyn Validate<Input = str> + Send + Sync>;

#[cfg(test)]
mod tests {
    use super::*;

    struct NonEmpty;

    impl Validate for NonEmpty {
        type Input = str;

        fn validate(&self, input: &str) -> Result<(), ValidationError> {
            if input.is_empty() {
                Err(ValidationError::empty("Input"))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn erased_predicate_delegates() {
        let predicate: StrPredicate = Arc::new(NonEmpty);
        assert!(predicate.is_valid("x"));
        assert!(!predicate.is_valid(""));
    }

    #[test]
    fn boxed_predicate_delegates() {
        let predicate: Box<dyn Validate<Input = str>> = Box::new(NonEmpty);
        assert_eq!(predicate.validate("").unwrap_err().code, "empty");
    }
}
