//! Core predicate types
//!
//! - **Trait**: [`Validate`], implemented by every predicate in
//!   [`validators`](crate::validators)
//! - **Error**: [`ValidationError`], the structured rejection a predicate
//!   returns
//!
//! Predicates are pure: same input, same verdict. Callers that only want a
//! boolean use [`Validate::is_valid`].

pub mod error;
pub mod traits;

pub use error::{ErrorParams, ValidationError};
pub use traits::{StrPredicate, Validate};

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
