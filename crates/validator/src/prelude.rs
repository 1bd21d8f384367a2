//! Prelude module for convenient imports.
//!
//! `use valid8_validator::prelude::*;` brings in the predicate trait, the
//! error type, every built-in validator and the sanitizer and collection
//! modules.

// ============================================================================
// FOUNDATION
// ============================================================================

pub use crate::foundation::{StrPredicate, Validate, ValidationError, ValidationResult};

// ============================================================================
// VALIDATORS
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// NORMALIZERS
// ============================================================================

pub use crate::collection::{self, SortOrder};
pub use crate::sanitizers;
