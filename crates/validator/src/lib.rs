//! # valid8-validator
//!
//! String predicates, sanitizers and collection utilities behind valid8's
//! schema field rules.
//!
//! ## Quick Start
//!
//! ```
//! use valid8_validator::prelude::*;
//!
//! assert!(Email::new().is_valid("hans@example.com"));
//! assert!(!Fqdn::new().is_valid("localhost"));
//! assert_eq!(sanitizers::trim("  hi  ", None), "hi");
//! ```
//!
//! ## Named access
//!
//! The [`catalog`] resolves predicates and sanitizers by their registered
//! name (`isEmail`, `isLength`, `trim`, ...) with positional JSON arguments,
//! which is how option-driven registration reaches them.
//!
//! ```
//! use serde_json::json;
//! use valid8_validator::catalog;
//!
//! let length = catalog::predicate("isLength", &[json!(2), json!(4)]).unwrap();
//! assert!(length.is_valid("abc"));
//! assert!(!length.is_valid("abcde"));
//! ```
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators, or implement
//! [`Validate`](foundation::Validate) manually for complex cases.

#![allow(clippy::result_large_err)]

pub mod catalog;
pub mod collection;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod sanitizers;
pub mod validators;
