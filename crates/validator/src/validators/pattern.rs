//! String pattern validators
//!
//! Substring, equality, membership, regex and character-class checks.

use crate::foundation::{Validate, ValidationError};

crate::validator! {
    /// Validates that a string contains a seed substring.
    #[derive(PartialEq, Eq, Hash)]
    pub Contains { seed: String } for str;
    rule(self, input) { input.contains(self.seed.as_str()) }
    error(self, input) {
        ValidationError::new("contains", format!("String must contain '{}'", self.seed))
            .with_param("seed", self.seed.clone())
    }
    new(seed: impl Into<String>) { Self { seed: seed.into() } }
    fn contains(seed: impl Into<String>);
}

crate::validator! {
    /// Validates that a string equals a comparison string exactly.
    #[derive(PartialEq, Eq, Hash)]
    pub Equals { comparison: String } for str;
    rule(self, input) { input == self.comparison }
    error(self, input) {
        ValidationError::new("equals", format!("String must equal '{}'", self.comparison))
            .with_param("comparison", self.comparison.clone())
    }
    new(comparison: impl Into<String>) { Self { comparison: comparison.into() } }
    fn equals(comparison: impl Into<String>);
}

crate::validator! {
    /// Validates that a string is one of the allowed values.
    #[derive(PartialEq, Eq, Hash)]
    pub IsIn { values: Vec<String> } for str;
    rule(self, input) { self.values.iter().any(|v| v == input) }
    error(self, input) {
        ValidationError::new("is_in", "String is not one of the allowed values")
            .with_param("allowed", self.values.join(", "))
    }
    new(values: Vec<String>) { Self { values } }
    fn is_in(values: Vec<String>);
}

// ============================================================================
// REGEX VALIDATOR
// ============================================================================

/// Validates that a string matches a regular expression.
#[derive(Debug, Clone)]
pub struct Matches {
    pattern: regex::Regex,
}

impl Matches {
    /// Compiles `pattern`. `flags` uses the JavaScript letters `i`, `m`, `s`
    /// and ignores `g`.
    ///
    /// # Errors
    ///
    /// Returns the regex error when the pattern does not compile, or when a
    /// flag letter is not supported.
    pub fn new(pattern: &str, flags: &str) -> Result<Self, regex::Error> {
        let mut builder = regex::RegexBuilder::new(pattern);
        for flag in flags.chars() {
            match flag {
                'i' => builder.case_insensitive(true),
                'm' => builder.multi_line(true),
                's' => builder.dot_matches_new_line(true),
                'g' => &mut builder,
                other => {
                    return Err(regex::Error::Syntax(format!("unsupported flag '{other}'")));
                }
            };
        }
        Ok(Self { pattern: builder.build()? })
    }

    /// The compiled pattern source.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Validate for Matches {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if self.pattern.is_match(input) {
            Ok(())
        } else {
            Err(ValidationError::invalid_format("pattern match")
                .with_param("pattern", self.pattern.as_str().to_owned()))
        }
    }
}

/// Compiles a [`Matches`] predicate without flags.
///
/// # Errors
///
/// Returns the regex error when the pattern does not compile.
pub fn matches(pattern: &str) -> Result<Matches, regex::Error> {
    Matches::new(pattern, "")
}

// ============================================================================
// CHARACTER CLASSES
// ============================================================================

crate::validator! {
    /// Validates that a string holds ASCII characters only.
    pub Ascii for str;
    rule(input) { input.is_ascii() }
    error(input) { ValidationError::new("ascii", "String must contain only ASCII characters") }
    fn ascii();
}

crate::validator! {
    /// Validates that a string has no uppercase letters.
    pub Lowercase for str;
    rule(input) { input == input.to_lowercase() }
    error(input) { ValidationError::new("lowercase", "String must be lowercase") }
    fn lowercase();
}

crate::validator! {
    /// Validates that a string has no lowercase letters.
    pub Uppercase for str;
    rule(input) { input == input.to_uppercase() }
    error(input) { ValidationError::new("uppercase", "String must be uppercase") }
    fn uppercase();
}
