//! Letter-only and letter-or-digit predicates, per locale.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::ValidationError;
use crate::validators::Locale;

// ============================================================================
// PATTERNS
// ============================================================================

static ALPHA_LATIN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^[a-z]+$").unwrap());
static ALPHA_DE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^[a-zäöüß]+$").unwrap());
static ALPHA_FR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-zàâæçéèêëïîôœùûüÿ]+$").unwrap());
static ALPHA_ES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-záéíñóúü]+$").unwrap());
static ALPHA_AR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\u{0621}-\u{064A}]+$").unwrap());

static ALNUM_LATIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[0-9a-z]+$").unwrap());
static ALNUM_DE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[0-9a-zäöüß]+$").unwrap());
static ALNUM_FR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[0-9a-zàâæçéèêëïîôœùûüÿ]+$").unwrap());
static ALNUM_ES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[0-9a-záéíñóúü]+$").unwrap());
static ALNUM_AR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\u{0660}-\u{0669}\u{0621}-\u{064A}]+$").unwrap());

fn alpha_pattern(locale: Locale) -> &'static Regex {
    match locale {
        Locale::EnUs | Locale::EnGb | Locale::EnIn | Locale::EnKe | Locale::SwTz => &ALPHA_LATIN,
        Locale::DeDe => &ALPHA_DE,
        Locale::FrFr => &ALPHA_FR,
        Locale::EsEs => &ALPHA_ES,
        Locale::ArAe => &ALPHA_AR,
    }
}

fn alphanumeric_pattern(locale: Locale) -> &'static Regex {
    match locale {
        Locale::EnUs | Locale::EnGb | Locale::EnIn | Locale::EnKe | Locale::SwTz => &ALNUM_LATIN,
        Locale::DeDe => &ALNUM_DE,
        Locale::FrFr => &ALNUM_FR,
        Locale::EsEs => &ALNUM_ES,
        Locale::ArAe => &ALNUM_AR,
    }
}

// ============================================================================
// PREDICATES
// ============================================================================

crate::validator! {
    /// Accepts non-empty strings made only of the locale's letters.
    ///
    /// ```
    /// use valid8_validator::validators::{Alpha, Locale};
    /// use valid8_validator::foundation::Validate;
    ///
    /// assert!(Alpha::new(Locale::EnUs).is_valid("FoObar"));
    /// assert!(!Alpha::new(Locale::EnUs).is_valid("Heiß"));
    /// assert!(Alpha::new(Locale::DeDe).is_valid("Heiß"));
    /// ```
    pub Alpha { locale: Locale } for str;
    rule(self, input) { alpha_pattern(self.locale).is_match(input) }
    error(self, input) {
        ValidationError::invalid_format("alpha string").with_param("locale", self.locale.tag())
    }
    new(locale: Locale) { Self { locale } }
    fn alpha(locale: Locale);
}

crate::validator! {
    /// Accepts non-empty strings made only of the locale's letters and digits.
    pub Alphanumeric { locale: Locale } for str;
    rule(self, input) { alphanumeric_pattern(self.locale).is_match(input) }
    error(self, input) {
        ValidationError::invalid_format("alphanumeric string")
            .with_param("locale", self.locale.tag())
    }
    new(locale: Locale) { Self { locale } }
    fn alphanumeric(locale: Locale);
}
