//! Phone number validators.
//!
//! - [`MobilePhone`] matches per-locale mobile numbering plans.
//! - [`Phone`] accepts formatted numbers and can pin them to a set of
//!   countries by calling code.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Validate, ValidationError};
use crate::validators::Locale;

// ============================================================================
// CALLING CODES
// ============================================================================

const CALLING_CODES: &[(&str, &str)] = &[
    ("AE", "971"),
    ("BI", "257"),
    ("CA", "1"),
    ("CD", "243"),
    ("DE", "49"),
    ("ES", "34"),
    ("ET", "251"),
    ("FR", "33"),
    ("GB", "44"),
    ("GH", "233"),
    ("IN", "91"),
    ("KE", "254"),
    ("MW", "265"),
    ("MZ", "258"),
    ("NG", "234"),
    ("RW", "250"),
    ("SS", "211"),
    ("TZ", "255"),
    ("UG", "256"),
    ("US", "1"),
    ("ZA", "27"),
    ("ZM", "260"),
];

/// International calling code for an ISO 3166 alpha-2 country code.
///
/// ```
/// use valid8_validator::validators::calling_code;
///
/// assert_eq!(calling_code("tz"), Some("255"));
/// assert_eq!(calling_code("XX"), None);
/// ```
#[must_use]
pub fn calling_code(country: &str) -> Option<&'static str> {
    CALLING_CODES
        .iter()
        .find(|(iso, _)| iso.eq_ignore_ascii_case(country))
        .map(|(_, code)| *code)
}

/// Returned when a country code has no known calling code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown country `{0}`")]
pub struct UnknownCountry(pub String);

// ============================================================================
// MOBILE PHONE VALIDATOR
// ============================================================================

static MOBILE_AR_AE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:(?:\+?971)|0)?5[024568]\d{7}$").unwrap());
static MOBILE_SW_TZ: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\+?255|0)?[67]\d{8}$").unwrap());
static MOBILE_EN_US: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:\+1|1)?(?: |-)?)?(?:\([2-9][0-9]{2}\)|[2-9][0-9]{2})(?: |-)?[2-9][0-9]{2}(?: |-)?[0-9]{4}$")
        .unwrap()
});
static MOBILE_EN_GB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\+?44|0)7\d{9}$").unwrap());
static MOBILE_EN_IN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\+?91|0)?[6789]\d{9}$").unwrap());
static MOBILE_EN_KE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\+?254|0)(?:7|1)\d{8}$").unwrap());
static MOBILE_DE_DE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\+49)?0?1(?:5[0-25-9]\d|6(?:[23]|0\d?)|7(?:[0-57-9]|6\d))\d{7}$").unwrap()
});
static MOBILE_FR_FR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\+?33|0)[67]\d{8}$").unwrap());
static MOBILE_ES_ES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\+?34)?(?:6\d|7[1234])\d{7}$").unwrap());

fn mobile_pattern(locale: Locale) -> &'static Regex {
    match locale {
        Locale::ArAe => &MOBILE_AR_AE,
        Locale::SwTz => &MOBILE_SW_TZ,
        Locale::EnUs => &MOBILE_EN_US,
        Locale::EnGb => &MOBILE_EN_GB,
        Locale::EnIn => &MOBILE_EN_IN,
        Locale::EnKe => &MOBILE_EN_KE,
        Locale::DeDe => &MOBILE_DE_DE,
        Locale::FrFr => &MOBILE_FR_FR,
        Locale::EsEs => &MOBILE_ES_ES,
    }
}

/// Validates mobile numbers against one or more locales' numbering plans.
///
/// With no locale every supported plan is tried.
///
/// # Examples
///
/// ```
/// use valid8_validator::validators::{Locale, MobilePhone};
/// use valid8_validator::foundation::Validate;
///
/// assert!(MobilePhone::any().is_valid("+971502674453"));
/// assert!(MobilePhone::locale(Locale::SwTz).is_valid("0714080898"));
/// assert!(!MobilePhone::locale(Locale::SwTz).is_valid("0502674453"));
/// assert!(!MobilePhone::any().strict().is_valid("0714080898"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MobilePhone {
    locales: Vec<Locale>,
    strict: bool,
}

impl MobilePhone {
    /// Tries every supported locale.
    #[must_use]
    pub const fn any() -> Self {
        Self {
            locales: Vec::new(),
            strict: false,
        }
    }

    /// Only one locale's plan.
    #[must_use]
    pub fn locale(locale: Locale) -> Self {
        Self {
            locales: vec![locale],
            strict: false,
        }
    }

    /// Any of the given locales' plans.
    #[must_use]
    pub fn locales(locales: impl IntoIterator<Item = Locale>) -> Self {
        Self {
            locales: locales.into_iter().collect(),
            strict: false,
        }
    }

    /// Requires the international form with a leading `+`.
    #[must_use = "builder methods must be chained or built"]
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }
}

impl Validate for MobilePhone {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if self.strict && !input.starts_with('+') {
            return Err(ValidationError::new(
                "phone_missing_country_code",
                "Mobile number must start with '+' and a country code",
            ));
        }

        let matched = if self.locales.is_empty() {
            Locale::ALL.iter().any(|l| mobile_pattern(*l).is_match(input))
        } else {
            self.locales.iter().any(|l| mobile_pattern(*l).is_match(input))
        };

        if matched {
            Ok(())
        } else {
            Err(ValidationError::invalid_format("mobile phone number"))
        }
    }
}

// ============================================================================
// PHONE NUMBER VALIDATOR
// ============================================================================

/// Validates formatted phone numbers.
///
/// Spaces, dashes, dots and parentheses are allowed; a `+` may only lead.
/// After normalization to E.164 the number must have 7 to 15 digits. When
/// countries are set the number must belong to one of them; national
/// numbers (leading `0`) are read in the first country.
///
/// # Examples
///
/// ```
/// use valid8_validator::validators::Phone;
/// use valid8_validator::foundation::Validate;
///
/// assert!(Phone::new().is_valid("+1 (415) 555-1234"));
///
/// let east_africa = Phone::new().countries(["TZ", "KE"]).unwrap();
/// assert!(east_africa.is_valid("0714 080 898"));
/// assert!(east_africa.is_valid("+254 712 345678"));
/// assert!(!east_africa.is_valid("+44 20 7123 4567"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone {
    min_digits: usize,
    max_digits: usize,
    countries: Vec<&'static str>,
}

impl Phone {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_digits: 7,
            max_digits: 15,
            countries: Vec::new(),
        }
    }

    /// Restricts numbers to the given ISO 3166 alpha-2 countries.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownCountry`] for a code without a known calling code.
    pub fn countries<I, S>(mut self, countries: I) -> Result<Self, UnknownCountry>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.countries = countries
            .into_iter()
            .map(|c| calling_code(c.as_ref()).ok_or_else(|| UnknownCountry(c.as_ref().to_owned())))
            .collect::<Result<_, _>>()?;
        Ok(self)
    }

    fn check_characters(input: &str) -> Result<(), ValidationError> {
        let allowed = |c: char| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')' | '.');
        if !input.chars().all(allowed) {
            return Err(ValidationError::new(
                "phone_invalid_chars",
                "Phone number contains invalid characters",
            ));
        }

        if input.rfind('+').is_some_and(|pos| pos != 0) {
            return Err(ValidationError::new(
                "phone_plus_position",
                "'+' can only appear at the start of the phone number",
            ));
        }

        let open = input.chars().filter(|&c| c == '(').count();
        let close = input.chars().filter(|&c| c == ')').count();
        if open != close {
            return Err(ValidationError::new(
                "phone_unbalanced_parens",
                "Phone number has unbalanced parentheses",
            ));
        }

        Ok(())
    }
}

impl Default for Phone {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Phone {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if input.trim().is_empty() {
            return Err(ValidationError::empty("Phone number"));
        }

        Self::check_characters(input)?;

        let normalized = e164_digits(input, self.countries.first().copied());
        let count = normalized.digits.len();
        if count < self.min_digits || count > self.max_digits {
            return Err(ValidationError::new(
                "phone_digit_count",
                format!(
                    "Phone number must have {} to {} digits",
                    self.min_digits, self.max_digits
                ),
            )
            .with_param("actual", count.to_string()));
        }

        if !self.countries.is_empty() {
            let belongs = normalized.international
                && self.countries.iter().any(|code| normalized.digits.starts_with(code));
            if !belongs {
                return Err(ValidationError::new(
                    "phone_country",
                    "Phone number does not belong to an allowed country",
                ));
            }
        }

        Ok(())
    }
}

pub(crate) struct E164Digits {
    pub(crate) digits: String,
    pub(crate) international: bool,
}

/// Strips formatting and resolves the calling code: `+` and `00` prefixes
/// are international, a leading `0` is national in `default_code`.
pub(crate) fn e164_digits(input: &str, default_code: Option<&str>) -> E164Digits {
    let trimmed = input.trim();
    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();

    if trimmed.starts_with('+') {
        return E164Digits { digits, international: true };
    }

    if let Some(rest) = digits.strip_prefix("00") {
        return E164Digits { digits: rest.to_owned(), international: true };
    }

    match (default_code, digits.strip_prefix('0')) {
        (Some(code), Some(national)) => E164Digits {
            digits: format!("{code}{national}"),
            international: true,
        },
        (Some(code), None) if digits.starts_with(code) => E164Digits { digits, international: true },
        _ => E164Digits { digits, international: false },
    }
}
