//! Credit card number validator with Luhn checksum.
//!
//! Spaces and hyphens between digit groups are ignored. The digits must
//! match a known issuer's prefix and length, then pass the Luhn check.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// CARD TYPES
// ============================================================================

static VISA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^4\d{12}(?:\d{3,6})?$").unwrap());
static MASTERCARD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:5[1-5]\d{2}|222[1-9]|22[3-9]\d|2[3-6]\d{2}|27[01]\d|2720)\d{12}$").unwrap()
});
static AMEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^3[47]\d{13}$").unwrap());
static DINERS_CLUB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^3(?:0[0-5]|[68]\d)\d{11}$").unwrap());
static DISCOVER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^6(?:011|5\d{2})\d{12,15}$").unwrap());
static JCB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:2131|1800|35\d{3})\d{11}$").unwrap());
static UNION_PAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:6[27]\d{14}|81\d{14,17})$").unwrap());

/// Card issuer families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardType {
    Visa,
    Mastercard,
    Amex,
    DinersClub,
    Discover,
    Jcb,
    UnionPay,
}

impl CardType {
    /// Every issuer, in detection order.
    pub const ALL: [Self; 7] = [
        Self::Visa,
        Self::Mastercard,
        Self::Amex,
        Self::DinersClub,
        Self::Discover,
        Self::Jcb,
        Self::UnionPay,
    ];

    /// Detects the issuer of a digits-only card number.
    #[must_use]
    pub fn detect(digits: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.pattern().is_match(digits))
    }

    /// Parses a provider name such as `visa` or `amex`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "visa" => Some(Self::Visa),
            "mastercard" => Some(Self::Mastercard),
            "amex" | "americanexpress" => Some(Self::Amex),
            "dinersclub" | "diners" => Some(Self::DinersClub),
            "discover" => Some(Self::Discover),
            "jcb" => Some(Self::Jcb),
            "unionpay" => Some(Self::UnionPay),
            _ => None,
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Self::Visa => &VISA,
            Self::Mastercard => &MASTERCARD,
            Self::Amex => &AMEX,
            Self::DinersClub => &DINERS_CLUB,
            Self::Discover => &DISCOVER,
            Self::Jcb => &JCB,
            Self::UnionPay => &UNION_PAY,
        }
    }
}

/// Bitmask of accepted card types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardTypes(u8);

impl CardTypes {
    /// Every issuer.
    #[must_use]
    pub const fn all() -> Self {
        Self(0x7f)
    }

    /// No issuer yet; combine with [`with`](Self::with).
    #[must_use]
    pub const fn none() -> Self {
        Self(0)
    }

    /// Adds one issuer.
    #[must_use = "builder methods must be chained or built"]
    pub const fn with(self, card_type: CardType) -> Self {
        Self(self.0 | card_type.bit())
    }

    const fn allows(self, card_type: CardType) -> bool {
        self.0 & card_type.bit() != 0
    }
}

impl Default for CardTypes {
    fn default() -> Self {
        Self::all()
    }
}

// ============================================================================
// CREDIT CARD VALIDATOR
// ============================================================================

/// Validates credit card numbers.
///
/// # Examples
///
/// ```
/// use valid8_validator::validators::{CardType, CardTypes, CreditCard};
/// use valid8_validator::foundation::Validate;
///
/// let v = CreditCard::new();
/// assert!(v.is_valid("4716-2210-5188-5662"));
/// assert!(v.is_valid("4929 7226 5379 7141"));
/// assert!(!v.is_valid("5398228707871528")); // checksum
///
/// let visa_only = CreditCard::new().only_types(CardTypes::none().with(CardType::Visa));
/// assert!(!visa_only.is_valid("375556917985515"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreditCard {
    allow_separators: bool,
    allowed_types: CardTypes,
}

impl CreditCard {
    /// Accepts every issuer and ignores space/hyphen separators.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            allow_separators: true,
            allowed_types: CardTypes::all(),
        }
    }

    /// Rejects numbers containing separators.
    #[must_use = "builder methods must be chained or built"]
    pub const fn digits_only(mut self) -> Self {
        self.allow_separators = false;
        self
    }

    /// Only accepts the given issuers.
    #[must_use = "builder methods must be chained or built"]
    pub const fn only_types(mut self, types: CardTypes) -> Self {
        self.allowed_types = types;
        self
    }

    fn extract_digits(&self, input: &str) -> Result<String, ValidationError> {
        let mut digits = String::with_capacity(input.len());

        for c in input.chars() {
            if c.is_ascii_digit() {
                digits.push(c);
            } else if c == ' ' || c == '-' {
                if !self.allow_separators {
                    return Err(ValidationError::new(
                        "cc_separators_not_allowed",
                        "Separators not allowed in credit card number",
                    ));
                }
            } else {
                return Err(ValidationError::new(
                    "cc_invalid_char",
                    format!("Invalid character '{c}' in credit card number"),
                ));
            }
        }

        Ok(digits)
    }
}

impl Default for CreditCard {
    fn default() -> Self {
        Self::new()
    }
}

/// Luhn (mod 10) checksum over ASCII digits.
#[must_use]
pub fn luhn(digits: &str) -> bool {
    let mut sum = 0;
    let mut double = false;

    for c in digits.chars().rev() {
        let Some(mut digit) = c.to_digit(10) else {
            return false;
        };

        if double {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }

        sum += digit;
        double = !double;
    }

    !digits.is_empty() && sum % 10 == 0
}

impl Validate for CreditCard {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let digits = self.extract_digits(input)?;

        let Some(card_type) = CardType::detect(&digits) else {
            return Err(ValidationError::new(
                "cc_unknown_type",
                "Card number does not match any known issuer",
            ));
        };

        if !self.allowed_types.allows(card_type) {
            return Err(ValidationError::new("cc_type_not_allowed", "Card type is not accepted")
                .with_param("type", format!("{card_type:?}")));
        }

        if !luhn(&digits) {
            return Err(ValidationError::new("luhn", "Credit card checksum failed"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_issuers() {
        let v = CreditCard::new();
        for ok in [
            "375556917985515",
            "36050234196908",
            "4716461583322103",
            "4716-2210-5188-5662",
            "4929 7226 5379 7141",
            "5398228707871527",
            "6283875070985593",
            "6263892624162870",
            "6234917882863855",
            "6234698580215388",
            "6226050967750613",
            "6246281879460688",
            "2222155765072228",
            "2225855203075256",
            "2720428011723762",
            "2718760626256570",
            "6765780016990268",
        ] {
            assert!(v.is_valid(ok), "{ok}");
        }
    }

    #[test]
    fn rejects_bad_numbers() {
        let v = CreditCard::new();
        for bad in [
            "foo",
            "5398228707871528",
            "2718760626256571",
            "2721465526338453",
            "2220175103860763",
            "375556917985515999999993",
            "899999996234917882863855",
            "prefix6234917882863855",
            "623491788middle2863855",
            "6234917882863855suffix",
            "",
        ] {
            assert!(!v.is_valid(bad), "{bad}");
        }
    }

    #[test]
    fn detects_issuer() {
        assert_eq!(CardType::detect("375556917985515"), Some(CardType::Amex));
        assert_eq!(CardType::detect("36050234196908"), Some(CardType::DinersClub));
        assert_eq!(CardType::detect("2720428011723762"), Some(CardType::Mastercard));
        assert_eq!(CardType::detect("6283875070985593"), Some(CardType::UnionPay));
        assert_eq!(CardType::detect("12"), None);
    }

    #[test]
    fn checksum_failure_code() {
        assert_eq!(CreditCard::new().validate("5398228707871528").unwrap_err().code, "luhn");
    }

    #[test]
    fn digits_only_rejects_separators() {
        let err = CreditCard::new().digits_only().validate("4716-2210-5188-5662").unwrap_err();
        assert_eq!(err.code, "cc_separators_not_allowed");
    }

    #[test]
    fn type_filter() {
        let visa = CreditCard::new().only_types(CardTypes::none().with(CardType::Visa));
        assert!(visa.is_valid("4716461583322103"));
        assert_eq!(
            visa.validate("375556917985515").unwrap_err().param("type"),
            Some("Amex")
        );
    }

    #[test]
    fn provider_names() {
        assert_eq!(CardType::from_name("VISA"), Some(CardType::Visa));
        assert_eq!(CardType::from_name("unknown"), None);
    }
}
