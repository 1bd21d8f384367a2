//! Locales understood by the locale-aware predicates ([`Alpha`],
//! [`Alphanumeric`], [`MobilePhone`]).
//!
//! [`Alpha`]: super::Alpha
//! [`Alphanumeric`]: super::Alphanumeric
//! [`MobilePhone`]: super::MobilePhone

use std::fmt;
use std::str::FromStr;

/// A supported locale tag, written `ll-CC` (`en-US`, `sw-TZ`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    EnUs,
    EnGb,
    EnIn,
    EnKe,
    SwTz,
    ArAe,
    DeDe,
    FrFr,
    EsEs,
}

/// Returned when a locale tag is not one of [`Locale::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown locale `{0}`")]
pub struct UnknownLocale(pub String);

impl Locale {
    /// Every supported locale, in tag order.
    pub const ALL: [Self; 9] = [
        Self::ArAe,
        Self::DeDe,
        Self::EnGb,
        Self::EnIn,
        Self::EnKe,
        Self::EnUs,
        Self::EsEs,
        Self::FrFr,
        Self::SwTz,
    ];

    /// The `ll-CC` tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::EnGb => "en-GB",
            Self::EnIn => "en-IN",
            Self::EnKe => "en-KE",
            Self::SwTz => "sw-TZ",
            Self::ArAe => "ar-AE",
            Self::DeDe => "de-DE",
            Self::FrFr => "fr-FR",
            Self::EsEs => "es-ES",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownLocale(s.to_owned()))
    }
}
