//! Name-indexed catalog of predicates and sanitizers
//!
//! Every member is addressed by its public name (`isEmail`, `isIP`,
//! `contains`, `trim`, ...). Predicate members are factories: they take
//! positional JSON arguments and build a [`StrPredicate`]. Sanitizer members
//! map a string to a string. `version` is a meta member carrying the crate
//! version.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use valid8_validator::catalog;
//!
//! let ip4 = catalog::predicate("isIP", &[json!(4)]).unwrap();
//! assert!(ip4.is_valid("10.0.0.1"));
//! assert!(!ip4.is_valid("::1"));
//!
//! assert_eq!(catalog::sanitize("trim", "  x  ", &[]).unwrap(), "x");
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;
use smallvec::SmallVec;

use crate::foundation::StrPredicate;
use crate::sanitizers;
use crate::validators::{
    After, Alpha, Alphanumeric, Ascii, Base64, Before, CardType, CardTypes, Contains, CreditCard,
    DataUri, Email, Equals, Float, Fqdn, HexColor, Hexadecimal, Int, IpAddress, IpVersion, IsIn,
    Jwt, Length, Locale, Lowercase, MacAddress, Matches, Md5, MimeType, MobilePhone, Numeric,
    Uppercase, Url, Uuid, parse_date,
};

/// Positional arguments handed to a predicate factory or sanitizer.
pub type Args = SmallVec<[Value; 2]>;

/// Builds a predicate from positional arguments.
pub type PredicateFactory = fn(&[Value]) -> Result<StrPredicate, CatalogError>;

/// Normalizes a string with positional arguments.
pub type Sanitizer = fn(&str, &[Value]) -> String;

/// The crate version, exposed as the `version` member.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A catalog entry.
#[derive(Clone, Copy)]
pub enum Member {
    Predicate(PredicateFactory),
    Sanitizer(Sanitizer),
    Meta(&'static str),
}

impl std::fmt::Debug for Member {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Predicate(_) => f.write_str("Predicate"),
            Self::Sanitizer(_) => f.write_str("Sanitizer"),
            Self::Meta(value) => write!(f, "Meta({value})"),
        }
    }
}

/// Errors from catalog lookups and predicate construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("no catalog member named `{0}`")]
    UnknownMember(String),

    #[error("catalog member `{0}` is not a predicate")]
    NotAPredicate(String),

    #[error("catalog member `{0}` is not a sanitizer")]
    NotASanitizer(String),

    #[error("invalid argument for `{member}`: {reason}")]
    InvalidArgument { member: &'static str, reason: String },
}

impl CatalogError {
    fn invalid(member: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            member,
            reason: reason.into(),
        }
    }
}

// ============================================================================
// MEMBER TABLE
// ============================================================================

const MEMBERS: &[(&str, Member)] = &[
    (
        "blacklist",
        Member::Sanitizer(|s, a| sanitizers::blacklist(s, chars_arg(a).unwrap_or(""))),
    ),
    ("contains", Member::Predicate(contains)),
    ("equals", Member::Predicate(equals)),
    ("escape", Member::Sanitizer(|s, _| sanitizers::escape(s))),
    ("isAfter", Member::Predicate(is_after)),
    ("isAlpha", Member::Predicate(is_alpha)),
    ("isAlphanumeric", Member::Predicate(is_alphanumeric)),
    ("isAscii", Member::Predicate(|_| Ok(Arc::new(Ascii)))),
    ("isBase64", Member::Predicate(|_| Ok(Arc::new(Base64::new())))),
    ("isBefore", Member::Predicate(is_before)),
    ("isCreditCard", Member::Predicate(is_credit_card)),
    ("isDataURI", Member::Predicate(|_| Ok(Arc::new(DataUri)))),
    ("isEmail", Member::Predicate(|_| Ok(Arc::new(Email::new())))),
    ("isFQDN", Member::Predicate(is_fqdn)),
    ("isFloat", Member::Predicate(is_float)),
    ("isHexColor", Member::Predicate(|_| Ok(Arc::new(HexColor)))),
    ("isHexadecimal", Member::Predicate(|_| Ok(Arc::new(Hexadecimal)))),
    ("isIP", Member::Predicate(is_ip)),
    ("isIn", Member::Predicate(is_in)),
    ("isInt", Member::Predicate(is_int)),
    ("isJWT", Member::Predicate(|_| Ok(Arc::new(Jwt)))),
    ("isLength", Member::Predicate(is_length)),
    ("isLowercase", Member::Predicate(|_| Ok(Arc::new(Lowercase)))),
    ("isMACAddress", Member::Predicate(|_| Ok(Arc::new(MacAddress::new())))),
    ("isMD5", Member::Predicate(|_| Ok(Arc::new(Md5)))),
    ("isMimeType", Member::Predicate(|_| Ok(Arc::new(MimeType)))),
    ("isMobilePhone", Member::Predicate(is_mobile_phone)),
    ("isNumeric", Member::Predicate(is_numeric)),
    ("isURL", Member::Predicate(is_url)),
    ("isUUID", Member::Predicate(is_uuid)),
    ("isUppercase", Member::Predicate(|_| Ok(Arc::new(Uppercase)))),
    ("ltrim", Member::Sanitizer(|s, a| sanitizers::ltrim(s, chars_arg(a)))),
    ("matches", Member::Predicate(matches)),
    ("rtrim", Member::Sanitizer(|s, a| sanitizers::rtrim(s, chars_arg(a)))),
    ("trim", Member::Sanitizer(|s, a| sanitizers::trim(s, chars_arg(a)))),
    ("unescape", Member::Sanitizer(|s, _| sanitizers::unescape(s))),
    ("version", Member::Meta(VERSION)),
    (
        "whitelist",
        Member::Sanitizer(|s, a| sanitizers::whitelist(s, chars_arg(a).unwrap_or(""))),
    ),
];

/// Looks a member up by name (case-sensitive).
#[must_use]
pub fn lookup(name: &str) -> Option<Member> {
    MEMBERS.iter().find(|(n, _)| *n == name).map(|(_, m)| *m)
}

/// All member names.
pub fn names() -> impl Iterator<Item = &'static str> {
    MEMBERS.iter().map(|(name, _)| *name)
}

/// Names of the sanitizer members.
pub fn sanitizer_names() -> impl Iterator<Item = &'static str> {
    MEMBERS
        .iter()
        .filter(|(_, m)| matches!(m, Member::Sanitizer(_)))
        .map(|(name, _)| *name)
}

/// Builds the named predicate.
///
/// # Errors
///
/// [`CatalogError::UnknownMember`] or [`CatalogError::NotAPredicate`] for a
/// bad name, [`CatalogError::InvalidArgument`] when the factory cannot use
/// `args`.
pub fn predicate(name: &str, args: &[Value]) -> Result<StrPredicate, CatalogError> {
    match lookup(name) {
        Some(Member::Predicate(factory)) => factory(args),
        Some(_) => Err(CatalogError::NotAPredicate(name.to_owned())),
        None => Err(CatalogError::UnknownMember(name.to_owned())),
    }
}

/// Runs the named sanitizer.
///
/// # Errors
///
/// [`CatalogError::UnknownMember`] or [`CatalogError::NotASanitizer`].
pub fn sanitize(name: &str, input: &str, args: &[Value]) -> Result<String, CatalogError> {
    match lookup(name) {
        Some(Member::Sanitizer(sanitizer)) => Ok(sanitizer(input, args)),
        Some(_) => Err(CatalogError::NotASanitizer(name.to_owned())),
        None => Err(CatalogError::UnknownMember(name.to_owned())),
    }
}

// ============================================================================
// ARGUMENT HELPERS
// ============================================================================

fn chars_arg(args: &[Value]) -> Option<&str> {
    args.first().and_then(Value::as_str)
}

/// The argument at `index`, treating `null` as absent.
fn arg(args: &[Value], index: usize) -> Option<&Value> {
    args.get(index).filter(|v| !v.is_null())
}

fn str_arg<'a>(
    member: &'static str,
    args: &'a [Value],
    index: usize,
) -> Result<Option<&'a str>, CatalogError> {
    match arg(args, index) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(CatalogError::invalid(member, format!("expected a string, got {other}"))),
    }
}

fn required_str<'a>(
    member: &'static str,
    args: &'a [Value],
    index: usize,
) -> Result<&'a str, CatalogError> {
    str_arg(member, args, index)?
        .ok_or_else(|| CatalogError::invalid(member, format!("missing argument {index}")))
}

/// Reads a number given as a JSON number or a numeric string.
fn number(member: &'static str, value: &Value) -> Result<f64, CatalogError> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| CatalogError::invalid(member, format!("{n} is not representable"))),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| CatalogError::invalid(member, format!("expected a number, got {s:?}"))),
        other => Err(CatalogError::invalid(member, format!("expected a number, got {other}"))),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn usize_of(member: &'static str, value: &Value) -> Result<usize, CatalogError> {
    let n = number(member, value)?;
    if n < 0.0 || n.fract() != 0.0 {
        return Err(CatalogError::invalid(
            member,
            format!("expected a non-negative integer, got {n}"),
        ));
    }
    Ok(n as usize)
}

/// `(min, max)` from either an options object or two positional values.
fn bounds(args: &[Value]) -> (Option<&Value>, Option<&Value>) {
    match arg(args, 0) {
        Some(Value::Object(options)) => (
            options.get("min").filter(|v| !v.is_null()),
            options.get("max").filter(|v| !v.is_null()),
        ),
        _ => (arg(args, 0), arg(args, 1)),
    }
}

fn date_arg(member: &'static str, args: &[Value]) -> Result<Option<DateTime<Utc>>, CatalogError> {
    str_arg(member, args, 0)?
        .map(|s| {
            parse_date(s)
                .ok_or_else(|| CatalogError::invalid(member, format!("{s:?} is not a date")))
        })
        .transpose()
}

fn locale_arg(member: &'static str, args: &[Value]) -> Result<Option<Locale>, CatalogError> {
    str_arg(member, args, 0)?
        .filter(|tag| !tag.eq_ignore_ascii_case("any"))
        .map(|tag| {
            tag.parse::<Locale>()
                .map_err(|e| CatalogError::invalid(member, e.to_string()))
        })
        .transpose()
}

// ============================================================================
// PREDICATE FACTORIES
// ============================================================================

fn contains(args: &[Value]) -> Result<StrPredicate, CatalogError> {
    let seed = match arg(args, 0) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => return Err(CatalogError::invalid("contains", "missing seed")),
    };
    Ok(Arc::new(Contains::new(seed)))
}

fn equals(args: &[Value]) -> Result<StrPredicate, CatalogError> {
    let comparison = match arg(args, 0) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => return Err(CatalogError::invalid("equals", "missing comparison")),
    };
    Ok(Arc::new(Equals::new(comparison)))
}

fn matches(args: &[Value]) -> Result<StrPredicate, CatalogError> {
    let pattern = required_str("matches", args, 0)?;
    let flags = str_arg("matches", args, 1)?.unwrap_or("");
    Matches::new(pattern, flags)
        .map(|m| Arc::new(m) as StrPredicate)
        .map_err(|e| CatalogError::invalid("matches", e.to_string()))
}

fn is_in(args: &[Value]) -> Result<StrPredicate, CatalogError> {
    let values = match arg(args, 0) {
        Some(Value::Array(items)) => items
            .iter()
            .map(|v| v.as_str().map_or_else(|| v.to_string(), str::to_owned))
            .collect(),
        Some(Value::Object(map)) => map.keys().cloned().collect(),
        Some(Value::String(s)) => vec![s.clone()],
        Some(other) => {
            return Err(CatalogError::invalid("isIn", format!("expected an array, got {other}")));
        }
        None => Vec::new(),
    };
    Ok(Arc::new(IsIn::new(values)))
}

fn is_after(args: &[Value]) -> Result<StrPredicate, CatalogError> {
    Ok(match date_arg("isAfter", args)? {
        Some(reference) => Arc::new(After::new(reference)),
        None => Arc::new(After::now()),
    })
}

fn is_before(args: &[Value]) -> Result<StrPredicate, CatalogError> {
    Ok(match date_arg("isBefore", args)? {
        Some(reference) => Arc::new(Before::new(reference)),
        None => Arc::new(Before::now()),
    })
}

fn is_alpha(args: &[Value]) -> Result<StrPredicate, CatalogError> {
    let locale = locale_arg("isAlpha", args)?.unwrap_or_default();
    Ok(Arc::new(Alpha::new(locale)))
}

fn is_alphanumeric(args: &[Value]) -> Result<StrPredicate, CatalogError> {
    let locale = locale_arg("isAlphanumeric", args)?.unwrap_or_default();
    Ok(Arc::new(Alphanumeric::new(locale)))
}

fn is_credit_card(args: &[Value]) -> Result<StrPredicate, CatalogError> {
    let provider = match arg(args, 0) {
        Some(Value::Object(options)) => options.get("provider").and_then(Value::as_str),
        Some(Value::String(s)) => Some(s.as_str()),
        _ => None,
    };
    let card = match provider {
        Some(name) => {
            let card_type = CardType::from_name(name).ok_or_else(|| {
                CatalogError::invalid("isCreditCard", format!("unknown provider {name:?}"))
            })?;
            CreditCard::new().only_types(CardTypes::none().with(card_type))
        }
        None => CreditCard::new(),
    };
    Ok(Arc::new(card))
}

fn is_fqdn(args: &[Value]) -> Result<StrPredicate, CatalogError> {
    let mut fqdn = Fqdn::new();
    if let Some(Value::Object(options)) = arg(args, 0) {
        let flag = |key: &str| options.get(key).and_then(Value::as_bool);
        if flag("require_tld") == Some(false) {
            fqdn = fqdn.without_tld();
        }
        if flag("allow_underscores") == Some(true) {
            fqdn = fqdn.allow_underscores();
        }
        if flag("allow_trailing_dot") == Some(true) {
            fqdn = fqdn.allow_trailing_dot();
        }
        if flag("allow_numeric_tld") == Some(true) {
            fqdn = fqdn.allow_numeric_tld();
        }
    }
    Ok(Arc::new(fqdn))
}

fn is_float(args: &[Value]) -> Result<StrPredicate, CatalogError> {
    let (min, max) = bounds(args);
    let mut float = Float::new();
    if let Some(min) = min {
        float = float.min(number("isFloat", min)?);
    }
    if let Some(max) = max {
        float = float.max(number("isFloat", max)?);
    }
    Ok(Arc::new(float))
}

#[allow(clippy::cast_possible_truncation)]
fn is_int(args: &[Value]) -> Result<StrPredicate, CatalogError> {
    let (min, max) = bounds(args);
    let mut int = Int::new();
    if let Some(min) = min {
        int = int.min(number("isInt", min)?.floor() as i64);
    }
    if let Some(max) = max {
        int = int.max(number("isInt", max)?.ceil() as i64);
    }
    if let Some(Value::Object(options)) = arg(args, 0) {
        if options.get("allow_leading_zeroes").and_then(Value::as_bool) == Some(false) {
            int = int.no_leading_zeroes();
        }
    }
    Ok(Arc::new(int))
}

fn is_ip(args: &[Value]) -> Result<StrPredicate, CatalogError> {
    let version = match arg(args, 0) {
        None => IpVersion::Any,
        Some(Value::String(s)) if s.eq_ignore_ascii_case("any") => IpVersion::Any,
        Some(value) => match usize_of("isIP", value)? {
            4 => IpVersion::V4,
            6 => IpVersion::V6,
            other => {
                return Err(CatalogError::invalid("isIP", format!("unknown IP version {other}")));
            }
        },
    };
    Ok(Arc::new(IpAddress::version(version)))
}

fn is_length(args: &[Value]) -> Result<StrPredicate, CatalogError> {
    let (min, max) = bounds(args);
    let min = min.map(|v| usize_of("isLength", v)).transpose()?.unwrap_or(0);
    let max = max.map(|v| usize_of("isLength", v)).transpose()?;
    Ok(Arc::new(Length::new(min, max)))
}

fn is_mobile_phone(args: &[Value]) -> Result<StrPredicate, CatalogError> {
    let mut phone = match arg(args, 0) {
        Some(Value::Array(tags)) => {
            let locales = tags
                .iter()
                .map(|tag| {
                    tag.as_str()
                        .ok_or_else(|| {
                            CatalogError::invalid("isMobilePhone", "locale must be a string")
                        })?
                        .parse::<Locale>()
                        .map_err(|e| CatalogError::invalid("isMobilePhone", e.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?;
            MobilePhone::locales(locales)
        }
        _ => match locale_arg("isMobilePhone", args)? {
            Some(locale) => MobilePhone::locale(locale),
            None => MobilePhone::any(),
        },
    };

    let strict = match arg(args, 1) {
        Some(Value::Bool(b)) => *b,
        Some(Value::Object(options)) => options
            .get("strictMode")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        _ => false,
    };
    if strict {
        phone = phone.strict();
    }
    Ok(Arc::new(phone))
}

fn is_numeric(args: &[Value]) -> Result<StrPredicate, CatalogError> {
    let no_symbols = match arg(args, 0) {
        Some(Value::Object(options)) => options.get("no_symbols").and_then(Value::as_bool),
        Some(Value::Bool(b)) => Some(*b),
        _ => None,
    };
    Ok(if no_symbols == Some(true) {
        Arc::new(Numeric::new().no_symbols())
    } else {
        Arc::new(Numeric::new())
    })
}

fn is_url(args: &[Value]) -> Result<StrPredicate, CatalogError> {
    let mut url = Url::new();
    if let Some(Value::Object(options)) = arg(args, 0) {
        if let Some(Value::Array(protocols)) = options.get("protocols") {
            url = url.protocols(protocols.iter().filter_map(Value::as_str).map(str::to_owned));
        }
        if options.get("require_protocol").and_then(Value::as_bool) == Some(true) {
            url = url.require_protocol();
        }
    }
    Ok(Arc::new(url))
}

fn is_uuid(args: &[Value]) -> Result<StrPredicate, CatalogError> {
    let uuid = match arg(args, 0) {
        None => Uuid::new(),
        Some(Value::String(s)) if s.eq_ignore_ascii_case("all") => Uuid::new(),
        Some(value) => match usize_of("isUUID", value)? {
            3 => Uuid::version(3),
            4 => Uuid::version(4),
            5 => Uuid::version(5),
            other => {
                return Err(CatalogError::invalid("isUUID", format!("unknown UUID version {other}")));
            }
        },
    };
    Ok(Arc::new(uuid))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn member_names_are_unique() {
        let mut all: Vec<&str> = names().collect();
        let count = all.len();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), count);
    }

    #[test]
    fn version_is_meta() {
        assert!(matches!(lookup("version"), Some(Member::Meta(VERSION))));
        assert_eq!(
            predicate("version", &[]).err(),
            Some(CatalogError::NotAPredicate("version".into()))
        );
    }

    #[test]
    fn unknown_member() {
        assert_eq!(
            predicate("isBanana", &[]).err(),
            Some(CatalogError::UnknownMember("isBanana".into()))
        );
    }

    #[test]
    fn sanitizer_names_are_listed() {
        let names: Vec<&str> = sanitizer_names().collect();
        assert_eq!(
            names,
            ["blacklist", "escape", "ltrim", "rtrim", "trim", "unescape", "whitelist"]
        );
    }

    #[test]
    fn sanitize_with_args() {
        assert_eq!(sanitize("ltrim", "--a--", &[json!("-")]).unwrap(), "a--");
        assert_eq!(
            sanitize("isEmail", "x", &[]).err(),
            Some(CatalogError::NotASanitizer("isEmail".into()))
        );
    }

    #[test]
    fn positional_bounds() {
        let length = predicate("isLength", &[json!(2), json!(3)]).unwrap();
        assert!(length.is_valid("abc"));
        assert!(!length.is_valid("abcd"));

        let object = predicate("isLength", &[json!({"min": 4})]).unwrap();
        assert!(!object.is_valid("abc"));
    }

    #[test]
    fn int_options_object() {
        let options = json!({"min": 1, "max": 5, "allow_leading_zeroes": false});
        let int = predicate("isInt", &[options]).unwrap();
        assert!(int.is_valid("5"));
        assert!(!int.is_valid("05"));
        assert!(!int.is_valid("6"));
    }

    #[test]
    fn before_takes_a_date() {
        let before = predicate("isBefore", &[json!("2020-01-01")]).unwrap();
        assert!(before.is_valid("2019-06-01"));
        assert!(!before.is_valid("2020-06-01"));
        assert!(matches!(
            predicate("isBefore", &[json!("someday")]),
            Err(CatalogError::InvalidArgument { member: "isBefore", .. })
        ));
    }

    #[test]
    fn locale_arguments() {
        assert!(predicate("isAlpha", &[json!("de-DE")]).unwrap().is_valid("Heiß"));
        assert!(predicate("isAlpha", &[json!("xx")]).is_err());
        let tz = predicate("isMobilePhone", &[json!("sw-TZ"), json!({"strictMode": true})]).unwrap();
        assert!(tz.is_valid("+255714080898"));
        assert!(!tz.is_valid("0714080898"));
        let many = predicate("isMobilePhone", &[json!(["en-KE", "sw-TZ"])]).unwrap();
        assert!(many.is_valid("0712345678"));
    }

    #[test]
    fn versions() {
        let v4 = predicate("isUUID", &[json!(4)]).unwrap();
        assert!(v4.is_valid("713ae7e3-cb32-45f9-adcb-7c4fa86b90c1"));
        assert!(predicate("isUUID", &[json!("9")]).is_err());
        assert!(predicate("isIP", &[json!("6")]).unwrap().is_valid("::1"));
    }

    #[test]
    fn membership_and_matching() {
        let is_in = predicate("isIn", &[json!(["a", "b", 1])]).unwrap();
        assert!(is_in.is_valid("1"));
        assert!(!is_in.is_valid("c"));

        let m = predicate("matches", &[json!("^ab"), json!("i")]).unwrap();
        assert!(m.is_valid("ABc"));
        assert!(predicate("matches", &[json!("(")]).is_err());
    }

    #[test]
    fn credit_card_provider() {
        let amex = predicate("isCreditCard", &[json!({"provider": "amex"})]).unwrap();
        assert!(amex.is_valid("375556917985515"));
        assert!(!amex.is_valid("4716461583322103"));
    }
}
