//! String field rules
//!
//! Format validators over the string form of the value, plus the phone rule
//! (validator and E.164 formatting) and the `capitalize` and `startcase`
//! transforms.
//!
//! Rule arguments come from configuration keys: `locale` (alpha,
//! alphanumeric, mobile), `version` (ip, uuid), `strict` (mobile),
//! `country` / `countries` (phone). fqdn, url and creditcard take their
//! remaining keys as the predicate's options object.

use std::sync::Arc;

use serde_json::Value;
use valid8_validator::catalog::{self, CatalogError};
use valid8_validator::sanitizers;
use valid8_validator::validators::{
    Base64, DataUri, Email, HexColor, Hexadecimal, Jwt, MacAddress, Md5, MimeType, Phone,
};

use super::{
    Installer, argument, arguments_object, explicitly_off, install_validator, string_predicate,
};
use crate::field::{Field, FieldContext};
use crate::options::OptionValue;

/// String rules in registration order.
pub const RULES: &[(&str, Installer)] = &[
    ("email", email),
    ("macaddress", macaddress),
    ("ip", ip),
    ("fqdn", fqdn),
    ("alpha", alpha),
    ("alphanumeric", alphanumeric),
    ("md5", md5),
    ("uuid", uuid),
    ("creditcard", creditcard),
    ("base64", base64),
    ("mobile", mobile),
    ("mimetype", mimetype),
    ("hex", hex),
    ("hexcolor", hexcolor),
    ("url", url),
    ("jwt", jwt),
    ("datauri", datauri),
    ("phone", phone),
    ("capitalize", capitalize),
    ("startcase", startcase),
];

/// Declares rules whose predicate takes no arguments.
macro_rules! plain_rules {
    ($($name:ident => $predicate:expr;)*) => {
        $(
            pub fn $name(field: &mut Field, options: Option<&OptionValue>, message: Option<&str>) {
                install_validator(field, stringify!($name), options, message, |_| {
                    Ok(string_predicate(Arc::new($predicate)))
                });
            }
        )*
    };
}

plain_rules! {
    email => Email::new();
    macaddress => MacAddress::new();
    md5 => Md5;
    base64 => Base64::new();
    mimetype => MimeType;
    hex => Hexadecimal;
    hexcolor => HexColor;
    jwt => Jwt;
    datauri => DataUri;
}

fn from_catalog(member: &str, args: &[Value]) -> Result<crate::field::Predicate, CatalogError> {
    catalog::predicate(member, args).map(string_predicate)
}

pub fn ip(field: &mut Field, options: Option<&OptionValue>, message: Option<&str>) {
    install_validator(field, "ip", options, message, |o| {
        from_catalog("isIP", &[argument(o, "version")])
    });
}

pub fn uuid(field: &mut Field, options: Option<&OptionValue>, message: Option<&str>) {
    install_validator(field, "uuid", options, message, |o| {
        from_catalog("isUUID", &[argument(o, "version")])
    });
}

pub fn alpha(field: &mut Field, options: Option<&OptionValue>, message: Option<&str>) {
    install_validator(field, "alpha", options, message, |o| {
        from_catalog("isAlpha", &[argument(o, "locale")])
    });
}

pub fn alphanumeric(field: &mut Field, options: Option<&OptionValue>, message: Option<&str>) {
    install_validator(field, "alphanumeric", options, message, |o| {
        from_catalog("isAlphanumeric", &[argument(o, "locale")])
    });
}

/// Mobile numbers in `locale` (a tag, a list of tags or `any`). `strict`
/// requires the international `+` prefix.
pub fn mobile(field: &mut Field, options: Option<&OptionValue>, message: Option<&str>) {
    install_validator(field, "mobile", options, message, |o| {
        from_catalog("isMobilePhone", &[argument(o, "locale"), argument(o, "strict")])
    });
}

pub fn fqdn(field: &mut Field, options: Option<&OptionValue>, message: Option<&str>) {
    install_validator(field, "fqdn", options, message, |o| {
        from_catalog("isFQDN", &[arguments_object(o)])
    });
}

pub fn url(field: &mut Field, options: Option<&OptionValue>, message: Option<&str>) {
    install_validator(field, "url", options, message, |o| {
        from_catalog("isURL", &[arguments_object(o)])
    });
}

pub fn creditcard(field: &mut Field, options: Option<&OptionValue>, message: Option<&str>) {
    install_validator(field, "creditcard", options, message, |o| {
        from_catalog("isCreditCard", &[arguments_object(o)])
    });
}

// ============================================================================
// PHONE
// ============================================================================

fn countries(options: &OptionValue) -> Vec<String> {
    match (options.get("countries"), options.get("country")) {
        (Some(Value::Array(list)), _) => list
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_owned)
            .collect(),
        (Some(Value::String(one)), _) | (None, Some(Value::String(one))) => vec![one.clone()],
        _ => Vec::new(),
    }
}

/// Phone numbers, optionally limited to `countries` (ISO 3166 alpha-2).
///
/// Also installs a transform formatting assigned numbers as E.164. National
/// numbers are read in `country`, or the first of `countries`; numbers that
/// cannot be resolved are left as given.
pub fn phone(field: &mut Field, options: Option<&OptionValue>, message: Option<&str>) {
    let installed = install_validator(field, "phone", options, message, |o| {
        let countries = countries(o);
        let phone = if countries.is_empty() {
            Phone::new()
        } else {
            Phone::new()
                .countries(&countries)
                .map_err(|e| CatalogError::InvalidArgument {
                    member: "phone",
                    reason: e.to_string(),
                })?
        };
        Ok(string_predicate(Arc::new(phone)))
    });

    field.uninstall_transform("phone");
    if !installed {
        return;
    }

    let default_country = options.map(countries).and_then(|c| c.into_iter().next());
    field.install_transform(
        "phone",
        Arc::new(move |value: Value, _: &FieldContext<'_>| match value {
            Value::String(number) => {
                let formatted = sanitizers::to_e164(&number, default_country.as_deref());
                Value::String(formatted.unwrap_or(number))
            }
            other => other,
        }),
    );
}

// ============================================================================
// CASE TRANSFORMS
// ============================================================================

fn install_case_transform(
    field: &mut Field,
    tag: &'static str,
    should_apply: Option<&OptionValue>,
    apply: fn(&str) -> String,
) {
    field.uninstall_transform(tag);
    if explicitly_off(should_apply) {
        return;
    }
    field.install_transform(
        tag,
        Arc::new(move |value: Value, _: &FieldContext<'_>| match value {
            Value::String(s) => Value::String(apply(&s)),
            other => other,
        }),
    );
}

/// Uppercases the first letter and lowercases the rest.
pub fn capitalize(field: &mut Field, should_apply: Option<&OptionValue>, _message: Option<&str>) {
    install_case_transform(field, "capitalize", should_apply, sanitizers::capitalize);
}

/// Start case: `"john_doe"` becomes `"John Doe"`.
pub fn startcase(field: &mut Field, should_apply: Option<&OptionValue>, _message: Option<&str>) {
    install_case_transform(field, "startcase", should_apply, sanitizers::start_case);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::field::FieldKind;

    fn field() -> Field {
        Field::new("value", FieldKind::String)
    }

    fn passes(field: &Field, value: Value) -> bool {
        field.validators().iter().all(|v| v.check(&value))
    }

    #[test]
    fn arguments_reach_the_predicate() {
        let mut f = field();
        ip(&mut f, Some(&OptionValue::from(json!({"version": 6}))), None);
        assert!(passes(&f, json!("::1")));
        assert!(!passes(&f, json!("127.0.0.1")));

        let mut f = field();
        alpha(&mut f, Some(&OptionValue::from(json!({"locale": "de-DE"}))), None);
        assert!(passes(&f, json!("Heiß")));
    }

    #[test]
    fn bad_arguments_install_nothing() {
        let mut f = field();
        alpha(&mut f, Some(&OptionValue::from(json!({"locale": "tlh"}))), None);
        assert!(f.validators().is_empty());
    }

    #[test]
    fn message_precedence() {
        let mut f = field();
        email(&mut f, Some(&OptionValue::from(json!({"message": "from options"}))), Some("arg"));
        assert_eq!(f.validators()[0].message, "from options");

        email(&mut f, Some(&true.into()), Some("arg"));
        assert_eq!(f.validators()[0].message, "arg");

        email(&mut f, Some(&true.into()), None);
        assert_eq!(
            f.validators()[0].message,
            "`{VALUE}` is not a valid email address for path `{PATH}`."
        );
        assert_eq!(f.validators().len(), 1);
    }

    #[test]
    fn phone_formats_and_validates() {
        let mut f = field();
        phone(&mut f, Some(&OptionValue::from(json!({"countries": ["TZ", "KE"]}))), None);

        let formatted = f.transform(json!("0714 080 898"));
        assert_eq!(formatted, json!("+255714080898"));
        assert!(passes(&f, formatted));
        assert!(!passes(&f, json!("+44 20 7123 4567")));
    }

    #[test]
    fn phone_disable_removes_formatter() {
        let mut f = field();
        phone(&mut f, Some(&true.into()), None);
        phone(&mut f, None, None);
        assert!(f.validators().is_empty());
        assert!(f.transforms().is_empty());
    }

    #[test]
    fn unknown_phone_country_installs_nothing() {
        let mut f = field();
        phone(&mut f, Some(&OptionValue::from(json!({"country": "XX"}))), None);
        assert!(f.validators().is_empty());
        assert!(f.transforms().is_empty());
    }

    #[test]
    fn case_transforms() {
        let mut f = field();
        capitalize(&mut f, None, None);
        assert_eq!(f.transform(json!("jOHN")), json!("John"));

        let mut f = field();
        startcase(&mut f, Some(&true.into()), None);
        startcase(&mut f, Some(&true.into()), None);
        assert_eq!(f.transforms().len(), 1);
        assert_eq!(f.transform(json!("john_doe")), json!("John Doe"));
        assert_eq!(f.transform(json!(null)), json!(null));

        startcase(&mut f, Some(&false.into()), None);
        assert!(f.transforms().is_empty());
    }
}
