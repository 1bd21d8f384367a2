//! Number field rules
//!
//! The value has already been cast on assignment, so these check its string
//! form: `123.0` reads as `123` and passes `integer`.

use std::sync::Arc;

use valid8_validator::validators::{Float, Int, Numeric};

use super::{Installer, install_validator, string_predicate};
use crate::field::Field;
use crate::options::OptionValue;

pub const RULES: &[(&str, Installer)] = &[
    ("numeric", numeric),
    ("integer", integer),
    ("float", float),
];

pub fn numeric(field: &mut Field, options: Option<&OptionValue>, message: Option<&str>) {
    install_validator(field, "numeric", options, message, |_| {
        Ok(string_predicate(Arc::new(Numeric::new())))
    });
}

pub fn integer(field: &mut Field, options: Option<&OptionValue>, message: Option<&str>) {
    install_validator(field, "integer", options, message, |_| {
        Ok(string_predicate(Arc::new(Int::new())))
    });
}

pub fn float(field: &mut Field, options: Option<&OptionValue>, message: Option<&str>) {
    install_validator(field, "float", options, message, |_| {
        Ok(string_predicate(Arc::new(Float::new())))
    });
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;
    use crate::field::FieldKind;

    fn check(installer: Installer, value: Value) -> bool {
        let mut field = Field::new("n", FieldKind::Number);
        installer(&mut field, Some(&true.into()), None);
        field.validators().iter().all(|v| v.check(&value))
    }

    #[rstest]
    #[case(json!(123), true)]
    #[case(json!(-17), true)]
    #[case(json!(123.0), true)]
    #[case(json!(123.123), false)]
    fn integers(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(check(integer, value), expected);
    }

    #[rstest]
    #[case(json!(123.123), true)]
    #[case(json!(-0.5), true)]
    #[case(json!(1e300), true)]
    #[case(json!(42), true)]
    fn floats(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(check(float, value), expected);
    }

    #[test]
    fn numeric_rejects_exponent_form() {
        assert!(check(numeric, json!(0.25)));
        assert!(!check(numeric, json!(1e300)));
    }

    #[test]
    fn default_message() {
        let mut field = Field::new("age", FieldKind::Number);
        integer(&mut field, Some(&false.into()), None);
        assert_eq!(field.validators()[0].tag, "integer");
        assert!(field.validators()[0].message.contains("integer"));
    }
}
