//! Hex-encoded content: MD5 digests, hexadecimal numbers and colours.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::ValidationError;

static MD5_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-f0-9]{32}$").unwrap());

static HEX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:0x|0h)?[0-9a-f]+$").unwrap());

static HEX_COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^#?(?:[0-9a-f]{3}|[0-9a-f]{4}|[0-9a-f]{6}|[0-9a-f]{8})$").unwrap()
});

crate::validator! {
    /// Validates lowercase hex MD5 digests (32 characters).
    pub Md5 for str;
    rule(input) { MD5_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("md5") }
    fn md5();
}

crate::validator! {
    /// Validates hexadecimal numbers, with an optional `0x` or `0h` prefix.
    pub Hexadecimal for str;
    rule(input) { HEX_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("hexadecimal number") }
    fn hexadecimal();
}

crate::validator! {
    /// Validates hex colours: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `#`
    /// optional.
    pub HexColor for str;
    rule(input) { HEX_COLOR_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("hex color") }
    fn hex_color();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_md5() {
        for ok in [
            "d94f3f016ae679c3008de268209132f2",
            "751adbc511ccbe8edf23d486fa4581cd",
            "88dae00e614d8f24cfd5a8b3f8002e93",
            "0bf1c35032a71a14c2f719e5a14c1e96",
        ] {
            assert!(md5().is_valid(ok), "{ok}");
        }
        for bad in ["KYT0bf1c35032a71a14c2f719e5a14c1", "q94375dj93458w34", "39485729348", "%&FHKJFvk"] {
            assert!(!md5().is_valid(bad), "{bad}");
        }
    }

    #[test]
    fn test_hexadecimal() {
        for ok in ["deadBEEF", "ff0044", "0xff0044", "0XfF0044", "0x0123456789abcDEF", "0hfedCBA9876543210"] {
            assert!(hexadecimal().is_valid(ok), "{ok}");
        }
        for bad in ["abcdefg", "", "..", "0xa2h", "0xg", "0x"] {
            assert!(!hexadecimal().is_valid(bad), "{bad}");
        }
    }

    #[test]
    fn test_hex_color() {
        for ok in ["#ff0000ff", "#ff0034", "#CCCCCC", "0f38", "fff", "#f00"] {
            assert!(hex_color().is_valid(ok), "{ok}");
        }
        for bad in ["#ff", "fff0a", "#ff12FG"] {
            assert!(!hex_color().is_valid(bad), "{bad}");
        }
    }
}
