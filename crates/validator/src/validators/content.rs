//! String content validators
//!
//! Email addresses, URLs, data URIs and MIME types.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Validate, ValidationError};
use crate::validators::{Fqdn, IpAddress};

static EMAIL_USER_PART: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^[a-z\d!#$%&'*+\-/=?^_`{|}~\u{00A1}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFEF}]+$",
    )
    .unwrap()
});

static EMAIL_QUOTED_USER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^(?:[^"\\\r\n]|\\.)*$"#).unwrap());

static DATA_URI_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*data:(?:[a-z]+/[a-z0-9\-+]+(?:;[a-z\-]+=[a-z0-9\-]+)?)?(?:;base64)?,[a-z0-9!$&',()*+;=\-._~:@/?%\s]*\s*$",
    )
    .unwrap()
});

static MIME_SIMPLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:application|audio|font|image|message|model|multipart|text|video)/[a-z0-9.\-+]{1,100}$",
    )
    .unwrap()
});

static MIME_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)^text/[a-z0-9.\-+]{1,100};\s?charset=(?:"[a-z0-9.\-+\s]{0,70}"|[a-z0-9.\-+]{0,70})(?:\s?\([a-z0-9.\-+\s]{1,20}\))?$"#,
    )
    .unwrap()
});

static MIME_MULTIPART: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)^multipart/[a-z0-9.\-+]{1,100}(?:;\s?(?:boundary|charset)=(?:"[a-z0-9.\-+\s]{0,70}"|[a-z0-9.\-+]{0,70})(?:\s?\([a-z0-9.\-+\s]{1,20}\))?){0,2}$"#,
    )
    .unwrap()
});

const EMAIL_USER_MAX: usize = 64;
const EMAIL_DOMAIN_MAX: usize = 254;
const URL_MAX: usize = 2083;

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

/// Validates email addresses.
///
/// The local part may contain UTF-8 letters and any of
/// ``!#$%&'*+-/=?^_`{|}~``, split by single dots, or be a quoted string.
/// The domain must be a fully qualified domain name.
///
/// # Examples
///
/// ```
/// use valid8_validator::validators::Email;
/// use valid8_validator::foundation::Validate;
///
/// assert!(Email::new().is_valid("hans.m端ller@test.com"));
/// assert!(!Email::new().is_valid("foo@bar.com."));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Email {
    domain: Fqdn,
}

impl Email {
    #[must_use]
    pub const fn new() -> Self {
        Self { domain: Fqdn::new() }
    }

    fn check_user(user: &str) -> bool {
        if user.len() > EMAIL_USER_MAX {
            return false;
        }

        if let Some(quoted) = user.strip_prefix('"').and_then(|u| u.strip_suffix('"')) {
            return EMAIL_QUOTED_USER.is_match(quoted);
        }

        user.split('.').all(|part| EMAIL_USER_PART.is_match(part))
    }
}

impl Validate for Email {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let Some((user, domain)) = input.rsplit_once('@') else {
            return Err(ValidationError::invalid_format("email"));
        };

        if user.is_empty() || domain.is_empty() || domain.len() > EMAIL_DOMAIN_MAX {
            return Err(ValidationError::invalid_format("email"));
        }

        if !Self::check_user(user) {
            return Err(ValidationError::new(
                "invalid_local_part",
                "Email local part is not valid",
            ));
        }

        self.domain.validate(&domain.to_lowercase()).map_err(|e| {
            ValidationError::new("invalid_domain", "Email domain is not valid")
                .with_param("reason", e.code)
        })
    }
}

// ============================================================================
// URL VALIDATOR
// ============================================================================

/// Validates URLs with an `http`, `https` or `ftp` scheme.
///
/// The scheme may be omitted (`example.com/path`). The host must be a fully
/// qualified domain name or an IP address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Url {
    protocols: Vec<String>,
    require_protocol: bool,
}

impl Url {
    #[must_use]
    pub fn new() -> Self {
        Self {
            protocols: vec!["http".into(), "https".into(), "ftp".into()],
            require_protocol: false,
        }
    }

    /// Replaces the accepted schemes.
    #[must_use = "builder methods must be chained or built"]
    pub fn protocols<I, S>(mut self, protocols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.protocols = protocols.into_iter().map(Into::into).collect();
        self
    }

    /// Rejects URLs without an explicit scheme.
    #[must_use = "builder methods must be chained or built"]
    pub fn require_protocol(mut self) -> Self {
        self.require_protocol = true;
        self
    }
}

impl Default for Url {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Url {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if input.is_empty()
            || input.len() >= URL_MAX
            || input.chars().any(char::is_whitespace)
            || input.to_ascii_lowercase().starts_with("mailto:")
        {
            return Err(ValidationError::invalid_format("url"));
        }

        let candidate = if input.contains("://") {
            input.to_owned()
        } else if self.require_protocol {
            return Err(ValidationError::new("missing_protocol", "URL must have a scheme"));
        } else {
            format!("http://{}", input.trim_start_matches("//"))
        };

        let parsed = url::Url::parse(&candidate).map_err(|e| {
            ValidationError::invalid_format("url").with_param("reason", e.to_string())
        })?;

        if !self.protocols.iter().any(|p| p == parsed.scheme()) {
            return Err(ValidationError::new("unsupported_protocol", "URL scheme is not allowed")
                .with_param("scheme", parsed.scheme().to_owned()));
        }

        match parsed.host() {
            Some(url::Host::Domain(domain)) => {
                if Fqdn::new().is_valid(domain) || IpAddress::new().is_valid(domain) {
                    Ok(())
                } else {
                    Err(ValidationError::new("invalid_host", "URL host is not valid")
                        .with_param("host", domain.to_owned()))
                }
            }
            Some(url::Host::Ipv4(_) | url::Host::Ipv6(_)) => Ok(()),
            None => Err(ValidationError::new("invalid_host", "URL must have a host")),
        }
    }
}

// ============================================================================
// DATA URI / MIME TYPE
// ============================================================================

crate::validator! {
    /// Validates `data:` URIs.
    pub DataUri for str;
    rule(input) { DATA_URI_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("data URI") }
    fn data_uri();
}

crate::validator! {
    /// Validates MIME types: `type/subtype`, plus `charset` parameters for
    /// `text/*` and `boundary`/`charset` parameters for `multipart/*`.
    ///
    /// ```
    /// use valid8_validator::validators::MimeType;
    /// use valid8_validator::foundation::Validate;
    ///
    /// assert!(MimeType.is_valid("text/html; charset=us-ascii (Plain text)"));
    /// assert!(!MimeType.is_valid("application/json; charset=utf-8"));
    /// ```
    pub MimeType for str;
    rule(input) {
        MIME_SIMPLE.is_match(input) || MIME_TEXT.is_match(input) || MIME_MULTIPART.is_match(input)
    }
    error(input) { ValidationError::invalid_format("MIME type") }
    fn mime_type();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        let v = Email::new();
        for ok in [
            "foo@bar.com",
            "x@x.au",
            "foo@bar.com.au",
            "foo+bar@bar.com",
            "hans.m端ller@test.com",
            "hans@m端ller.com",
            "test|123@m端ller.com",
            "test123+ext@gmail.com",
            "\"quoted name\"@example.com",
        ] {
            assert!(v.is_valid(ok), "{ok}");
        }
        for bad in [
            "invalidemail@",
            "invalid.com",
            "@invalid.com",
            "foo@bar.com.",
            "somename@ｇｍａｉｌ.com",
            "foo@bar.co.uk.",
            "z@co.c",
            "foo..bar@baz.com",
        ] {
            assert!(!v.is_valid(bad), "{bad}");
        }
    }

    #[test]
    fn email_domain_reason_is_kept() {
        let err = Email::new().validate("z@co.c").unwrap_err();
        assert_eq!(err.code, "invalid_domain");
        assert_eq!(err.param("reason"), Some("invalid_tld"));
    }

    #[test]
    fn long_local_part_is_rejected() {
        let address = format!("{}@example.com", "a".repeat(65));
        assert!(!Email::new().is_valid(&address));
    }

    #[test]
    fn test_url() {
        let v = Url::new();
        for ok in [
            "http://example.com",
            "https://example.com/path?q=1",
            "example.com",
            "ftp://files.example.org",
            "http://127.0.0.1:8080/",
            "http://[::1]/",
        ] {
            assert!(v.is_valid(ok), "{ok}");
        }
        for bad in [
            "",
            "invalid",
            "mailto:foo@bar.com",
            "http://localhost",
            "gopher://example.com",
            "http://exa mple.com",
        ] {
            assert!(!v.is_valid(bad), "{bad}");
        }
    }

    #[test]
    fn url_protocol_can_be_required() {
        assert!(!Url::new().require_protocol().is_valid("example.com"));
        assert!(Url::new().protocols(["ws"]).is_valid("ws://example.com"));
    }

    #[test]
    fn test_data_uri() {
        assert!(data_uri().is_valid("data:text/plain;base64,SGVsbG8="));
        assert!(data_uri().is_valid("data:,Hello%2C%20World!"));
        assert!(!data_uri().is_valid("dataxbase64"));
    }

    #[test]
    fn test_mime_type() {
        for ok in [
            "application/json",
            "application/xhtml+xml",
            "audio/mp4",
            "image/bmp",
            "font/woff2",
            "message/http",
            "model/vnd.gtw",
            "multipart/form-data",
            "multipart/form-data; boundary=something",
            "multipart/form-data; charset=utf-8; boundary=something",
            "multipart/form-data; boundary=something; charset=\"utf-8\"",
            "multipart/form-data; boundary=\"something\"; charset=\"utf-8\"",
            "text/css",
            "text/plain; charset=utf8",
            "Text/HTML;Charset=\"utf-8\"",
            "text/html;charset=UTF-8",
            "text/html; charset=us-ascii (Plain text)",
            "video/mp4",
        ] {
            assert!(mime_type().is_valid(ok), "{ok}");
        }
        for bad in [
            "",
            " ",
            "/",
            "f/b",
            "application",
            "application\\json",
            "application/json/text",
            "application/json; charset=utf-8",
            "video/mp4; charset=utf-8",
        ] {
            assert!(!mime_type().is_valid(bad), "{bad}");
        }
    }
}
