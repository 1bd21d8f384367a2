//! String sanitizers
//!
//! Pure `&str -> String` normalizers. The catalog exposes the general ones by
//! name (`trim`, `escape`, ...); the schema layer uses [`capitalize`],
//! [`start_case`] and [`to_e164`] as field transforms.

use crate::validators::calling_code;
use crate::validators::phone::e164_digits;

// ============================================================================
// TRIMMING
// ============================================================================

/// Trims `chars` (whitespace when `None`) from both ends.
#[must_use]
pub fn trim(input: &str, chars: Option<&str>) -> String {
    match chars {
        Some(set) => input.trim_matches(|c: char| set.contains(c)).to_owned(),
        None => input.trim().to_owned(),
    }
}

/// Trims `chars` (whitespace when `None`) from the start.
#[must_use]
pub fn ltrim(input: &str, chars: Option<&str>) -> String {
    match chars {
        Some(set) => input.trim_start_matches(|c: char| set.contains(c)).to_owned(),
        None => input.trim_start().to_owned(),
    }
}

/// Trims `chars` (whitespace when `None`) from the end.
#[must_use]
pub fn rtrim(input: &str, chars: Option<&str>) -> String {
    match chars {
        Some(set) => input.trim_end_matches(|c: char| set.contains(c)).to_owned(),
        None => input.trim_end().to_owned(),
    }
}

/// Keeps only characters found in `chars`.
#[must_use]
pub fn whitelist(input: &str, chars: &str) -> String {
    input.chars().filter(|c| chars.contains(*c)).collect()
}

/// Removes every character found in `chars`.
#[must_use]
pub fn blacklist(input: &str, chars: &str) -> String {
    input.chars().filter(|c| !chars.contains(*c)).collect()
}

// ============================================================================
// HTML ENTITIES
// ============================================================================

const ENTITIES: [(char, &str); 8] = [
    ('&', "&amp;"),
    ('"', "&quot;"),
    ('\'', "&#x27;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('/', "&#x2F;"),
    ('\\', "&#x5C;"),
    ('`', "&#96;"),
];

/// Replaces the HTML-significant characters (ampersand, quotes, angle
/// brackets, slashes and backtick) with entities.
#[must_use]
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match ENTITIES.iter().find(|(raw, _)| *raw == c) {
            Some((_, entity)) => out.push_str(entity),
            None => out.push(c),
        }
    }
    out
}

/// Reverses [`escape`].
#[must_use]
pub fn unescape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    'outer: while let Some(c) = rest.chars().next() {
        if c == '&' {
            for (raw, entity) in &ENTITIES {
                if let Some(tail) = rest.strip_prefix(entity) {
                    out.push(*raw);
                    rest = tail;
                    continue 'outer;
                }
            }
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    out
}

// ============================================================================
// CASING
// ============================================================================

/// Uppercases the first character and lowercases the rest.
///
/// ```
/// use valid8_validator::sanitizers::capitalize;
///
/// assert_eq!(capitalize("jOHN"), "John");
/// ```
#[must_use]
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

/// Splits `input` into words: runs of letters and digits, broken further at
/// `fooBar`, `XMLHttp` and letter/digit boundaries.
#[must_use]
pub fn words(input: &str) -> Vec<String> {
    let mut words = Vec::new();

    for run in input.split(|c: char| !c.is_alphanumeric()).filter(|r| !r.is_empty()) {
        let chars: Vec<char> = run.chars().collect();
        let mut current = String::new();

        for (i, &c) in chars.iter().enumerate() {
            if let Some(&prev) = i.checked_sub(1).and_then(|p| chars.get(p)) {
                let next = chars.get(i + 1).copied();
                let boundary = (prev.is_lowercase() && c.is_uppercase())
                    || (prev.is_uppercase()
                        && c.is_uppercase()
                        && next.is_some_and(char::is_lowercase))
                    || (prev.is_alphabetic() && c.is_numeric())
                    || (prev.is_numeric() && c.is_alphabetic());
                if boundary && !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            }
            current.push(c);
        }

        if !current.is_empty() {
            words.push(current);
        }
    }

    words
}

/// Start case: each word's first letter uppercased, words joined by spaces.
/// The rest of each word is left as is.
///
/// ```
/// use valid8_validator::sanitizers::start_case;
///
/// assert_eq!(start_case("--foo-bar--"), "Foo Bar");
/// assert_eq!(start_case("fooBar"), "Foo Bar");
/// assert_eq!(start_case("__FOO_BAR__"), "FOO BAR");
/// ```
#[must_use]
pub fn start_case(input: &str) -> String {
    words(input)
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            chars
                .next()
                .map(|first| first.to_uppercase().chain(chars).collect::<String>())
                .unwrap_or_default()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// PHONE NUMBERS
// ============================================================================

/// Formats a phone number as E.164 (`+255714080898`).
///
/// National numbers (leading `0`) are read in `country` (ISO 3166 alpha-2).
/// Returns `None` when the number cannot be resolved to 7..=15 digits with a
/// calling code.
///
/// ```
/// use valid8_validator::sanitizers::to_e164;
///
/// assert_eq!(to_e164("0714 080 898", Some("TZ")).as_deref(), Some("+255714080898"));
/// assert_eq!(to_e164("+1 (415) 555-1234", None).as_deref(), Some("+14155551234"));
/// assert_eq!(to_e164("714080898", None), None);
/// ```
#[must_use]
pub fn to_e164(input: &str, country: Option<&str>) -> Option<String> {
    let code = country.and_then(calling_code);
    let resolved = e164_digits(input, code);
    (resolved.international && (7..=15).contains(&resolved.digits.len()))
        .then(|| format!("+{}", resolved.digits))
}
