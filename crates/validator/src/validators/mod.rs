//! Built-in predicates
//!
//! One [`Validate`](crate::foundation::Validate) implementation per rule,
//! each taking `&str`.
//!
//! # Categories
//!
//! - **Content**: email, URL, data URI, MIME type
//! - **Network**: FQDN, IP address, MAC address
//! - **Text**: alpha, alphanumeric (per locale), ASCII, case, contains,
//!   equals, membership, regex match, length
//! - **Encoded**: MD5, hexadecimal, hex colour, UUID, base64, JWT
//! - **Numbers**: numeric, integer, float
//! - **Identity**: credit card, mobile phone, phone
//! - **Dates**: before, after

// Text validators
pub mod alpha;
pub mod content;
pub mod length;
pub mod locale;
pub mod pattern;

// Encoded validators
pub mod encoding;
pub mod hash;
pub mod uuid;

// Numeric validators
pub mod numeric;

// Network validators
pub mod hostname;
pub mod ip_address;
pub mod mac_address;

// Identity validators
pub mod credit_card;
pub mod phone;

// Time validators
pub mod date;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use alpha::{Alpha, Alphanumeric, alpha, alphanumeric};
pub use content::{DataUri, Email, MimeType, Url, data_uri, mime_type};
pub use length::Length;
pub use locale::{Locale, UnknownLocale};
pub use pattern::{
    Ascii, Contains, Equals, IsIn, Lowercase, Matches, Uppercase, ascii, contains, equals, is_in,
    lowercase, matches, uppercase,
};

pub use encoding::{Base64, Jwt, jwt};
pub use hash::{HexColor, Hexadecimal, Md5, hex_color, hexadecimal, md5};
pub use uuid::Uuid;

pub use numeric::{Float, Int, Numeric};

pub use hostname::Fqdn;
pub use ip_address::{IpAddress, IpVersion};
pub use mac_address::MacAddress;

pub use credit_card::{CardType, CardTypes, CreditCard, luhn};
pub use phone::{MobilePhone, Phone, UnknownCountry, calling_code};

pub use date::{After, Before, parse_date};
