//! IP address validator (IPv4 dotted quad, IPv6 with `::` compression and
//! embedded IPv4 tails).

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

use crate::foundation::{Validate, ValidationError};

/// Which address families an [`IpAddress`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IpVersion {
    #[default]
    Any,
    V4,
    V6,
}

impl IpVersion {
    /// Maps `4`, `6` or anything else (any family).
    #[must_use]
    pub const fn from_number(version: u64) -> Self {
        match version {
            4 => Self::V4,
            6 => Self::V6,
            _ => Self::Any,
        }
    }
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("IP address"),
            Self::V4 => f.write_str("IPv4 address"),
            Self::V6 => f.write_str("IPv6 address"),
        }
    }
}

/// Validates textual IP addresses.
///
/// Octets with leading zeros (`0200.1.1.1`) are rejected, as are IPv6
/// addresses with too many groups.
///
/// # Examples
///
/// ```
/// use valid8_validator::validators::{IpAddress, IpVersion};
/// use valid8_validator::foundation::Validate;
///
/// assert!(IpAddress::new().is_valid("::ffff:127.0.0.1"));
/// assert!(!IpAddress::new().is_valid("256.0.0.0"));
/// assert!(!IpAddress::version(IpVersion::V6).is_valid("1.2.3.4"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IpAddress {
    version: IpVersion,
}

impl IpAddress {
    /// Accepts both families.
    #[must_use]
    pub const fn new() -> Self {
        Self { version: IpVersion::Any }
    }

    /// Accepts one family only.
    #[must_use]
    pub const fn version(version: IpVersion) -> Self {
        Self { version }
    }
}

impl Validate for IpAddress {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let accepted = match self.version {
            IpVersion::V4 => input.parse::<Ipv4Addr>().is_ok(),
            IpVersion::V6 => input.parse::<Ipv6Addr>().is_ok(),
            IpVersion::Any => {
                input.parse::<Ipv4Addr>().is_ok() || input.parse::<Ipv6Addr>().is_ok()
            }
        };

        if accepted {
            Ok(())
        } else {
            Err(ValidationError::invalid_format(self.version.to_string()))
        }
    }
}
