//! IPv4 network (CIDR block) primitive.
//!
//! Provides [`Network`] for representing an address with its prefix length,
//! along with the mask and address helpers the exclusion engine is built on.

use super::NetworkParseError;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::OnceLock;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Address with an optional `/len`. Whether the prefix is required is decided by the caller.
static NETWORK_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_network_regex() -> &'static Regex {
    NETWORK_REGEX.get_or_init(|| {
        Regex::new(r"^(?P<addr>\d+\.\d+\.\d+\.\d+)(?:/(?P<len>\d{1,2}))?$").expect("Invalid Regex")
    })
}

/// Convert a prefix length to a subnet mask as u32.
///
/// `len` must not exceed [`MAX_LENGTH`]; both `0` and `32` are handled without
/// an out-of-range shift.
///
/// # Examples
/// ```
/// use net_exclude::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(0), 0x00000000);
/// assert_eq!(get_cidr_mask(24), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(32), 0xFFFFFFFF);
/// ```
pub fn get_cidr_mask(len: u8) -> u32 {
    debug_assert!(len <= MAX_LENGTH, "prefix length {len} > {MAX_LENGTH}");
    u32::MAX
        .checked_shl(u32::from(MAX_LENGTH.saturating_sub(len)))
        .unwrap_or(0)
}

/// Parse a dotted-quad string into its numeric (big-endian) form.
pub fn parse_addr(addr: &str) -> Result<u32, NetworkParseError> {
    Ipv4Addr::from_str(addr)
        .map(u32::from)
        .map_err(|_| NetworkParseError::Malformed)
}

/// Render a numeric address as a dotted-quad string.
pub fn format_addr(bits: u32) -> String {
    Ipv4Addr::from(bits).to_string()
}

/// IPv4 network in CIDR notation.
///
/// A `Network` is always valid: no address bit is set outside its prefix.
/// Two networks are equal only when both address and prefix length match.
/// Ordering is by address, then prefix length.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Network {
    addr: Ipv4Addr,
    len: u8,
}

impl Network {
    /// Create a network, rejecting prefix lengths above 32 and host bits set outside the prefix.
    pub fn new(addr: Ipv4Addr, len: u8) -> Result<Network, NetworkParseError> {
        if len > MAX_LENGTH {
            return Err(NetworkParseError::PrefixOutOfRange(u32::from(len)));
        }
        let network = Network { addr, len };
        if !network.is_valid() {
            return Err(NetworkParseError::HostBitsSet { addr, len });
        }
        Ok(network)
    }

    /// Parse an exclusion argument: `a.b.c.d/n`, or a bare `a.b.c.d` meaning a single host (/32).
    pub fn parse_host_or_cidr(s: &str) -> Result<Network, NetworkParseError> {
        parse_with_default(s, Some(MAX_LENGTH))
    }

    /// The network address.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// The prefix length (0-32).
    pub fn prefix_len(&self) -> u8 {
        self.len
    }

    /// The network address as a u32.
    pub fn bits(&self) -> u32 {
        u32::from(self.addr)
    }

    /// The subnet mask for this network's prefix length.
    pub fn mask(&self) -> u32 {
        get_cidr_mask(self.len)
    }

    /// True when no address bit is set outside the prefix.
    pub fn is_valid(&self) -> bool {
        self.len <= MAX_LENGTH && self.bits() & self.mask() == self.bits()
    }

    /// True when `other` lies entirely inside this network.
    ///
    /// Every network contains itself. A longer prefix never contains a shorter one.
    pub fn contains(&self, other: &Network) -> bool {
        let mask = self.mask();
        self.bits() & mask == other.bits() & mask && self.len <= other.len
    }

    /// Split into the low and high halves of the address range.
    ///
    /// Returns `None` for a single host (/32).
    pub fn split(&self) -> Option<(Network, Network)> {
        if self.len >= MAX_LENGTH {
            return None;
        }
        let len = self.len + 1;
        let bit = 1u32 << (MAX_LENGTH - len);
        let lo = Network {
            addr: self.addr,
            len,
        };
        let hi = Network {
            addr: Ipv4Addr::from(self.bits() | bit),
            len,
        };
        Some((lo, hi))
    }

    /// Lowest (network) address.
    pub fn first(&self) -> Ipv4Addr {
        self.addr
    }

    /// Highest (broadcast) address.
    pub fn last(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.bits() | !self.mask())
    }

    /// Number of addresses covered, 1 for a /32 up to 2^32 for /0.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.len)
    }
}

fn parse_with_default(s: &str, default_len: Option<u8>) -> Result<Network, NetworkParseError> {
    let caps = get_network_regex()
        .captures(s)
        .ok_or(NetworkParseError::Malformed)?;

    let addr = Ipv4Addr::from(parse_addr(&caps["addr"])?);
    let len = match (caps.name("len"), default_len) {
        (Some(len), _) => {
            // at most two digits, so this cannot overflow
            let len: u32 = len
                .as_str()
                .parse()
                .map_err(|_| NetworkParseError::Malformed)?;
            if len > u32::from(MAX_LENGTH) {
                return Err(NetworkParseError::PrefixOutOfRange(len));
            }
            len as u8
        }
        (None, Some(default_len)) => default_len,
        (None, None) => return Err(NetworkParseError::MissingPrefix),
    };

    Network::new(addr, len)
}

impl FromStr for Network {
    type Err = NetworkParseError;

    /// Parse strict CIDR notation, e.g. "10.0.0.0/24". The prefix length is mandatory.
    fn from_str(s: &str) -> Result<Network, NetworkParseError> {
        parse_with_default(s, None)
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        assert!(
            self.is_valid(),
            "Invalid network for display: {}/{}",
            self.addr,
            self.len
        );
        write!(f, "{}/{}", self.addr, self.len)
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> Result<Network, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Network::from_str(&s).map_err(|e| de::Error::custom(format!("invalid CIDR {s}: {e}")))
    }
}
