//! Input error types.
//!
//! [`NetworkParseError`] describes why a single string is not a usable
//! network. [`InputError`] attaches the offending argument and its role so the
//! command line can report it.

use thiserror::Error;

/// Why a string could not be turned into a [`super::Network`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkParseError {
    #[error("expected a dotted-quad address with a prefix length")]
    MissingPrefix,

    #[error("malformed address or prefix length")]
    Malformed,

    #[error("prefix length {0} is out of range 0-32")]
    PrefixOutOfRange(u32),

    #[error("address {addr} has bits set outside its /{len} prefix")]
    HostBitsSet { addr: std::net::Ipv4Addr, len: u8 },
}

impl NetworkParseError {
    /// Syntax errors are reported as "Bad network", host bits as "Invalid network/mask".
    pub fn is_semantic(&self) -> bool {
        matches!(self, NetworkParseError::HostBitsSet { .. })
    }
}

/// Errors raised while turning command line arguments into networks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("a base network and at least one network to exclude are required")]
    MissingArguments,

    #[error("Bad network: {arg} ({source})")]
    BadBase {
        arg: String,
        #[source]
        source: NetworkParseError,
    },

    #[error("Bad network: {arg} ({source})")]
    BadExclusion {
        arg: String,
        #[source]
        source: NetworkParseError,
    },

    #[error("Invalid network/mask: {arg} ({source})")]
    InvalidNetwork {
        arg: String,
        #[source]
        source: NetworkParseError,
    },
}

impl InputError {
    /// Wrap a parse failure of the base network argument.
    pub fn base(arg: &str, source: NetworkParseError) -> Self {
        if source.is_semantic() {
            InputError::InvalidNetwork {
                arg: arg.to_string(),
                source,
            }
        } else {
            InputError::BadBase {
                arg: arg.to_string(),
                source,
            }
        }
    }

    /// Wrap a parse failure of an exclusion argument.
    pub fn exclusion(arg: &str, source: NetworkParseError) -> Self {
        if source.is_semantic() {
            InputError::InvalidNetwork {
                arg: arg.to_string(),
                source,
            }
        } else {
            InputError::BadExclusion {
                arg: arg.to_string(),
                source,
            }
        }
    }

    /// The argument that caused the error, if any.
    pub fn arg(&self) -> Option<&str> {
        match self {
            InputError::MissingArguments => None,
            InputError::BadBase { arg, .. }
            | InputError::BadExclusion { arg, .. }
            | InputError::InvalidNetwork { arg, .. } => Some(arg),
        }
    }
}
