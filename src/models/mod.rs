//! Domain models for network exclusion.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Network`] - IPv4 network in CIDR notation
//! - [`NetworkParseError`] and [`InputError`] - Input validation errors

mod error;
mod network;

// Re-export public types
pub use error::{InputError, NetworkParseError};
pub use network::{format_addr, get_cidr_mask, parse_addr, Network, MAX_LENGTH};
