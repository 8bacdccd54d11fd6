//! Output formatting for exclusion results.
//!
//! This module handles writing result networks to a writer:
//! - [`plain`] - One CIDR per line
//! - [`csv`] - Quoted CSV with address range details
//! - [`json`] - JSON array of CIDR strings

mod csv;
mod json;
mod plain;

use crate::cli::OutputFormat;
use crate::models::Network;
use std::error::Error;
use std::io::Write;

pub use csv::{format_field, write_csv, CSV_HEADER};
pub use json::write_json;
pub use plain::write_plain;

/// Write `networks` to `out` in the requested format.
///
/// # Returns
/// The number of networks written.
pub fn write_networks<W, I>(
    out: &mut W,
    networks: I,
    format: OutputFormat,
) -> Result<usize, Box<dyn Error>>
where
    W: Write,
    I: IntoIterator<Item = Network>,
{
    let count = match format {
        OutputFormat::Plain => write_plain(out, networks)?,
        OutputFormat::Csv => write_csv(out, networks)?,
        OutputFormat::Json => write_json(out, networks)?,
    };
    out.flush()?;
    log::info!("Wrote {count} network(s) as {format:?}");
    Ok(count)
}
