//! CSV output with the address range of each network.

use crate::models::Network;
use std::io::{self, Write};

/// Header row written before any network.
pub const CSV_HEADER: &str = r#""cidr","first","last","addresses""#;

/// Format a value as a quoted field, doubling any embedded quotes.
pub fn format_field<T: ToString>(value: T) -> String {
    let value_str = value.to_string();
    format!("\"{}\"", value_str.replace('"', "\"\""))
}

/// Write the header, then one row per network.
pub fn write_csv<W, I>(out: &mut W, networks: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = Network>,
{
    writeln!(out, "{CSV_HEADER}")?;
    let mut count = 0;
    for network in networks {
        writeln!(
            out,
            "{cidr},{first},{last},{addresses}",
            cidr = format_field(network),
            first = format_field(network.first()),
            last = format_field(network.last()),
            addresses = format_field(network.size()),
        )?;
        count += 1;
    }
    Ok(count)
}
