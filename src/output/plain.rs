//! Plain output: one canonical CIDR per line.

use crate::models::Network;
use std::io::{self, Write};

/// Write each network on its own line, streaming as the iterator yields.
pub fn write_plain<W, I>(out: &mut W, networks: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = Network>,
{
    let mut count = 0;
    for network in networks {
        writeln!(out, "{network}")?;
        count += 1;
    }
    Ok(count)
}
