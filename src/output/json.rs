//! JSON output: an array of CIDR strings.

use crate::models::Network;
use std::io::{self, Write};

/// Write all networks as one pretty-printed JSON array, followed by a newline.
pub fn write_json<W, I>(out: &mut W, networks: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = Network>,
{
    let networks: Vec<Network> = networks.into_iter().collect();
    serde_json::to_writer_pretty(&mut *out, &networks)?;
    writeln!(out)?;
    Ok(networks.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_json() {
        let nets: Vec<Network> = ["10.0.0.0/30", "10.0.0.4/32"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        let mut out = Vec::new();
        assert_eq!(write_json(&mut out, nets).unwrap(), 2);
        let text = String::from_utf8(out).unwrap();
        let back: Vec<String> = serde_json::from_str(&text).unwrap();
        assert_eq!(back, vec!["10.0.0.0/30", "10.0.0.4/32"]);
        assert!(text.ends_with("]\n"));
    }

    #[test]
    fn test_write_json_empty() {
        let mut out = Vec::new();
        assert_eq!(write_json(&mut out, Vec::new()).unwrap(), 0);
        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
    }
}
