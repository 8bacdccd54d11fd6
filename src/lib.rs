//! Subtract IPv4 CIDR blocks from a base network.
//!
//! The library does all the work so `main.rs` stays a thin wrapper:
//! - [`models`] - The [`models::Network`] primitive and input errors
//! - [`processing`] - The exclusion engine and argument planning
//! - [`output`] - Result writers
//! - [`cli`] and [`logging`] - Command line and log4rs setup

pub mod cli;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use cli::Cli;
use processing::{build_plan, Plan};
use std::error::Error;
use std::io::Write;

/// Validate the arguments in `cli`, run the exclusion and write the results to `out`.
///
/// Nothing is written when an exclusion covers the whole base network.
///
/// # Returns
/// * `Ok(count)` - The number of networks written
/// * `Err` - The first malformed or invalid argument, or a write failure
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<usize, Box<dyn Error>> {
    log::info!("#Start run() base={} exclusions={}", cli.base, cli.exclusions.len());

    let plan = build_plan(&cli.base, &cli.exclusions)?;
    if let Plan::Covered { base, by } = &plan {
        log::info!("{by} covers {base}, no output");
        return Ok(0);
    }

    output::write_networks(out, plan.networks(), cli.format)
}
