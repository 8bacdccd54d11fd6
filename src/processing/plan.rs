//! Turning raw arguments into a base network and its exclusions.
//!
//! Arguments are validated in order. As soon as one exclusion covers the whole
//! base network the answer is known to be empty, and the remaining arguments
//! are not looked at.

use super::exclude::{exclude, Exclude};
use crate::models::{InputError, Network};
use colored::Colorize;

/// Validated input for the exclusion engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    /// `by` covers all of `base`; the result is empty and the engine is not run.
    Covered { base: Network, by: Network },
    /// Subtract `exclusions` from `base`.
    Exclude {
        base: Network,
        exclusions: Vec<Network>,
    },
}

impl Plan {
    /// The base network the plan was built for.
    pub fn base(&self) -> Network {
        match self {
            Plan::Covered { base, .. } | Plan::Exclude { base, .. } => *base,
        }
    }

    /// Run the engine, or yield nothing when the base is covered.
    pub fn networks(&self) -> Exclude<'_> {
        match self {
            Plan::Covered { base, by } => exclude(*base, std::slice::from_ref(by)),
            Plan::Exclude { base, exclusions } => exclude(*base, exclusions),
        }
    }
}

/// Parse `base` (strict `a.b.c.d/n`) and each exclusion (`a.b.c.d` or `a.b.c.d/n`).
///
/// # Returns
/// * `Ok(Plan::Covered)` - an exclusion covers the whole base; later arguments were skipped
/// * `Ok(Plan::Exclude)` - every argument parsed and none covers the base
/// * `Err` - the first malformed or invalid argument
pub fn build_plan<S: AsRef<str>>(base: &str, exclusions: &[S]) -> Result<Plan, InputError> {
    if exclusions.is_empty() {
        return Err(InputError::MissingArguments);
    }

    let base_net: Network = base.parse().map_err(|e| InputError::base(base, e))?;
    log::debug!("base network {}", base_net.to_string().on_blue());

    let mut parsed = Vec::with_capacity(exclusions.len());
    for arg in exclusions {
        let arg = arg.as_ref();
        let exclusion =
            Network::parse_host_or_cidr(arg).map_err(|e| InputError::exclusion(arg, e))?;

        if exclusion.contains(&base_net) {
            log::info!(
                "{exclusion} covers {base_net}, nothing left; {skipped} argument(s) not checked",
                skipped = exclusions.len() - parsed.len() - 1
            );
            return Ok(Plan::Covered {
                base: base_net,
                by: exclusion,
            });
        }

        if !base_net.contains(&exclusion) {
            log::debug!("{exclusion} is outside {base_net}");
        }
        parsed.push(exclusion);
    }

    log::debug!("{} exclusion(s) accepted", parsed.len());
    Ok(Plan::Exclude {
        base: base_net,
        exclusions: parsed,
    })
}
