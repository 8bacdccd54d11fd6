//! Network exclusion logic.
//!
//! This module contains the business logic of the tool:
//! - [`exclude`] - The exclusion engine
//! - [`plan`] - Argument validation and the covered-base short cut

mod exclude;
mod plan;

// Re-export public functions
pub use exclude::{exclude, exclude_all, Exclude};
pub use plan::{build_plan, Plan};
