//! Command line definition.

use clap::error::ErrorKind;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Exit code for bad usage or bad input.
pub const EXIT_FAILURE: u8 = 1;

/// Print the parts of a base network that are not covered by any exclusion.
///
/// Results are the fewest CIDR blocks this splitting produces, in ascending
/// address order. Prints nothing when one exclusion covers the whole base.
#[derive(Debug, Parser)]
#[command(name = "net-exclude")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Network to use, n.n.n.n/n
    #[arg(value_name = "BASE")]
    pub base: String,

    /// Networks to exclude, x.x.x.x/x (omit /x for a single host)
    #[arg(value_name = "EXCLUDE", required = true, num_args = 1..)]
    pub exclusions: Vec<String>,

    /// Output format
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(long, short, action = ArgAction::Count)]
    pub verbose: u8,

    /// No log output at all
    #[arg(long, short, conflicts_with = "verbose")]
    pub quiet: bool,

    /// log4rs YAML file to use instead of the built-in stderr logger
    #[arg(long = "log-config", value_name = "FILE")]
    pub log_config: Option<PathBuf>,
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One CIDR per line
    Plain,
    /// Quoted CSV with first and last address and address count
    Csv,
    /// JSON array of CIDR strings
    Json,
}

/// Exit code for a clap parse failure: 0 for `--help`/`--version`, 1 otherwise.
pub fn exit_code_for(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => 0,
        _ => EXIT_FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_positional() {
        let cli = Cli::try_parse_from(["net-exclude", "10.0.0.0/24", "10.0.0.5", "10.0.0.128/25"])
            .unwrap();
        assert_eq!(cli.base, "10.0.0.0/24");
        assert_eq!(cli.exclusions, vec!["10.0.0.5", "10.0.0.128/25"]);
        assert_eq!(cli.format, OutputFormat::Plain);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
        assert!(cli.log_config.is_none());
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "net-exclude",
            "-vv",
            "--format",
            "json",
            "10.0.0.0/8",
            "10.1.0.0/16",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_too_few_arguments_exit_one() {
        let err = Cli::try_parse_from(["net-exclude", "10.0.0.0/24"]).unwrap_err();
        assert_eq!(exit_code_for(&err), EXIT_FAILURE);

        let err = Cli::try_parse_from(["net-exclude"]).unwrap_err();
        assert_eq!(exit_code_for(&err), EXIT_FAILURE);
    }

    #[test]
    fn test_help_exit_zero() {
        let err = Cli::try_parse_from(["net-exclude", "--help"]).unwrap_err();
        assert_eq!(exit_code_for(&err), 0);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let err = Cli::try_parse_from(["net-exclude", "-q", "-v", "10.0.0.0/8", "10.0.0.1"])
            .unwrap_err();
        assert_eq!(exit_code_for(&err), EXIT_FAILURE);
    }
}
