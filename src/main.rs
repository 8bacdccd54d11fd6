use clap::Parser;
use colored::Colorize;
use net_exclude::cli::{exit_code_for, Cli, EXIT_FAILURE};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(exit_code_for(&e));
        }
    };

    if let Err(e) = net_exclude::logging::init(cli.verbose, cli.quiet, cli.log_config.as_deref()) {
        eprintln!("{} {e}", "error:".red().bold());
        return ExitCode::from(EXIT_FAILURE);
    }

    let stdout = std::io::stdout();
    match net_exclude::run(&cli, &mut stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("run() failed: {e:?}");
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
