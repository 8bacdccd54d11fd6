//! log4rs setup.
//!
//! Logs always go to stderr so stdout carries nothing but results.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const STDERR_APPENDER: &str = "stderr";
const PATTERN: &str = "{d(%H:%M:%S%.3f)} {h({l:<5})} {t} - {m}{n}";

/// Map `-v` count and `-q` to a level: warn by default, up to trace.
pub fn level_filter(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Off;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Build the default configuration: a single stderr appender at `level`.
pub fn stderr_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build(STDERR_APPENDER, Box::new(stderr)))
        .build(Root::builder().appender(STDERR_APPENDER).build(level))?;
    Ok(config)
}

/// Install the global logger.
///
/// With `config_file` the log4rs YAML file decides everything, otherwise
/// [`stderr_config`] is used at the level given by [`level_filter`].
pub fn init(verbose: u8, quiet: bool, config_file: Option<&Path>) -> Result<(), Box<dyn Error>> {
    if let Some(path) = config_file {
        log4rs::init_file(path, Default::default())
            .map_err(|e| format!("Error loading log config {}: {e}", path.display()))?;
        log::debug!("Logging configured from {}", path.display());
        return Ok(());
    }

    let level = level_filter(verbose, quiet);
    log4rs::init_config(stderr_config(level)?)?;
    log::debug!("Logging to stderr at level {level}");
    Ok(())
}
