mod args;
#[cfg(test)]
mod tests;

use clap::Parser;
use tracing::level_filters::LevelFilter;

pub use args::{CliArgs, Command};

pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

pub fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}
