use super::{parse_log_level, CliArgs, Command};

use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Result};
use clap::Parser;
use rust_decimal::Decimal;
use tracing::level_filters::LevelFilter;

#[test]
fn test_analyze_command_parses_input_path() -> Result<()> {
    let parsed = CliArgs::try_parse_from(["upi-ledger-tools", "analyze", "log.csv"])?;

    let Command::Analyze { input } = parsed.command else {
        bail!("Expected the analyze command");
    };

    assert_eq!(input, Path::new("log.csv"));
    assert_eq!(parsed.log_level, "error");

    Ok(())
}

#[test]
fn test_log_level_is_accepted_after_the_subcommand() -> Result<()> {
    let parsed = CliArgs::try_parse_from(["upi-ledger-tools", "analyze", "log.csv", "--log-level", "debug"])?;

    assert_eq!(parsed.log_level, "debug");

    Ok(())
}

#[test]
fn test_gst_command_parses_decimal_amounts() -> Result<()> {
    let parsed = CliArgs::try_parse_from(["upi-ledger-tools", "gst", "99.99", "food"])?;

    let Command::Gst { amount, category } = parsed.command else {
        bail!("Expected the gst command");
    };

    assert_eq!(amount, Decimal::from_str("99.99")?);
    assert_eq!(category, "food");

    let parsed = CliArgs::try_parse_from(["upi-ledger-tools", "gst", "-5", "food"])?;

    assert!(matches!(parsed.command, Command::Gst { amount, .. } if amount == Decimal::from(-5)));

    Ok(())
}

#[test]
fn test_gst_command_rejects_non_numeric_amounts() {
    assert!(CliArgs::try_parse_from(["upi-ledger-tools", "gst", "lots", "food"]).is_err());
}

#[test]
fn test_title_command_collects_all_words() -> Result<()> {
    let parsed = CliArgs::try_parse_from(["upi-ledger-tools", "title", "dil", "KA", "kya", "kare"])?;

    let Command::Title { words } = parsed.command else {
        bail!("Expected the title command");
    };

    assert_eq!(words, vec!["dil", "KA", "kya", "kare"]);

    Ok(())
}

#[test]
fn test_missing_subcommand_is_an_error() {
    assert!(CliArgs::try_parse_from(["upi-ledger-tools"]).is_err());
    assert!(CliArgs::try_parse_from(["upi-ledger-tools", "title"]).is_err());
}

#[test]
fn test_parse_log_level_maps_names_and_falls_back_to_error() {
    assert_eq!(parse_log_level("trace"), LevelFilter::TRACE);
    assert_eq!(parse_log_level("DEBUG"), LevelFilter::DEBUG);
    assert_eq!(parse_log_level("info"), LevelFilter::INFO);
    assert_eq!(parse_log_level("warn"), LevelFilter::WARN);
    assert_eq!(parse_log_level("error"), LevelFilter::ERROR);
    assert_eq!(parse_log_level("verbose"), LevelFilter::ERROR);
}
