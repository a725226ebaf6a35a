use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Analyze UPI transaction logs and run the related ledger utilities
#[derive(Parser, Debug)]
#[command(name = "upi-ledger-tools")]
#[command(about = "Analyze UPI transaction logs and run the related ledger utilities", long_about = None)]
pub struct CliArgs {
    /// Verbosity of the stderr log
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "error",
        global = true,
        help = "Log level: error, warn, info, debug or trace"
    )]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Summarize a transaction log CSV (id,type,amount,to,category,date)
    Analyze {
        #[arg(value_name = "INPUT", help = "Path to the transaction log CSV")]
        input: PathBuf
    },
    /// Compute the GST bill for an amount and product category
    Gst {
        #[arg(value_name = "AMOUNT", allow_negative_numbers = true)]
        amount: Decimal,
        #[arg(value_name = "CATEGORY", help = "essential, food, standard, electronics or luxury")]
        category: String
    },
    /// Normalize a movie title to title case
    Title {
        #[arg(value_name = "TITLE", required = true, num_args = 1..)]
        words: Vec<String>
    },
    /// Generate a report card from a subject,marks CSV
    Report {
        #[arg(value_name = "NAME")]
        name: String,
        #[arg(value_name = "MARKS", help = "Path to the subject,marks CSV")]
        marks: PathBuf
    }
}
