mod analyzer;
mod cli;
mod models;
mod reader;
mod types;
mod utilities;

use std::io::{stderr, stdout, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{bail, Result};
use csv::Writer;
use rust_decimal::Decimal;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::cli::Command;
use crate::models::Analysis;
use crate::utilities::{ReportCard, Student};

fn main() -> Result<()> {
    let args = cli::parse_args();

    setup_logging(cli::parse_log_level(&args.log_level));

    let mut output = BufWriter::new(stdout().lock());

    match args.command {
        Command::Analyze { input } => run_analyze(&input, &mut output)?,
        Command::Gst { amount, category } => run_gst(amount, &category, &mut output)?,
        Command::Title { words } => writeln!(output, "{}", utilities::fix_title(&words.join(" ")))?,
        Command::Report { name, marks } => run_report(name, &marks, &mut output)?
    }

    output.flush()?;

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    //NOTE: Results go to stdout, so logging has to use stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn run_analyze(path: &Path, output: &mut impl Write) -> Result<()> {
    let transactions = reader::read_transactions(path)?;

    let timer = Instant::now();
    let analysis = analyzer::analyze(&transactions);
    let duration = timer.elapsed();

    info!("Analyzed transactions in: {duration:?}");

    let Some(analysis) = analysis else {
        bail!("No valid transactions found in {}", path.display());
    };

    write_analysis(&analysis, output)
}

fn run_gst(amount: Decimal, category: &str, output: &mut impl Write) -> Result<()> {
    let Some(bill) = utilities::calculate_gst(amount, category) else {
        bail!("Unable to calculate GST for amount [{amount}] in category [{category}]");
    };

    let mut writer = Writer::from_writer(output);
    writer.serialize(&bill)?;
    writer.flush()?;

    Ok(())
}

fn run_report(name: String, path: &Path, output: &mut impl Write) -> Result<()> {
    let student = Student {
        name,
        marks: reader::read_marks(path)?
    };

    let Some(card) = utilities::generate_report_card(&student) else {
        bail!("Unable to generate a report card for [{}] from {}", student.name, path.display());
    };

    write_report_card(&card, output)
}

fn write_analysis(analysis: &Analysis, output: &mut impl Write) -> Result<()> {
    let metrics = [
        ("total_credit", analysis.total_credit.to_string()),
        ("total_debit", analysis.total_debit.to_string()),
        ("net_balance", analysis.net_balance.to_string()),
        ("transaction_count", analysis.transaction_count.to_string()),
        ("avg_transaction", analysis.avg_transaction.to_string()),
        ("highest_transaction", analysis.highest_transaction.id.clone()),
        ("highest_amount", analysis.highest_transaction.amount.to_string()),
        ("frequent_contact", analysis.frequent_contact.clone()),
        ("all_above_100", analysis.all_above_100.to_string()),
        ("has_large_transaction", analysis.has_large_transaction.to_string())
    ];

    let mut writer = Writer::from_writer(&mut *output);
    writer.write_record(["metric", "value"])?;

    for (metric, value) in &metrics {
        writer.write_record([*metric, value.as_str()])?;
    }

    writer.flush()?;
    drop(writer);

    writeln!(output)?;

    let mut categories: Vec<_> = analysis.category_breakdown.iter().collect();
    categories.sort_by(|left, right| left.0.cmp(right.0));

    let mut writer = Writer::from_writer(&mut *output);
    writer.write_record(["category", "amount"])?;

    for (category, amount) in categories {
        writer.write_record([category.as_str(), amount.to_string().as_str()])?;
    }

    writer.flush()?;

    Ok(())
}

fn write_report_card(card: &ReportCard, output: &mut impl Write) -> Result<()> {
    let fields = [
        ("name", card.name.clone()),
        ("total_marks", card.total_marks.to_string()),
        ("percentage", card.percentage.to_string()),
        ("grade", card.grade.to_string()),
        ("highest_subject", card.highest_subject.clone()),
        ("lowest_subject", card.lowest_subject.clone()),
        ("passed_subjects", card.passed_subjects.join(";")),
        ("failed_subjects", card.failed_subjects.join(";")),
        ("subject_count", card.subject_count.to_string())
    ];

    let mut writer = Writer::from_writer(output);
    writer.write_record(["field", "value"])?;

    for (field, value) in &fields {
        writer.write_record([*field, value.as_str()])?;
    }

    writer.flush()?;

    Ok(())
}
