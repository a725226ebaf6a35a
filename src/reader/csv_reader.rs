use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use csv::{Reader, ReaderBuilder, Trim};
use tracing::{error, info};

use crate::models::RawTransaction;
use crate::reader::errors::ReaderError;
use crate::utilities::SubjectMark;

const TRANSACTION_COLUMNS: [&str; 2] = ["type", "amount"];
const MARK_COLUMNS: [&str; 2] = ["subject", "marks"];

/// Loads a transaction log.
///
/// Rows are deserialized leniently so that bad amounts and unknown types reach
/// the validator. Short rows are padded with empty fields up to the header
/// width. A row that cannot be read at all is logged and skipped.
pub fn read_transactions(path: &Path) -> Result<Vec<RawTransaction>, ReaderError> {
    let mut reader = open(path, &TRANSACTION_COLUMNS)?;
    let headers = reader.headers()
        .map_err(|source| ReaderError::Header {
            path: path.display().to_string(),
            source
        })?
        .clone();
    let mut transactions = Vec::new();

    for result in reader.records() {
        let mut record = match result {
            Ok(record) => record,
            Err(error) => {
                error!("CSV read error: {error}");
                continue;
            }
        };

        while record.len() < headers.len() {
            record.push_field("");
        }

        match record.deserialize::<RawTransaction>(Some(&headers)) {
            Ok(transaction) => transactions.push(transaction),
            Err(error) => {
                error!("CSV deserialization error: {error}");
            }
        }
    }

    info!("Read {} transactions from {}", transactions.len(), path.display());

    Ok(transactions)
}

/// Loads `subject,marks` rows in file order. Any unreadable row fails the whole file.
pub fn read_marks(path: &Path) -> Result<Vec<SubjectMark>, ReaderError> {
    let mut reader = open(path, &MARK_COLUMNS)?;

    reader.deserialize::<SubjectMark>()
        .map(|result| result.map_err(|source| ReaderError::Row {
            path: path.display().to_string(),
            source
        }))
        .collect()
}

fn open(path: &Path, required: &[&'static str]) -> Result<Reader<BufReader<File>>, ReaderError> {
    let file = File::open(path).map_err(|source| ReaderError::Open {
        path: path.display().to_string(),
        source
    })?;

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let headers = reader.headers().map_err(|source| ReaderError::Header {
        path: path.display().to_string(),
        source
    })?;

    if let Some(&column) = required.iter().find(|column| !headers.iter().any(|header| header == **column)) {
        return Err(ReaderError::MissingColumn {
            path: path.display().to_string(),
            column
        });
    }

    Ok(reader)
}
