use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("Unable to open CSV at path [{path}]: {source}")]
    Open {
        path: String,
        source: io::Error
    },
    #[error("Unable to read CSV header at path [{path}]: {source}")]
    Header {
        path: String,
        source: csv::Error
    },
    #[error("CSV at path [{path}] is missing the [{column}] column")]
    MissingColumn {
        path: String,
        column: &'static str
    },
    #[error("CSV at path [{path}] has an invalid row: {source}")]
    Row {
        path: String,
        source: csv::Error
    }
}
