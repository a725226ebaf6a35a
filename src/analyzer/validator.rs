use tracing::debug;

use crate::models::{RawTransaction, Transaction};

/// Keeps the records with a finite positive amount and a `credit`/`debit` type,
/// in input order.
pub fn validate(transactions: &[RawTransaction]) -> Vec<Transaction> {
    transactions.iter()
        .filter_map(|raw| match Transaction::try_from(raw) {
            Ok(transaction) => Some(transaction),
            Err(error) => {
                debug!("{error}");
                None
            }
        })
        .collect()
}
