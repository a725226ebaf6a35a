//! Transaction-log analysis: validate, aggregate, assemble.
//!
//! Each call is independent and never mutates its input. Per-record problems are
//! dropped silently (logged at debug level); only the absence of any usable
//! record is reported, as `None`.

mod aggregator;
mod validator;

use tracing::debug;

use crate::models::{Analysis, RawTransaction};

use aggregator::Aggregator;
pub use validator::validate;

/// Every valid amount must exceed this for `all_above_100`.
pub const SMALL_AMOUNT_THRESHOLD: f64 = 100.0;
/// Any valid amount at or above this sets `has_large_transaction`.
pub const LARGE_AMOUNT_THRESHOLD: f64 = 5000.0;

/// Analyzes a transaction log.
///
/// Returns `None` when the log is empty or when no record survives validation.
/// The two cases are deliberately not distinguished.
pub fn analyze(transactions: &[RawTransaction]) -> Option<Analysis> {
    if transactions.is_empty() {
        debug!("Transaction log is empty");
        return None;
    }

    let valid = validate(transactions);

    let Some(first) = valid.first() else {
        debug!("None of the {} transactions are valid", transactions.len());
        return None;
    };

    let analysis = valid.iter()
        .fold(Aggregator::new(first), Aggregator::absorb)
        .finish();

    Some(analysis)
}
