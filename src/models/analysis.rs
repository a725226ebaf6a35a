use std::collections::HashMap;

use crate::models::Transaction;
use crate::types::{Category, Contact};

/// Every metric derived from the valid records of one transaction log.
///
/// Built fresh on each call and owns all of its data, so it never aliases the
/// caller's input.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub total_credit: f64,
    pub total_debit: f64,
    /// `total_credit - total_debit`, may be negative.
    pub net_balance: f64,
    pub transaction_count: usize,
    /// Mean of all valid amounts, rounded to the nearest integer.
    pub avg_transaction: i64,
    /// First record in input order holding the maximum amount.
    pub highest_transaction: Transaction,
    /// Summed amount per category, credit and debit combined.
    pub category_breakdown: HashMap<Category, f64>,
    /// Counterparty that first reached the highest occurrence count.
    pub frequent_contact: Contact,
    pub all_above_100: bool,
    pub has_large_transaction: bool
}
