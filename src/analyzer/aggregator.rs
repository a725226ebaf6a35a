use std::collections::HashMap;

use crate::analyzer::{LARGE_AMOUNT_THRESHOLD, SMALL_AMOUNT_THRESHOLD};
use crate::models::{Analysis, Transaction};

/// Running totals for a single pass over the valid records.
///
/// Lives only for the duration of one `analyze` call and borrows from that
/// call's validated records.
pub struct Aggregator<'a> {
    total_credit: f64,
    total_debit: f64,
    count: usize,
    highest: &'a Transaction,
    category_totals: HashMap<&'a str, f64>,
    contact_counts: HashMap<&'a str, usize>,
    frequent_contact: &'a str,
    frequent_count: usize,
    all_above_small: bool,
    has_large: bool
}

impl<'a> Aggregator<'a> {
    /// Seeds the running maximum with the first valid record.
    pub fn new(first: &'a Transaction) -> Self {
        Self {
            total_credit: 0.0,
            total_debit: 0.0,
            count: 0,
            highest: first,
            category_totals: HashMap::new(),
            contact_counts: HashMap::new(),
            frequent_contact: "",
            frequent_count: 0,
            all_above_small: true,
            has_large: false
        }
    }

    pub fn absorb(mut self, transaction: &'a Transaction) -> Self {
        let amount = transaction.amount;

        if transaction.is_credit() {
            self.total_credit += amount;
        } else {
            self.total_debit += amount;
        }

        self.count += 1;

        //NOTE: Strict comparison keeps the earliest record on a tie
        if amount > self.highest.amount {
            self.highest = transaction;
        }

        *self.category_totals.entry(transaction.category.as_str()).or_insert(0.0) += amount;

        let count = self.contact_counts.entry(transaction.to.as_str()).or_insert(0);
        *count += 1;

        //NOTE: Strict comparison keeps the contact that reached the count first
        if *count > self.frequent_count {
            self.frequent_count = *count;
            self.frequent_contact = transaction.to.as_str();
        }

        self.all_above_small &= amount > SMALL_AMOUNT_THRESHOLD;
        self.has_large |= amount >= LARGE_AMOUNT_THRESHOLD;

        self
    }

    pub fn finish(self) -> Analysis {
        let total = self.total_credit + self.total_debit;
        //NOTE: Saturates at i64::MAX when the summed amounts overflow to infinity
        let avg_transaction = (total / self.count as f64).round() as i64;

        Analysis {
            total_credit: self.total_credit,
            total_debit: self.total_debit,
            net_balance: self.total_credit - self.total_debit,
            transaction_count: self.count,
            avg_transaction,
            highest_transaction: self.highest.clone(),
            category_breakdown: self.category_totals.into_iter()
                .map(|(category, amount)| (category.to_string(), amount))
                .collect(),
            frequent_contact: self.frequent_contact.to_string(),
            all_above_100: self.all_above_small,
            has_large_transaction: self.has_large
        }
    }
}
