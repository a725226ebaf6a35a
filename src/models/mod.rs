mod analysis;
mod errors;
#[cfg(test)]
mod tests;
mod transaction;

pub use analysis::Analysis;
pub use transaction::{RawTransaction, Transaction};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum TransactionType {
    Credit,
    Debit
}

impl TransactionType {
    /// Matches the exact lowercase literals used in transaction logs.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "credit" => Some(TransactionType::Credit),
            "debit" => Some(TransactionType::Debit),
            _ => None
        }
    }
}
