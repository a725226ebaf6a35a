use serde::Deserialize;

use crate::models::errors::RejectionError;
use crate::models::TransactionType;
use crate::types::{Category, Contact, RawAmount, TransactionId};

/// Represents a single row from a transaction log, exactly as it was read.
///
/// Nothing is validated here. The type is kept as free text and the amount as a
/// [`RawAmount`] so that malformed rows still load and can be excluded later,
/// instead of failing the whole log.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTransaction {
    #[serde(default)]
    pub id: TransactionId,
    #[serde(rename = "type", default)]
    pub transaction_type: String,
    #[serde(default)]
    pub amount: RawAmount,
    /// The counterparty.
    #[serde(default)]
    pub to: Contact,
    #[serde(default)]
    pub category: Category,
    /// Opaque, never parsed.
    #[serde(default)]
    pub date: String
}

/// A transaction that passed validation: positive finite amount and a known type.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,
    pub transaction_type: TransactionType,
    pub amount: f64,
    pub to: Contact,
    pub category: Category,
    pub date: String
}

impl Transaction {
    pub fn is_credit(&self) -> bool {
        self.transaction_type == TransactionType::Credit
    }
}

impl TryFrom<&RawTransaction> for Transaction {
    type Error = RejectionError;

    fn try_from(raw: &RawTransaction) -> Result<Self, Self::Error> {
        let amount = raw.amount.validate()
            .map_err(|error| RejectionError::invalid_amount(raw, error))?;

        let transaction_type = TransactionType::parse(&raw.transaction_type)
            .ok_or_else(|| RejectionError::unknown_type(raw))?;

        Ok(Transaction {
            id: raw.id.clone(),
            transaction_type,
            amount,
            to: raw.to.clone(),
            category: raw.category.clone(),
            date: raw.date.clone()
        })
    }
}
