use crate::models::RawTransaction;
use crate::types::{AmountError, TransactionId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RejectionError {
    #[error("Transaction [{transaction_id}] rejected: {source}")]
    InvalidAmount {
        transaction_id: TransactionId,
        source: AmountError
    },
    #[error("Transaction [{transaction_id}] rejected: unknown type [{transaction_type}]")]
    UnknownType {
        transaction_id: TransactionId,
        transaction_type: String
    }
}

impl RejectionError {
    pub fn invalid_amount(raw: &RawTransaction, source: AmountError) -> Self {
        Self::InvalidAmount {
            transaction_id: raw.id.clone(),
            source
        }
    }

    pub fn unknown_type(raw: &RawTransaction) -> Self {
        Self::UnknownType {
            transaction_id: raw.id.clone(),
            transaction_type: raw.transaction_type.clone()
        }
    }
}
