use super::errors::RejectionError;
use super::{RawTransaction, Transaction, TransactionType};

use anyhow::Result;

use crate::types::{AmountError, RawAmount};

fn create_raw(id: &str, transaction_type: &str, amount: RawAmount) -> RawTransaction {
    RawTransaction {
        id: id.to_string(),
        transaction_type: transaction_type.to_string(),
        amount,
        to: "Rahul".to_string(),
        category: "food".to_string(),
        date: "2025-01-15".to_string()
    }
}

#[test]
fn test_transaction_type_matches_exact_literals_only() {
    assert_eq!(TransactionType::parse("credit"), Some(TransactionType::Credit));
    assert_eq!(TransactionType::parse("debit"), Some(TransactionType::Debit));
    assert_eq!(TransactionType::parse("Credit"), None);
    assert_eq!(TransactionType::parse("DEBIT"), None);
    assert_eq!(TransactionType::parse("refund"), None);
    assert_eq!(TransactionType::parse(""), None);
}

#[test]
fn test_valid_raw_transaction_converts_with_all_fields() -> Result<()> {
    let raw = create_raw("TXN001", "debit", RawAmount::from(250.5));
    let transaction = Transaction::try_from(&raw)?;

    assert_eq!(transaction.id, "TXN001");
    assert_eq!(transaction.transaction_type, TransactionType::Debit);
    assert_eq!(transaction.amount, 250.5);
    assert_eq!(transaction.to, "Rahul");
    assert_eq!(transaction.category, "food");
    assert_eq!(transaction.date, "2025-01-15");
    assert!(!transaction.is_credit());

    Ok(())
}

#[test]
fn test_conversion_reports_amount_failures() {
    let raw = create_raw("TXN002", "credit", RawAmount::from(-5.0));
    let result = Transaction::try_from(&raw);

    assert_eq!(result, Err(RejectionError::InvalidAmount {
        transaction_id: "TXN002".to_string(),
        source: AmountError::NotPositive(-5.0)
    }));
}

#[test]
fn test_conversion_reports_unknown_types() {
    let raw = create_raw("TXN003", "refund", RawAmount::from(100.0));
    let result = Transaction::try_from(&raw);

    assert!(matches!(result, Err(RejectionError::UnknownType { ref transaction_type, .. }) if transaction_type == "refund"));
}

#[test]
fn test_missing_descriptive_fields_are_accepted() -> Result<()> {
    let raw = RawTransaction {
        transaction_type: "credit".to_string(),
        amount: RawAmount::from(10.0),
        ..RawTransaction::default()
    };

    let transaction = Transaction::try_from(&raw)?;

    assert_eq!(transaction.category, "");
    assert_eq!(transaction.to, "");
    assert!(transaction.is_credit());

    Ok(())
}

#[test]
fn test_rejection_messages_name_the_transaction() {
    let raw = create_raw("TXN004", "credit", RawAmount::from("abc"));
    let error = Transaction::try_from(&raw).err().map(|error| error.to_string());

    assert_eq!(error.as_deref(), Some("Transaction [TXN004] rejected: Amount error: Value [abc] is not a number"));
}
