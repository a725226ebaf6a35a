use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AmountError {
    #[error("Amount error: Value is missing")]
    Missing,
    #[error("Amount error: Value [{0}] is not a number")]
    NotANumber(String),
    #[error("Amount error: Value [{0}] is not finite")]
    NonFinite(f64),
    #[error("Amount error: Value [{0}] is not positive")]
    NotPositive(f64)
}
