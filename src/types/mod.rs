mod amount;
mod errors;

pub use amount::RawAmount;
pub use errors::AmountError;

pub type TransactionId = String;
pub type Contact = String;
pub type Category = String;
