use crate::types::errors::AmountError;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::fmt::{Display, Formatter};

/// An amount exactly as it appeared in the input, before any validation.
///
/// Logs are loosely typed: the amount column may be empty, hold free text, or
/// hold a float that is not usable (`NaN`, `inf`, zero, negative). Keeping the
/// raw shape around lets the validator report why a record was dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RawAmount {
    #[default]
    Missing,
    Number(f64),
    Text(String)
}

impl RawAmount {
    /// Returns the amount if it is a finite number strictly greater than zero.
    pub fn validate(&self) -> Result<f64, AmountError> {
        match self {
            RawAmount::Missing => Err(AmountError::Missing),
            RawAmount::Text(text) => Err(AmountError::NotANumber(text.clone())),
            RawAmount::Number(value) if !value.is_finite() => Err(AmountError::NonFinite(*value)),
            RawAmount::Number(value) if *value <= 0.0 => Err(AmountError::NotPositive(*value)),
            RawAmount::Number(value) => Ok(*value)
        }
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        let value = value.trim();

        if value.is_empty() {
            return RawAmount::Missing;
        }

        match value.parse::<f64>() {
            Ok(number) => RawAmount::Number(number),
            Err(_) => RawAmount::Text(value.to_string())
        }
    }
}

impl From<f64> for RawAmount {
    fn from(value: f64) -> Self {
        RawAmount::Number(value)
    }
}

impl Display for RawAmount {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RawAmount::Missing => write!(formatter, "<missing>"),
            RawAmount::Number(value) => write!(formatter, "{value}"),
            RawAmount::Text(text) => write!(formatter, "{text:?}")
        }
    }
}

impl<'de> Deserialize<'de> for RawAmount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.as_deref().map(RawAmount::from).unwrap_or_default())
    }
}
