use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GstCategory {
    Essential,
    Food,
    Standard,
    Electronics,
    Luxury
}

impl GstCategory {
    /// Case-insensitive lookup; unknown categories have no rate.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "essential" => Some(GstCategory::Essential),
            "food" => Some(GstCategory::Food),
            "standard" => Some(GstCategory::Standard),
            "electronics" => Some(GstCategory::Electronics),
            "luxury" => Some(GstCategory::Luxury),
            _ => None
        }
    }

    /// Rate in percent.
    pub fn rate(self) -> u32 {
        match self {
            GstCategory::Essential => 0,
            GstCategory::Food => 5,
            GstCategory::Standard => 12,
            GstCategory::Electronics => 18,
            GstCategory::Luxury => 28
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GstBill {
    pub base_amount: Decimal,
    pub gst_rate: u32,
    pub gst_amount: Decimal,
    pub total_amount: Decimal
}

/// Computes the tax owed on `amount` for a product category.
///
/// The tax is rounded to two decimal places, midpoint away from zero. Returns
/// `None` for a non-positive amount, an unknown category, or on overflow.
pub fn calculate_gst(amount: Decimal, category: &str) -> Option<GstBill> {
    if amount <= Decimal::ZERO {
        debug!("GST amount [{amount}] is not positive");
        return None;
    }

    let Some(category) = GstCategory::parse(category) else {
        debug!("GST category [{category}] is unknown");
        return None;
    };

    let gst_rate = category.rate();
    let gst_amount = amount.checked_mul(Decimal::from(gst_rate))?
        .checked_div(Decimal::ONE_HUNDRED)?
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let total_amount = amount.checked_add(gst_amount)?.normalize();

    Some(GstBill {
        base_amount: amount,
        gst_rate,
        gst_amount,
        total_amount
    })
}
