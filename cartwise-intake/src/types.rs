//! Raw collaborator shapes, exactly as produced upstream.

use serde::Deserialize;

/// Price as it arrives from collaborators: a JSON number from detection or
/// manual entry, or a display string from receipt extraction.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCartItem {
    pub name: String,
    pub price: RawPrice,
    /// Missing categories default to "General".
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawObligation {
    pub description: String,
    /// Negative for bills, positive for paycheck credits.
    pub amount: f64,
    /// ISO date, YYYY-MM-DD.
    pub due_date: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawProfile {
    pub balance: f64,
    pub obligations: Vec<RawObligation>,
    pub pay_period_days: i64,
}
