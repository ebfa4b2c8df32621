//! Parse financial-profile JSON from the user store:
//! `{"balance", "obligations": [...], "pay_period_days"}`.

use anyhow::{anyhow, Context, Result};
use cartwise_core::{FinancialProfile, Money, Obligation};
use chrono::NaiveDate;

use crate::types::RawProfile;

pub fn parse_profile_json(input: &str) -> Result<FinancialProfile> {
    let raw: RawProfile = serde_json::from_str(input).context("parsing profile JSON")?;

    let balance = Money::from_dollars(raw.balance).ok_or_else(|| anyhow!("non-finite balance"))?;

    let mut obligations = Vec::with_capacity(raw.obligations.len());
    for o in raw.obligations {
        let due_date = NaiveDate::parse_from_str(&o.due_date, "%Y-%m-%d")
            .with_context(|| format!("invalid due_date '{}' for {}", o.due_date, o.description))?;
        let amount = Money::from_dollars(o.amount)
            .ok_or_else(|| anyhow!("non-finite amount for {}", o.description))?;
        obligations.push(Obligation::new(o.description, amount, due_date));
    }

    Ok(FinancialProfile::new(balance, obligations, raw.pay_period_days))
}
