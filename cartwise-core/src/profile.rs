//! Financial profile: current balance plus scheduled obligations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// A scheduled cash event. Negative amounts are bills and debits, positive
/// amounts are paycheck credits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obligation {
    pub description: String,
    pub amount: Money,
    pub due_date: NaiveDate,
}

impl Obligation {
    pub fn new(description: impl Into<String>, amount: Money, due_date: NaiveDate) -> Self {
        Self {
            description: description.into(),
            amount,
            due_date,
        }
    }

    pub fn is_debit(&self) -> bool {
        self.amount.is_negative()
    }

    pub fn is_credit(&self) -> bool {
        self.amount > Money::ZERO
    }
}

/// Caller-owned snapshot of a user's finances. The engine treats it as
/// read-only input for one optimization call; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialProfile {
    pub current_balance: Money,
    /// Ordered by due date, covering at least through the next paycheck.
    pub obligations: Vec<Obligation>,
    /// Days between paychecks; also the installment cadence.
    pub pay_period_days: i64,
}

impl FinancialProfile {
    pub fn new(current_balance: Money, obligations: Vec<Obligation>, pay_period_days: i64) -> Self {
        Self {
            current_balance,
            obligations,
            pay_period_days,
        }
    }

    /// First paycheck credit dated on or after `today`.
    pub fn next_paycheck_on_or_after(&self, today: NaiveDate) -> Option<&Obligation> {
        self.obligations
            .iter()
            .filter(|o| o.is_credit() && o.due_date >= today)
            .min_by_key(|o| o.due_date)
    }
}
