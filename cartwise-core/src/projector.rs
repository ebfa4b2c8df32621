//! Cash-flow projection: running balance over dated events.
//!
//! The projector holds no state between calls; every trajectory is computed
//! fresh from its inputs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::profile::Obligation;

/// One dated, signed cash movement to apply during projection.
#[derive(Debug, Clone, PartialEq)]
pub struct CashEvent {
    pub date: NaiveDate,
    pub label: String,
    pub amount: Money,
}

impl CashEvent {
    pub fn new(date: NaiveDate, label: impl Into<String>, amount: Money) -> Self {
        Self {
            date,
            label: label.into(),
            amount,
        }
    }
}

/// Obligations falling inside `[from, through]`, as projection events.
pub fn obligation_events(
    obligations: &[Obligation],
    from: NaiveDate,
    through: NaiveDate,
) -> Vec<CashEvent> {
    obligations
        .iter()
        .filter(|o| o.due_date >= from && o.due_date <= through)
        .map(|o| CashEvent::new(o.due_date, o.description.clone(), o.amount))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryEntry {
    pub date: NaiveDate,
    pub label: String,
    pub delta: Money,
    pub balance: Money,
}

/// Chronological running-balance trace. Same-date entries keep the order the
/// events were supplied in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub start_balance: Money,
    pub entries: Vec<TrajectoryEntry>,
}

impl Trajectory {
    pub fn empty(start_balance: Money) -> Self {
        Self {
            start_balance,
            entries: Vec::new(),
        }
    }

    /// Entry with the lowest running balance; first occurrence on ties, so it
    /// names the earliest date the trajectory bottoms out.
    pub fn lowest_entry(&self) -> Option<&TrajectoryEntry> {
        let mut lowest: Option<&TrajectoryEntry> = None;
        for entry in &self.entries {
            match lowest {
                Some(current) if entry.balance >= current.balance => {}
                _ => lowest = Some(entry),
            }
        }
        lowest
    }

    pub fn min_balance(&self) -> Option<(NaiveDate, Money)> {
        self.lowest_entry().map(|e| (e.date, e.balance))
    }

    pub fn ending_balance(&self) -> Money {
        self.entries
            .last()
            .map(|e| e.balance)
            .unwrap_or(self.start_balance)
    }

    pub fn is_nonnegative(&self) -> bool {
        self.min_balance().is_none_or(|(_, balance)| balance >= Money::ZERO)
    }
}

/// Apply `events` in date order starting from `start_balance`, dropping
/// anything past `horizon_end`. The sort is stable, so date ties resolve in
/// input order and no event is ever applied twice.
pub fn project(start_balance: Money, events: &[CashEvent], horizon_end: NaiveDate) -> Trajectory {
    let mut in_window: Vec<&CashEvent> = events.iter().filter(|e| e.date <= horizon_end).collect();
    in_window.sort_by_key(|e| e.date);

    let mut entries = Vec::with_capacity(in_window.len());
    let mut balance = start_balance;
    for event in in_window {
        balance += event.amount;
        entries.push(TrajectoryEntry {
            date: event.date,
            label: event.label.clone(),
            delta: event.amount,
            balance,
        });
    }

    Trajectory {
        start_balance,
        entries,
    }
}
