//! Payment decisions, the recommendation type, and the composer that
//! re-validates the full trajectory.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::cart::{cart_total, CartItem};
use crate::installment::InstallmentPlan;
use crate::money::Money;
use crate::policy::{CategoryClass, CategoryPolicy};
use crate::profile::FinancialProfile;
use crate::projector::{obligation_events, project, CashEvent, Trajectory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    #[serde(rename = "PAY_NOW")]
    PayNow,
    #[serde(rename = "FINANCE")]
    Finance,
}

/// One cart item with its payment strategy. Finance decisions carry the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentDecision {
    pub item: CartItem,
    pub strategy: Strategy,
    pub reason: String,
    pub plan: Option<InstallmentPlan>,
}

/// The full result of one optimization call. Never mutated after
/// construction; an infeasible budget is reported here, not raised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub decisions: Vec<PaymentDecision>,
    pub total_pay_now: Money,
    pub total_financed: Money,
    pub trajectory: Trajectory,
    pub feasible: bool,
    pub warnings: Vec<String>,
    pub summary: String,
}

impl Recommendation {
    /// The trivial recommendation for an empty cart.
    pub fn empty(balance: Money) -> Self {
        Self {
            decisions: Vec::new(),
            total_pay_now: Money::ZERO,
            total_financed: Money::ZERO,
            trajectory: Trajectory::empty(balance),
            feasible: true,
            warnings: Vec::new(),
            summary: "Cart is empty; nothing to pay today.".to_string(),
        }
    }
}

/// Assemble the final recommendation: re-project the full horizon with the
/// pay-now debit, every obligation, and every installment, then derive the
/// feasibility flag and the explanation.
pub fn compose_recommendation(
    pay_now: Vec<CartItem>,
    financed: Vec<(CartItem, InstallmentPlan)>,
    mut warnings: Vec<String>,
    profile: &FinancialProfile,
    policy: &CategoryPolicy,
    today: NaiveDate,
) -> Recommendation {
    let total_pay_now = cart_total(&pay_now);
    let total_financed: Money = financed.iter().map(|(i, _)| i.price).sum();

    let paycheck_date = profile
        .next_paycheck_on_or_after(today)
        .map(|p| p.due_date)
        .unwrap_or(today);
    let horizon_end = financed
        .iter()
        .filter_map(|(_, plan)| plan.due_dates.last().copied())
        .max()
        .unwrap_or(paycheck_date)
        .max(paycheck_date);

    // Event order matters on shared dates: the purchase debits first, then
    // bills and paycheck credits clear, then installment autopays draw. A
    // paycheck landing on an installment date is counted before the payment.
    let mut events = Vec::new();
    if total_pay_now > Money::ZERO {
        events.push(CashEvent::new(today, "Cart purchase (pay now)", -total_pay_now));
    }
    events.extend(obligation_events(&profile.obligations, today, horizon_end));
    for (item, plan) in &financed {
        for (i, (due, amount)) in plan.schedule().into_iter().enumerate() {
            events.push(CashEvent::new(
                due,
                format!("Installment {}/{}: {}", i + 1, plan.num_installments, item.name),
                -amount,
            ));
        }
    }

    let trajectory = project(profile.current_balance, &events, horizon_end);
    let feasible = trajectory.is_nonnegative();

    if let Some((when, low)) = trajectory.min_balance() {
        if low < Money::ZERO {
            warnings.push(format!("Projected balance falls to {} on {}.", low, when));
        } else if low < policy.low_balance_caution {
            warnings.push(format!(
                "Caution: projected balance dips to {} on {}.",
                low, when
            ));
        }
    }

    let summary = build_summary(
        &pay_now,
        &financed,
        total_pay_now,
        total_financed,
        &trajectory,
        feasible,
        today,
    );

    let mut decisions = Vec::with_capacity(pay_now.len() + financed.len());
    for item in pay_now {
        let reason = pay_now_reason(&item, policy);
        decisions.push(PaymentDecision {
            item,
            strategy: Strategy::PayNow,
            reason,
            plan: None,
        });
    }
    for (item, plan) in financed {
        let reason = format!(
            "Splitting into {} payments of {} keeps cash free for upcoming obligations.",
            plan.num_installments, plan.installment_amount
        );
        decisions.push(PaymentDecision {
            item,
            strategy: Strategy::Finance,
            reason,
            plan: Some(plan),
        });
    }

    Recommendation {
        decisions,
        total_pay_now,
        total_financed,
        trajectory,
        feasible,
        warnings,
        summary,
    }
}

fn pay_now_reason(item: &CartItem, policy: &CategoryPolicy) -> String {
    match policy.classify(item.category) {
        CategoryClass::Essential => format!(
            "{} items are essential and are paid immediately.",
            item.category.label()
        ),
        CategoryClass::Discretionary if item.price < policy.bnpl_min_price => format!(
            "Below the {} BNPL minimum, so it is paid now.",
            policy.bnpl_min_price
        ),
        CategoryClass::Discretionary if item.price > policy.bnpl_max_price => format!(
            "Above the {} BNPL limit, so it is paid now.",
            policy.bnpl_max_price
        ),
        CategoryClass::Discretionary => {
            "Cash flow covers this through the next paycheck.".to_string()
        }
    }
}

fn build_summary(
    pay_now: &[CartItem],
    financed: &[(CartItem, InstallmentPlan)],
    total_pay_now: Money,
    total_financed: Money,
    trajectory: &Trajectory,
    feasible: bool,
    today: NaiveDate,
) -> String {
    if pay_now.is_empty() && financed.is_empty() {
        return "Cart is empty; nothing to pay today.".to_string();
    }

    if financed.is_empty() && feasible {
        let low = trajectory
            .min_balance()
            .map(|(_, v)| v)
            .unwrap_or(trajectory.ending_balance());
        return format!(
            "You can comfortably pay {} for all {} item(s) today. Lowest projected balance through the next paycheck: {}.",
            total_pay_now,
            pay_now.len(),
            low
        );
    }

    let mut parts = vec![format!(
        "Pay {} today for {} item(s).",
        total_pay_now,
        pay_now.len()
    )];
    if !financed.is_empty() {
        let plans: Vec<String> = financed
            .iter()
            .map(|(item, plan)| {
                format!(
                    "{}: {} payments of {} starting {}{}",
                    item.name,
                    plan.num_installments,
                    plan.installment_amount,
                    plan.due_dates.first().map(|d| d.to_string()).unwrap_or_default(),
                    if plan.tight { " (tight fit)" } else { "" }
                )
            })
            .collect();
        parts.push(format!(
            "Finance {} via installments. {}.",
            total_financed,
            plans.join("; ")
        ));
    }
    if !feasible {
        if let Some(entry) = trajectory.lowest_entry() {
            let days = (entry.date - today).num_days();
            parts.push(format!(
                "Even with financing, {} due in {} day(s) leaves the balance at {}.",
                entry.label, days, entry.balance
            ));
        }
    }
    parts.join(" ")
}
