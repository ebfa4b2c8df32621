//! Greedy pay-now / finance split.
//!
//! Heuristic, not an optimizer: deferring the largest eligible discretionary
//! item buys the most immediate cash-flow headroom per deferral, so candidates
//! are tried largest first. Multi-obligation conflicts are covered by the
//! min-balance test over the whole window, not a constraint solver.

use chrono::NaiveDate;

use crate::cart::{cart_total, CartItem};
use crate::money::Money;
use crate::policy::CategoryPolicy;
use crate::profile::FinancialProfile;
use crate::projector::{obligation_events, project, CashEvent};

#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    /// Essentials plus every discretionary item cash flow can absorb, in
    /// essential-first order.
    pub pay_now: Vec<CartItem>,
    /// Deferred items, largest price first, awaiting installment plans.
    pub finance_candidates: Vec<CartItem>,
    pub warnings: Vec<String>,
}

/// Split `cart` into items to pay immediately and items to finance, keeping
/// the projected balance non-negative through the next paycheck wherever the
/// policy allows deferral.
pub fn allocate(
    cart: &[CartItem],
    profile: &FinancialProfile,
    policy: &CategoryPolicy,
    today: NaiveDate,
) -> Allocation {
    let mut warnings = Vec::new();
    for item in cart {
        if !policy.has_rule(item.category) {
            warnings.push(format!(
                "Unrecognized category \"{}\" for {}; treating it as discretionary.",
                item.category.label(),
                item.name
            ));
        }
    }

    let horizon_end = profile
        .next_paycheck_on_or_after(today)
        .map(|p| p.due_date)
        .or_else(|| profile.obligations.iter().map(|o| o.due_date).max())
        .unwrap_or(today);

    let mut pay_now: Vec<CartItem> = cart
        .iter()
        .filter(|i| policy.is_essential(i.category))
        .cloned()
        .collect();
    let mut discretionary: Vec<CartItem> = cart
        .iter()
        .filter(|i| !policy.is_essential(i.category))
        .cloned()
        .collect();
    // Stable: equal prices keep cart order.
    discretionary.sort_by(|a, b| b.price.cmp(&a.price));

    let mut finance_candidates = Vec::new();
    for item in discretionary {
        let spend = cart_total(&pay_now) + item.price;
        if window_is_feasible(profile, spend, today, horizon_end) {
            pay_now.push(item);
            continue;
        }
        if policy.is_bnpl_eligible(&item) {
            finance_candidates.push(item);
        } else {
            if item.price > policy.bnpl_max_price {
                warnings.push(format!(
                    "{} exceeds the {} BNPL limit and must be paid now.",
                    item.name, policy.bnpl_max_price
                ));
            }
            warnings.push(format!(
                "Paying {} now leaves a projected negative balance before the next paycheck.",
                item.name
            ));
            pay_now.push(item);
        }
    }

    Allocation {
        pay_now,
        finance_candidates,
        warnings,
    }
}

/// Projected balance check for a candidate spend: the purchase debits today,
/// then the window's obligations apply in date order.
fn window_is_feasible(
    profile: &FinancialProfile,
    spend: Money,
    today: NaiveDate,
    horizon_end: NaiveDate,
) -> bool {
    let mut events = vec![CashEvent::new(today, "Cart purchase", -spend)];
    events.extend(obligation_events(&profile.obligations, today, horizon_end));
    project(profile.current_balance, &events, horizon_end).is_nonnegative()
}
