//! Engine entry point: validate inputs, then allocate, plan, and compose.
//!
//! One call computes one recommendation. Pure and synchronous; concurrent
//! calls share only the read-only policy.

use chrono::NaiveDate;

use crate::allocator::allocate;
use crate::cart::{cart_total, CartItem};
use crate::error::EngineError;
use crate::installment::{per_period_surplus, plan_installments, InstallmentPlan};
use crate::money::Money;
use crate::policy::CategoryPolicy;
use crate::profile::FinancialProfile;
use crate::recommend::{compose_recommendation, Recommendation};

/// Recommend a payment split for `cart` given `profile`, as of `today`.
///
/// Deterministic and idempotent: identical inputs produce identical output.
/// An infeasible budget is reported via `Recommendation::feasible`, not an
/// error.
pub fn optimize(
    cart: &[CartItem],
    profile: &FinancialProfile,
    policy: &CategoryPolicy,
    today: NaiveDate,
) -> Result<Recommendation, EngineError> {
    validate(cart, profile, today)?;

    if cart.is_empty() {
        return Ok(Recommendation::empty(profile.current_balance));
    }

    let allocation = allocate(cart, profile, policy, today);

    let paycheck_date = profile
        .next_paycheck_on_or_after(today)
        .map(|p| p.due_date)
        .ok_or_else(|| {
            EngineError::InvalidInput("profile has no paycheck on or after today".into())
        })?;

    let surplus = per_period_surplus(profile, cart_total(&allocation.pay_now), today, paycheck_date);
    let financed: Vec<(CartItem, InstallmentPlan)> = allocation
        .finance_candidates
        .into_iter()
        .map(|item| {
            let plan =
                plan_installments(&item, surplus, policy, paycheck_date, profile.pay_period_days);
            (item, plan)
        })
        .collect();

    Ok(compose_recommendation(
        allocation.pay_now,
        financed,
        allocation.warnings,
        profile,
        policy,
        today,
    ))
}

fn validate(
    cart: &[CartItem],
    profile: &FinancialProfile,
    today: NaiveDate,
) -> Result<(), EngineError> {
    for item in cart {
        if item.name.trim().is_empty() {
            return Err(EngineError::InvalidInput("cart item with an empty name".into()));
        }
        if item.price < Money::ZERO {
            return Err(EngineError::InvalidInput(format!(
                "negative price for {}",
                item.name
            )));
        }
    }
    if profile.pay_period_days <= 0 {
        return Err(EngineError::InvalidInput("pay_period_days must be positive".into()));
    }
    if !cart.is_empty() && profile.next_paycheck_on_or_after(today).is_none() {
        return Err(EngineError::InvalidInput(
            "profile must include obligations through the next paycheck".into(),
        ));
    }
    Ok(())
}
