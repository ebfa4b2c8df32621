//! Installment plan sizing and scheduling.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::cart::CartItem;
use crate::money::Money;
use crate::policy::CategoryPolicy;
use crate::profile::FinancialProfile;
use crate::projector::{obligation_events, project, CashEvent};

/// A sized BNPL plan. Installments sum back to the exact item price: the base
/// amount is the floored even split and the first installment absorbs the
/// remainder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallmentPlan {
    pub num_installments: u32,
    pub installment_amount: Money,
    pub first_installment: Money,
    /// First due at the next paycheck, then one per pay period.
    pub due_dates: Vec<NaiveDate>,
    /// Set when even the largest option exceeds the safe installment size.
    pub tight: bool,
}

impl InstallmentPlan {
    pub fn total(&self) -> Money {
        self.first_installment + self.installment_amount * (self.num_installments as i64 - 1)
    }

    /// Due dates paired with the amount owed on each.
    pub fn schedule(&self) -> Vec<(NaiveDate, Money)> {
        self.due_dates
            .iter()
            .enumerate()
            .map(|(i, d)| {
                let amount = if i == 0 {
                    self.first_installment
                } else {
                    self.installment_amount
                };
                (*d, amount)
            })
            .collect()
    }
}

/// Choose the smallest installment count whose largest payment fits within
/// the configured fraction of the per-pay-period surplus. If nothing fits,
/// fall back to the largest option and flag the plan as tight; a plan is
/// always returned.
pub fn plan_installments(
    item: &CartItem,
    surplus_per_period: Money,
    policy: &CategoryPolicy,
    first_due: NaiveDate,
    pay_period_days: i64,
) -> InstallmentPlan {
    let cap = surplus_per_period
        .max(Money::ZERO)
        .percent(policy.surplus_fraction_pct);

    let mut num = policy.installment_options.last().copied().unwrap_or(6);
    let mut tight = true;
    for &n in &policy.installment_options {
        // The first installment is the largest, so test the ceiling split.
        if item.price.div_ceil(n as i64) <= cap {
            num = n;
            tight = false;
            break;
        }
    }

    let base = item.price.div_floor(num as i64);
    let remainder = item.price - base * num as i64;
    let due_dates = (0..num)
        .map(|i| first_due + Duration::days(pay_period_days * i as i64))
        .collect();

    InstallmentPlan {
        num_installments: num,
        installment_amount: base,
        first_installment: base + remainder,
        due_dates,
        tight,
    }
}

/// Discretionary headroom per pay period: the balance left once the pay-now
/// purchase and every obligation through the next paycheck have applied,
/// clamped at zero.
pub fn per_period_surplus(
    profile: &FinancialProfile,
    pay_now_total: Money,
    today: NaiveDate,
    paycheck_date: NaiveDate,
) -> Money {
    let mut events = vec![CashEvent::new(today, "Cart purchase", -pay_now_total)];
    events.extend(obligation_events(&profile.obligations, today, paycheck_date));
    project(profile.current_balance, &events, paycheck_date)
        .ending_balance()
        .max(Money::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::ItemCategory;
    use crate::profile::Obligation;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn item(cents: i64) -> CartItem {
        CartItem::new("4K Monitor", Money::from_cents(cents), ItemCategory::Electronics)
    }

    #[test]
    fn test_smallest_fitting_option_wins() {
        let policy = CategoryPolicy::standard();
        // Cap = 25% of $968 = $242; $200 / 2 = $100 fits already.
        let plan = plan_installments(
            &item(200_00),
            Money::from_cents(968_00),
            &policy,
            date(2026, 3, 9),
            14,
        );
        assert_eq!(plan.num_installments, 2);
        assert!(!plan.tight);
    }

    #[test]
    fn test_larger_count_when_two_does_not_fit() {
        let policy = CategoryPolicy::standard();
        // Cap = 25% of $400 = $100; $360 needs 4 payments of $90.
        let plan = plan_installments(
            &item(360_00),
            Money::from_cents(400_00),
            &policy,
            date(2026, 3, 9),
            14,
        );
        assert_eq!(plan.num_installments, 4);
        assert!(!plan.tight);
    }

    #[test]
    fn test_no_fit_falls_back_tight() {
        let policy = CategoryPolicy::standard();
        let plan = plan_installments(
            &item(1_800_00),
            Money::from_cents(100_00),
            &policy,
            date(2026, 3, 9),
            14,
        );
        assert_eq!(plan.num_installments, 6);
        assert!(plan.tight);
    }

    #[test]
    fn test_zero_surplus_is_always_tight() {
        let policy = CategoryPolicy::standard();
        let plan = plan_installments(
            &item(35_00),
            Money::from_cents(-50_00),
            &policy,
            date(2026, 3, 9),
            14,
        );
        assert_eq!(plan.num_installments, 6);
        assert!(plan.tight);
    }

    #[test]
    fn test_remainder_lands_on_first_installment() {
        let policy = CategoryPolicy::standard();
        // $149.99 / 2: base $74.99, first picks up the odd cent.
        let plan = plan_installments(
            &item(149_99),
            Money::from_cents(1_000_00),
            &policy,
            date(2026, 3, 9),
            14,
        );
        assert_eq!(plan.num_installments, 2);
        assert_eq!(plan.installment_amount, Money::from_cents(74_99));
        assert_eq!(plan.first_installment, Money::from_cents(75_00));
        assert_eq!(plan.total(), Money::from_cents(149_99));
    }

    #[test]
    fn test_installments_sum_exactly_for_every_option() {
        let policy = CategoryPolicy::standard();
        for cents in [149_99, 200_00, 35_00, 1_999_97] {
            for &n in &policy.installment_options {
                let mut custom = policy.clone();
                custom.installment_options = vec![n];
                let plan = plan_installments(
                    &item(cents),
                    Money::from_cents(1_000_000_00),
                    &custom,
                    date(2026, 3, 9),
                    14,
                );
                assert_eq!(plan.num_installments, n);
                let sum: Money = plan.schedule().iter().map(|(_, m)| *m).sum();
                assert_eq!(sum, Money::from_cents(cents), "n={n} price={cents}");
            }
        }
    }

    #[test]
    fn test_due_dates_anchor_on_paycheck_and_cadence() {
        let policy = CategoryPolicy::standard();
        let plan = plan_installments(
            &item(400_00),
            Money::from_cents(1_000_00),
            &policy,
            date(2026, 3, 9),
            14,
        );
        assert_eq!(plan.due_dates[0], date(2026, 3, 9));
        for pair in plan.due_dates.windows(2) {
            assert_eq!((pair[1] - pair[0]).num_days(), 14);
        }
    }

    #[test]
    fn test_per_period_surplus_clamps_at_zero() {
        let profile = FinancialProfile::new(
            Money::from_cents(100_00),
            vec![
                Obligation::new("Rent", Money::from_cents(-600_00), date(2026, 3, 5)),
                Obligation::new("Paycheck", Money::from_cents(300_00), date(2026, 3, 9)),
            ],
            14,
        );
        let surplus = per_period_surplus(
            &profile,
            Money::from_cents(50_00),
            date(2026, 3, 2),
            date(2026, 3, 9),
        );
        // 100 - 50 - 600 + 300 = -250, clamped.
        assert_eq!(surplus, Money::ZERO);

        let surplus = per_period_surplus(
            &profile,
            Money::ZERO,
            date(2026, 3, 2),
            date(2026, 3, 9),
        );
        assert_eq!(surplus, Money::ZERO);
    }
}
