//! Exact currency arithmetic in integer minor units (cents).
//!
//! Installment reconciliation requires that installments sum back to the
//! exact item price, so nothing downstream of the intake boundary may touch
//! floating point.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A signed currency amount in cents. Negative for debits, positive for
/// credits; serialized as the raw cent count.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

static MONEY_RE: OnceLock<Regex> = OnceLock::new();

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Convert a collaborator-supplied dollar amount, rounding to the nearest
    /// cent. Boundary use only: everything past intake is exact.
    pub fn from_dollars(dollars: f64) -> Option<Self> {
        if !dollars.is_finite() {
            return None;
        }
        Some(Money((dollars * 100.0).round() as i64))
    }

    /// Parse display-format amounts as they appear on receipts and exports:
    /// "52.00", "$1,249.99", "-$5.40", "$ 35".
    pub fn parse(text: &str) -> Option<Self> {
        let re = MONEY_RE.get_or_init(|| {
            Regex::new(r"^\s*(-)?\s*\$?\s*([0-9][0-9,]*)(?:\.([0-9]{1,2}))?\s*$")
                .expect("money pattern is valid")
        });
        let caps = re.captures(text)?;
        let whole: i64 = caps[2].replace(',', "").parse().ok()?;
        let cents_part = match caps.get(3) {
            Some(frac) if frac.as_str().len() == 1 => frac.as_str().parse::<i64>().ok()? * 10,
            Some(frac) => frac.as_str().parse::<i64>().ok()?,
            None => 0,
        };
        let cents = whole * 100 + cents_part;
        Some(Money(if caps.get(1).is_some() { -cents } else { cents }))
    }

    pub fn abs(self) -> Self {
        Money(self.0.abs())
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Largest amount not exceeding an even n-way split. Callers split
    /// non-negative prices only.
    pub fn div_floor(self, n: i64) -> Money {
        Money(self.0 / n)
    }

    /// Smallest amount covering an n-way split.
    pub fn div_ceil(self, n: i64) -> Money {
        Money((self.0 + n - 1) / n)
    }

    /// Integer percentage of this amount, truncated toward zero.
    pub fn percent(self, pct: i64) -> Money {
        Money(self.0 * pct / 100)
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Neg for Money {
    type Output = Money;
    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl Mul<i64> for Money {
    type Output = Money;
    fn mul(self, rhs: i64) -> Money {
        Money(self.0 * rhs)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self.0.abs();
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, cents / 100, cents % 100)
    }
}
