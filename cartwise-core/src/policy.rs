//! Category classification policy and BNPL eligibility thresholds.
//!
//! Loaded once at process start, immutable afterwards. Concurrent calls share
//! it read-only.

use std::collections::HashMap;

use crate::cart::{CartItem, ItemCategory};
use crate::error::EngineError;
use crate::money::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryClass {
    /// Always paid immediately, never deferred.
    Essential,
    /// Deferrable above the BNPL price threshold.
    Discretionary,
}

#[derive(Debug, Clone)]
pub struct CategoryPolicy {
    classes: HashMap<ItemCategory, CategoryClass>,
    /// Inclusive lower price bound for financing.
    pub bnpl_min_price: Money,
    /// Inclusive upper price bound for financing.
    pub bnpl_max_price: Money,
    /// Installment count choices, ascending. The planner picks the smallest
    /// that fits; the last is the fallback.
    pub installment_options: Vec<u32>,
    /// Percent of the per-pay-period surplus one installment may consume.
    pub surplus_fraction_pct: i64,
    /// Projected balances under this trigger a caution warning.
    pub low_balance_caution: Money,
}

impl CategoryPolicy {
    pub fn new(
        classes: HashMap<ItemCategory, CategoryClass>,
        bnpl_min_price: Money,
        bnpl_max_price: Money,
    ) -> Result<Self, EngineError> {
        if classes.is_empty() {
            return Err(EngineError::Configuration("category class map is empty".into()));
        }
        if bnpl_min_price <= Money::ZERO {
            return Err(EngineError::Configuration("bnpl_min_price must be positive".into()));
        }
        if bnpl_max_price < bnpl_min_price {
            return Err(EngineError::Configuration(
                "bnpl_max_price is below bnpl_min_price".into(),
            ));
        }
        Ok(Self {
            classes,
            bnpl_min_price,
            bnpl_max_price,
            installment_options: vec![2, 3, 4, 6],
            surplus_fraction_pct: 25,
            low_balance_caution: Money::from_cents(100_00),
        })
    }

    /// Stock retail policy: groceries, baby, health, and medicine are
    /// essential; $35 to $2,000 is financeable.
    pub fn standard() -> Self {
        let mut classes = HashMap::new();
        for c in [
            ItemCategory::Groceries,
            ItemCategory::BabyKids,
            ItemCategory::HealthBeauty,
            ItemCategory::Medicine,
        ] {
            classes.insert(c, CategoryClass::Essential);
        }
        for c in [
            ItemCategory::Electronics,
            ItemCategory::Clothing,
            ItemCategory::HomeGarden,
            ItemCategory::Toys,
            ItemCategory::SportsOutdoors,
            ItemCategory::General,
        ] {
            classes.insert(c, CategoryClass::Discretionary);
        }
        Self {
            classes,
            bnpl_min_price: Money::from_cents(35_00),
            bnpl_max_price: Money::from_cents(2_000_00),
            installment_options: vec![2, 3, 4, 6],
            surplus_fraction_pct: 25,
            low_balance_caution: Money::from_cents(100_00),
        }
    }

    /// Categories without a rule default to discretionary; the allocator
    /// records a warning for them.
    pub fn classify(&self, category: ItemCategory) -> CategoryClass {
        self.classes
            .get(&category)
            .copied()
            .unwrap_or(CategoryClass::Discretionary)
    }

    pub fn has_rule(&self, category: ItemCategory) -> bool {
        self.classes.contains_key(&category)
    }

    pub fn is_essential(&self, category: ItemCategory) -> bool {
        self.classify(category) == CategoryClass::Essential
    }

    pub fn is_bnpl_eligible(&self, item: &CartItem) -> bool {
        self.classify(item.category) == CategoryClass::Discretionary
            && item.price >= self.bnpl_min_price
            && item.price <= self.bnpl_max_price
    }
}
