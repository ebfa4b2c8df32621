//! Built-in sample scenario: a tight-budget cart a few days before payday.

use anyhow::Result;
use cartwise_core::{
    optimize, CartItem, CategoryPolicy, FinancialProfile, ItemCategory, Money, Obligation,
};
use chrono::{Duration, Local};

use crate::output;

pub fn run() -> Result<()> {
    let today = Local::now().date_naive();

    let cart = vec![
        CartItem::new("Groceries Bundle", Money::from_cents(52_00), ItemCategory::Groceries),
        CartItem::new("Diapers", Money::from_cents(24_99), ItemCategory::BabyKids),
        CartItem::new("Apple AirPods", Money::from_cents(149_99), ItemCategory::Electronics),
        CartItem::new("Winter Jacket", Money::from_cents(49_99), ItemCategory::Clothing),
    ];

    let profile = FinancialProfile::new(
        Money::from_cents(250_00),
        vec![
            Obligation::new("Electric bill", Money::from_cents(-60_00), today + Duration::days(2)),
            Obligation::new("Internet", Money::from_cents(-45_00), today + Duration::days(4)),
            Obligation::new("Paycheck", Money::from_cents(1_450_00), today + Duration::days(7)),
            Obligation::new("Rent", Money::from_cents(-850_00), today + Duration::days(9)),
        ],
        14,
    );

    let policy = CategoryPolicy::standard();
    let rec = optimize(&cart, &profile, &policy, today)?;
    output::print_recommendation(&rec);
    Ok(())
}
