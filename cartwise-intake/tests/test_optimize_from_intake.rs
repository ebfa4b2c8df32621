//! End-to-end: collaborator JSON in, recommendation out.

use cartwise_core::{optimize, CategoryPolicy, Money, Strategy};
use cartwise_intake::{parse_cart_csv, parse_cart_json, parse_profile_json};
use chrono::NaiveDate;

const CART_JSON: &str = r#"[
    {"name": "Groceries Bundle", "price": 52.00, "category": "Groceries"},
    {"name": "Apple AirPods", "price": 149.99, "category": "Electronics"},
    {"name": "Winter Jacket", "price": 49.99, "category": "Clothing"}
]"#;

const PROFILE_JSON: &str = r#"{
    "balance": 250.00,
    "obligations": [
        {"description": "Electric bill", "amount": -60.00, "due_date": "2026-03-04"},
        {"description": "Internet", "amount": -45.00, "due_date": "2026-03-06"},
        {"description": "Paycheck", "amount": 1450.00, "due_date": "2026-03-09"},
        {"description": "Rent", "amount": -850.00, "due_date": "2026-03-11"}
    ],
    "pay_period_days": 14
}"#;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

#[test]
fn test_tight_budget_json_cart_end_to_end() {
    let cart = parse_cart_json(CART_JSON).unwrap();
    let profile = parse_profile_json(PROFILE_JSON).unwrap();
    let rec = optimize(&cart, &profile, &CategoryPolicy::standard(), today()).unwrap();

    assert_eq!(rec.decisions.len(), 3);

    let airpods = rec
        .decisions
        .iter()
        .find(|d| d.item.name == "Apple AirPods")
        .unwrap();
    assert_eq!(airpods.strategy, Strategy::Finance);
    let plan = airpods.plan.as_ref().unwrap();
    assert_eq!(plan.total(), Money::from_cents(14999));
    assert_eq!(
        plan.due_dates[0],
        NaiveDate::from_ymd_opt(2026, 3, 9).unwrap()
    );

    let groceries = rec
        .decisions
        .iter()
        .find(|d| d.item.name == "Groceries Bundle")
        .unwrap();
    assert_eq!(groceries.strategy, Strategy::PayNow);

    let jacket = rec
        .decisions
        .iter()
        .find(|d| d.item.name == "Winter Jacket")
        .unwrap();
    assert_eq!(jacket.strategy, Strategy::PayNow);

    assert!(rec.feasible);
    assert_eq!(rec.total_pay_now, Money::from_cents(10199));
    assert_eq!(rec.total_financed, Money::from_cents(14999));
}

#[test]
fn test_csv_and_json_carts_agree() {
    let csv_input = "\
name,price,category
Groceries Bundle,$52.00,Groceries
Apple AirPods,$149.99,Electronics
Winter Jacket,$49.99,Clothing
";
    let from_csv = parse_cart_csv(csv_input).unwrap();
    let from_json = parse_cart_json(CART_JSON).unwrap();
    assert_eq!(from_csv, from_json);

    let profile = parse_profile_json(PROFILE_JSON).unwrap();
    let policy = CategoryPolicy::standard();
    let a = optimize(&from_csv, &profile, &policy, today()).unwrap();
    let b = optimize(&from_json, &profile, &policy, today()).unwrap();
    assert_eq!(a, b);
}
