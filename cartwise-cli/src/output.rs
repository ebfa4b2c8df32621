//! Plain-text rendering of a recommendation.

use cartwise_core::{Recommendation, Strategy};

pub fn print_recommendation(rec: &Recommendation) {
    println!(
        "Pay now: {}   Financed: {}   Feasible: {}",
        rec.total_pay_now,
        rec.total_financed,
        if rec.feasible { "yes" } else { "no" }
    );
    println!();

    for decision in &rec.decisions {
        let tag = match decision.strategy {
            Strategy::PayNow => "PAY_NOW",
            Strategy::Finance => "FINANCE",
        };
        println!("[{}] {} ({})", tag, decision.item.name, decision.item.price);
        println!("    {}", decision.reason);
        if let Some(plan) = &decision.plan {
            for (i, (due, amount)) in plan.schedule().into_iter().enumerate() {
                println!("    {}. {} due {}", i + 1, amount, due);
            }
            if plan.tight {
                println!("    Tight fit: even the longest plan exceeds the safe installment size.");
            }
        }
    }

    if !rec.warnings.is_empty() {
        println!();
        for warning in &rec.warnings {
            println!("! {}", warning);
        }
    }

    if !rec.trajectory.entries.is_empty() {
        println!();
        println!("Projected balance:");
        for entry in &rec.trajectory.entries {
            println!(
                "  {}  {:>12}  {:>12}  {}",
                entry.date,
                entry.delta.to_string(),
                entry.balance.to_string(),
                entry.label
            );
        }
    }

    println!();
    println!("{}", rec.summary);
}
