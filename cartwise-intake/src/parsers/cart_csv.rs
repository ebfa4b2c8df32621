//! Parse receipt-export cart CSVs.
//!
//! Expected shape: a `name,price,category` header followed by item rows.
//! Leading blank rows are tolerated; prices may carry `$` and thousands
//! separators.

use anyhow::{anyhow, bail, Result};
use cartwise_core::{CartItem, ItemCategory, Money};

pub fn parse_cart_csv(input: &str) -> Result<Vec<CartItem>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_reader(input.as_bytes());

    let mut items = Vec::new();
    let mut header_found = false;

    for result in rdr.records() {
        let record = result?;
        // Skip until the header row.
        if !header_found {
            if record
                .get(0)
                .map(|s| s.trim().eq_ignore_ascii_case("name"))
                .unwrap_or(false)
            {
                header_found = true;
            }
            continue;
        }

        let name = record.get(0).unwrap_or("").trim().to_string();
        if name.is_empty() {
            continue;
        }

        let price_field = record.get(1).unwrap_or("").trim();
        let price = Money::parse(price_field)
            .ok_or_else(|| anyhow!("unparseable price '{}' for {}", price_field, name))?;
        if price < Money::ZERO {
            bail!("negative price for {}", name);
        }

        let category_field = record.get(2).unwrap_or("General").trim();
        let category = if category_field.is_empty() {
            ItemCategory::General
        } else {
            ItemCategory::from_label(category_field)
        };

        items.push(CartItem::new(name, price, category));
    }

    if !header_found {
        bail!("no header row found (expected name,price,category)");
    }
    Ok(items)
}
