//! Parse JSON carts from detection or manual entry:
//! `[{"name": ..., "price": ..., "category": ...}]`.

use anyhow::{anyhow, bail, Context, Result};
use cartwise_core::{CartItem, ItemCategory, Money};

use crate::types::{RawCartItem, RawPrice};

pub fn parse_cart_json(input: &str) -> Result<Vec<CartItem>> {
    let raw: Vec<RawCartItem> = serde_json::from_str(input).context("parsing cart JSON")?;
    raw.into_iter().map(to_cart_item).collect()
}

fn to_cart_item(raw: RawCartItem) -> Result<CartItem> {
    let price = match &raw.price {
        RawPrice::Number(n) => Money::from_dollars(*n)
            .ok_or_else(|| anyhow!("non-finite price for {}", raw.name))?,
        RawPrice::Text(s) => Money::parse(s)
            .ok_or_else(|| anyhow!("unparseable price '{}' for {}", s, raw.name))?,
    };
    if price < Money::ZERO {
        bail!("negative price for {}", raw.name);
    }
    let category = ItemCategory::from_label(raw.category.as_deref().unwrap_or("General"));
    Ok(CartItem::new(raw.name, price, category))
}
