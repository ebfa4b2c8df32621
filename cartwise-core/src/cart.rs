//! Cart item model and the fixed category vocabulary.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Item categories as produced by upstream detection, OCR, or manual entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    #[serde(rename = "Groceries")]
    Groceries,
    #[serde(rename = "Baby & Kids")]
    BabyKids,
    #[serde(rename = "Health & Beauty")]
    HealthBeauty,
    #[serde(rename = "Medicine")]
    Medicine,
    #[serde(rename = "Electronics")]
    Electronics,
    #[serde(rename = "Clothing")]
    Clothing,
    #[serde(rename = "Home & Garden")]
    HomeGarden,
    #[serde(rename = "Toys")]
    Toys,
    #[serde(rename = "Sports & Outdoors")]
    SportsOutdoors,
    #[serde(rename = "General")]
    General,
    #[serde(rename = "Uncategorized")]
    Uncategorized,
}

impl ItemCategory {
    /// Map a collaborator-supplied label onto the fixed vocabulary.
    /// Unknown labels fall back to `Uncategorized`, never an error.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "groceries" | "grocery" => ItemCategory::Groceries,
            "baby & kids" | "baby and kids" | "baby" => ItemCategory::BabyKids,
            "health & beauty" | "health and beauty" | "beauty" => ItemCategory::HealthBeauty,
            "medicine" | "pharmacy" => ItemCategory::Medicine,
            "electronics" | "electronic" => ItemCategory::Electronics,
            "clothing" | "apparel" => ItemCategory::Clothing,
            "home & garden" | "home and garden" | "home" => ItemCategory::HomeGarden,
            "toys" => ItemCategory::Toys,
            "sports & outdoors" | "sports and outdoors" | "sports" => ItemCategory::SportsOutdoors,
            "general" => ItemCategory::General,
            _ => ItemCategory::Uncategorized,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ItemCategory::Groceries => "Groceries",
            ItemCategory::BabyKids => "Baby & Kids",
            ItemCategory::HealthBeauty => "Health & Beauty",
            ItemCategory::Medicine => "Medicine",
            ItemCategory::Electronics => "Electronics",
            ItemCategory::Clothing => "Clothing",
            ItemCategory::HomeGarden => "Home & Garden",
            ItemCategory::Toys => "Toys",
            ItemCategory::SportsOutdoors => "Sports & Outdoors",
            ItemCategory::General => "General",
            ItemCategory::Uncategorized => "Uncategorized",
        }
    }
}

/// One cart line. Identity is positional within the cart; duplicate names are
/// treated independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub name: String,
    pub price: Money,
    pub category: ItemCategory,
}

impl CartItem {
    pub fn new(name: impl Into<String>, price: Money, category: ItemCategory) -> Self {
        Self {
            name: name.into(),
            price,
            category,
        }
    }
}

pub fn cart_total(items: &[CartItem]) -> Money {
    items.iter().map(|i| i.price).sum()
}
