//! Catalog read models.
//!
//! Products and categories are read-only reflections of backend state: the
//! client renders and prices them but never mutates them locally.

use serde::{Deserialize, Serialize};

/// A catalog product as served by the backend.
///
/// Prices are in minor currency units.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price: i64,
    /// Discount percentage in `0..=100`, resolved at compute time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
    /// Image handle; resolution to an asset is someone else's job.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Product {
    /// Unit price after the product's discount, if any.
    ///
    /// Never persisted anywhere; cart entries and order lines compute it
    /// when they need it.
    pub fn effective_price(&self) -> i64 {
        match self.discount_percent {
            Some(pct) => {
                let pct = i64::from(pct.min(100));
                self.price * (100 - pct) / 100
            }
            None => self.price,
        }
    }

    pub fn is_in_stock(&self) -> bool {
        self.stock.map_or(true, |s| s > 0)
    }
}

/// A product category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}
