//! Placed orders and the client-local order log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend order status. Only the transition `Pending -> Confirmed` is
/// driven from this client; anything further lives on the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Confirmed => "CONFIRMED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of a placed order, copied from the cart at submission time and
/// independent of any later cart mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: u64,
    pub name: String,
    pub quantity: u32,
    /// Unit price as charged, discount already applied.
    pub unit_price: i64,
}

/// A placed order as the client remembers it.
///
/// The id is the backend-assigned one; the client never synthesizes its own.
/// Records are immutable once logged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: u64,
    pub total_price: i64,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
}

/// Append-only log of orders placed in this process, newest first.
///
/// Memory-resident only; screens that want server truth re-fetch it.
#[derive(Clone, Debug, Default)]
pub struct OrderLog {
    orders: Vec<OrderRecord>,
}

impl OrderLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a freshly placed order.
    pub fn record(&mut self, order: OrderRecord) {
        self.orders.insert(0, order);
    }

    pub fn orders(&self) -> &[OrderRecord] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
