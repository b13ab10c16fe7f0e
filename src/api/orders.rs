//! Customer order endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiResult};
use crate::domain::order::OrderStatus;

/// One line of an order submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub product_id: u64,
    pub quantity: u32,
    /// Unit price as shown to the customer, discount already applied.
    pub price: i64,
}

/// Order submission payload, mirroring the backend's create-order contract.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub user_id: u64,
    pub customer_name: String,
    pub phone: String,
    pub address: String,
    pub total_price: i64,
    pub items: Vec<OrderItemRequest>,
}

/// Backend acknowledgement of a created order.
///
/// The id here is the only order id the client keeps; nothing is
/// synthesized locally.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: u64,
    pub total_price: i64,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Order summary as returned by the listing and detail endpoints.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub id: u64,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub total_price: i64,
    pub status: OrderStatus,
}

impl ApiClient {
    pub async fn create_order(&self, order: &CreateOrderRequest) -> ApiResult<OrderResponse> {
        self.post("/orders", order).await
    }

    /// Orders belonging to the logged-in user.
    pub async fn my_orders(&self) -> ApiResult<Vec<OrderSummary>> {
        self.get("/orders/my").await
    }

    pub async fn order_detail(&self, id: u64) -> ApiResult<OrderSummary> {
        self.get(&format!("/orders/{id}")).await
    }
}
