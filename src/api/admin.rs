//! Back-office endpoints: product and staff CRUD, order management,
//! dashboard and reports.

use serde::{Deserialize, Serialize};

use super::orders::OrderSummary;
use super::{ApiClient, ApiResult};
use crate::domain::order::OrderStatus;
use crate::domain::product::Product;
use crate::domain::user::Staff;

/// Payload for creating or updating a product.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    pub price: i64,
    pub stock: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<u8>,
}

/// Payload for creating or updating a staff account.
#[derive(Clone, Debug, Serialize)]
pub struct StaffInput {
    pub username: String,
    pub email: String,
    /// Omitted on update to keep the current password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Headline numbers for the dashboard screen.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub product_count: u64,
    pub order_count: u64,
    pub pending_orders: u64,
    pub revenue: i64,
}

/// One bucket of the revenue report for a period.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub label: String,
    pub order_count: u64,
    pub revenue: i64,
}

impl ApiClient {
    pub async fn admin_products(&self) -> ApiResult<Vec<Product>> {
        self.get("/admin/products").await
    }

    // Create goes through the public collection route; the backend has no
    // admin-scoped create.
    pub async fn create_product(&self, input: &ProductInput) -> ApiResult<Product> {
        self.post("/products", input).await
    }

    pub async fn update_product(&self, id: u64, input: &ProductInput) -> ApiResult<Product> {
        self.put(&format!("/admin/products/{id}"), input).await
    }

    pub async fn delete_product(&self, id: u64) -> ApiResult<()> {
        self.delete(&format!("/admin/products/{id}")).await
    }

    pub async fn staff_list(&self) -> ApiResult<Vec<Staff>> {
        self.get("/admin/staff").await
    }

    pub async fn create_staff(&self, input: &StaffInput) -> ApiResult<Staff> {
        self.post("/admin/staff", input).await
    }

    pub async fn update_staff(&self, id: u64, input: &StaffInput) -> ApiResult<Staff> {
        self.put(&format!("/admin/staff/{id}"), input).await
    }

    pub async fn delete_staff(&self, id: u64) -> ApiResult<()> {
        self.delete(&format!("/admin/staff/{id}")).await
    }

    pub async fn admin_orders(&self) -> ApiResult<Vec<OrderSummary>> {
        self.get("/admin/orders").await
    }

    pub async fn admin_order_detail(&self, id: u64) -> ApiResult<OrderSummary> {
        self.get(&format!("/admin/orders/{id}")).await
    }

    /// The single modeled transition: `PENDING -> CONFIRMED`.
    pub async fn confirm_order(&self, id: u64) -> ApiResult<OrderSummary> {
        let req = self.http.put(self.url(&format!("/admin/orders/{id}/confirm")));
        self.send_json(req).await
    }

    pub async fn update_order_status(
        &self,
        id: u64,
        status: OrderStatus,
    ) -> ApiResult<OrderSummary> {
        let req = self
            .http
            .put(self.url(&format!("/admin/orders/{id}/status")))
            .query(&[("status", status.as_str())]);
        self.send_json(req).await
    }

    pub async fn dashboard(&self) -> ApiResult<DashboardStats> {
        self.get("/admin/dashboard").await
    }

    pub async fn pending_orders(&self) -> ApiResult<Vec<OrderSummary>> {
        self.get("/admin/dashboard/pending-orders").await
    }

    pub async fn reports(&self, period: &str) -> ApiResult<Vec<ReportRow>> {
        let req = self
            .http
            .get(self.url("/admin/reports"))
            .query(&[("period", period)]);
        self.send_json(req).await
    }
}
