//! Product and category read endpoints.
//!
//! Pure read-through: no caching beyond whatever state the caller keeps.

use super::{ApiClient, ApiResult};
use crate::domain::product::{Category, Product};

impl ApiClient {
    pub async fn list_products(&self) -> ApiResult<Vec<Product>> {
        self.get("/products").await
    }

    pub async fn get_product(&self, id: u64) -> ApiResult<Product> {
        self.get(&format!("/products/{id}")).await
    }

    pub async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        self.get("/categories").await
    }
}
