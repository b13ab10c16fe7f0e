//! Server-side cart endpoints.
//!
//! Some flows go through the backend cart (buy-now), others keep the cart
//! purely client-local; both exist side by side. Requests are keyed by this
//! client's session id.

use super::{ApiClient, ApiResult};

impl ApiClient {
    /// Add to the backend cart. The backend owns the response shape.
    pub async fn add_to_server_cart(
        &self,
        product_id: u64,
        quantity: u32,
    ) -> ApiResult<serde_json::Value> {
        let path = format!("/cart/{}/add", self.session_id());
        let req = self
            .http
            .post(self.url(&path))
            .query(&[("productId", product_id.to_string()), ("quantity", quantity.to_string())]);
        self.send_json(req).await
    }

    /// Skip the cart and start checkout for a single product.
    pub async fn buy_now(&self, product_id: u64, quantity: u32) -> ApiResult<serde_json::Value> {
        let path = format!("/cart/{}/buy-now", self.session_id());
        let req = self
            .http
            .post(self.url(&path))
            .query(&[("productId", product_id.to_string()), ("quantity", quantity.to_string())]);
        self.send_json(req).await
    }
}
