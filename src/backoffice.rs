//! Back-office controllers for the admin screens.
//!
//! Each controller owns the row list for one screen and talks to its own
//! endpoints. The screens are independent of each other on purpose: no
//! shared validation, each with its own copy for prompts and errors.

use crate::api::admin::{DashboardStats, ProductInput, ReportRow, StaffInput};
use crate::api::orders::OrderSummary;
use crate::api::{ApiClient, ApiError};
use crate::confirm::Confirm;
use crate::domain::order::OrderStatus;
use crate::domain::product::Product;
use crate::domain::user::Staff;

/// Outcome of a delete request routed through [`Confirm`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Row deleted (or already gone on the backend) and dropped locally.
    Deleted,
    /// The user declined the confirmation prompt; nothing happened.
    Cancelled,
}

/// Controller for the admin product list.
#[derive(Debug, Default)]
pub struct ProductAdmin {
    products: Vec<Product>,
    loaded: bool,
}

impl ProductAdmin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Fetch the product list, replacing local rows. On failure the
    /// previous rows stay so the screen can keep showing something.
    pub async fn load(&mut self, api: &ApiClient) -> Result<(), ApiError> {
        let products = api.admin_products().await?;
        tracing::info!(count = products.len(), "loaded admin products");
        self.products = products;
        self.loaded = true;
        Ok(())
    }

    pub async fn create(&mut self, api: &ApiClient, input: &ProductInput) -> Result<(), ApiError> {
        let product = api.create_product(input).await?;
        self.products.push(product);
        Ok(())
    }

    pub async fn update(
        &mut self,
        api: &ApiClient,
        id: u64,
        input: &ProductInput,
    ) -> Result<(), ApiError> {
        let updated = api.update_product(id, input).await?;
        if let Some(row) = self.products.iter_mut().find(|p| p.id == id) {
            *row = updated;
        }
        Ok(())
    }

    /// Confirm, delete on the backend, then drop the row locally.
    ///
    /// A 404 means the row was already gone; the list converges either way,
    /// so it counts as deleted. Any other failure keeps the row.
    pub async fn delete(
        &mut self,
        api: &ApiClient,
        confirm: &dyn Confirm,
        id: u64,
    ) -> Result<DeleteOutcome, ApiError> {
        if !confirm.confirm("Delete this product?") {
            return Ok(DeleteOutcome::Cancelled);
        }
        match api.delete_product(id).await {
            Ok(()) => {}
            Err(ApiError::Status { status: 404, .. }) => {
                tracing::warn!(product_id = id, "product already deleted on the backend");
            }
            Err(err) => return Err(err),
        }
        self.products.retain(|p| p.id != id);
        Ok(DeleteOutcome::Deleted)
    }
}

/// Controller for the staff list.
#[derive(Debug, Default)]
pub struct StaffAdmin {
    staff: Vec<Staff>,
    loaded: bool,
}

impl StaffAdmin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn staff(&self) -> &[Staff] {
        &self.staff
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_empty(&self) -> bool {
        self.staff.is_empty()
    }

    pub async fn load(&mut self, api: &ApiClient) -> Result<(), ApiError> {
        let staff = api.staff_list().await?;
        tracing::info!(count = staff.len(), "loaded staff accounts");
        self.staff = staff;
        self.loaded = true;
        Ok(())
    }

    pub async fn create(&mut self, api: &ApiClient, input: &StaffInput) -> Result<(), ApiError> {
        let member = api.create_staff(input).await?;
        self.staff.push(member);
        Ok(())
    }

    pub async fn update(
        &mut self,
        api: &ApiClient,
        id: u64,
        input: &StaffInput,
    ) -> Result<(), ApiError> {
        let updated = api.update_staff(id, input).await?;
        if let Some(row) = self.staff.iter_mut().find(|s| s.id == id) {
            *row = updated;
        }
        Ok(())
    }

    pub async fn delete(
        &mut self,
        api: &ApiClient,
        confirm: &dyn Confirm,
        id: u64,
    ) -> Result<DeleteOutcome, ApiError> {
        if !confirm.confirm("Remove this staff account?") {
            return Ok(DeleteOutcome::Cancelled);
        }
        match api.delete_staff(id).await {
            Ok(()) => {}
            Err(ApiError::Status { status: 404, .. }) => {
                tracing::warn!(staff_id = id, "staff account already removed on the backend");
            }
            Err(err) => return Err(err),
        }
        self.staff.retain(|s| s.id != id);
        Ok(DeleteOutcome::Deleted)
    }
}

/// Controller for the admin order list.
#[derive(Debug, Default)]
pub struct OrderAdmin {
    orders: Vec<OrderSummary>,
    loaded: bool,
}

impl OrderAdmin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orders(&self) -> &[OrderSummary] {
        &self.orders
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn pending(&self) -> impl Iterator<Item = &OrderSummary> {
        self.orders
            .iter()
            .filter(|o| o.status == OrderStatus::Pending)
    }

    pub async fn load(&mut self, api: &ApiClient) -> Result<(), ApiError> {
        let orders = api.admin_orders().await?;
        tracing::info!(count = orders.len(), "loaded admin orders");
        self.orders = orders;
        self.loaded = true;
        Ok(())
    }

    /// Confirm an order and refresh the local row with the backend's view.
    pub async fn confirm_order(&mut self, api: &ApiClient, id: u64) -> Result<(), ApiError> {
        let updated = api.confirm_order(id).await?;
        if let Some(row) = self.orders.iter_mut().find(|o| o.id == id) {
            *row = updated;
        }
        Ok(())
    }
}

/// Dashboard and report fetches.
#[derive(Debug, Default)]
pub struct Dashboard {
    stats: Option<DashboardStats>,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> Option<&DashboardStats> {
        self.stats.as_ref()
    }

    pub async fn load(&mut self, api: &ApiClient) -> Result<(), ApiError> {
        self.stats = Some(api.dashboard().await?);
        Ok(())
    }

    pub async fn report(&self, api: &ApiClient, period: &str) -> Result<Vec<ReportRow>, ApiError> {
        api.reports(period).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    struct Decline;

    impl Confirm for Decline {
        fn confirm(&self, _message: &str) -> bool {
            false
        }
    }

    fn product(id: u64) -> Product {
        Product {
            id,
            name: format!("Product {id}"),
            price: 100,
            discount_percent: None,
            stock: Some(1),
            category_id: None,
            image: None,
        }
    }

    #[tokio::test]
    async fn declined_confirmation_keeps_the_row_and_skips_the_backend() {
        let api = ApiClient::new(&Config::default()).unwrap();
        let mut admin = ProductAdmin {
            products: vec![product(1), product(2)],
            loaded: true,
        };

        let outcome = admin.delete(&api, &Decline, 1).await.unwrap();
        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert_eq!(admin.products().len(), 2);
    }

    #[tokio::test]
    async fn declined_staff_removal_is_inert() {
        let api = ApiClient::new(&Config::default()).unwrap();
        let mut admin = StaffAdmin {
            staff: vec![Staff {
                id: 5,
                username: "lan".into(),
                email: "lan@example.com".into(),
                role: "STAFF".into(),
                active: true,
            }],
            loaded: true,
        };

        let outcome = admin.delete(&api, &Decline, 5).await.unwrap();
        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert_eq!(admin.staff().len(), 1);
    }
}
