//! Checkout: validate, submit, record.

use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;
use validator::Validate;

use crate::api::orders::{CreateOrderRequest, OrderItemRequest, OrderResponse};
use crate::api::{ApiClient, ApiError};
use crate::domain::cart::Cart;
use crate::domain::order::{OrderItem, OrderLog, OrderRecord};
use crate::domain::user::User;

/// Shipping details entered at checkout. All three fields are required.
#[derive(Clone, Debug, Validate)]
pub struct ShippingDetails {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,
}

impl ShippingDetails {
    /// Build details from raw form input, trimming surrounding whitespace so
    /// an all-spaces field counts as empty.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into().trim().to_owned(),
            phone: phone.into().trim().to_owned(),
            address: address.into().trim().to_owned(),
        }
    }
}

/// Why a checkout attempt did not go through.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout is gated on login.
    #[error("not logged in")]
    NotLoggedIn,

    /// Missing shipping fields, reported before any network call.
    #[error("invalid shipping details: {0}")]
    Invalid(#[from] validator::ValidationErrors),

    #[error("cart is empty")]
    EmptyCart,

    /// The backend rejected or never received the order; the cart is intact.
    #[error(transparent)]
    Backend(#[from] ApiError),
}

/// Network seam for order submission, so the flow is drivable without a
/// live backend.
#[async_trait]
pub trait OrderGateway {
    async fn submit_order(&self, order: &CreateOrderRequest) -> Result<OrderResponse, ApiError>;
}

#[async_trait]
impl OrderGateway for ApiClient {
    async fn submit_order(&self, order: &CreateOrderRequest) -> Result<OrderResponse, ApiError> {
        self.create_order(order).await
    }
}

/// Submit the current cart as an order.
///
/// Preconditions are checked before anything leaves the process, and a
/// failure at any point leaves the cart and the order log exactly as they
/// were. On success the cart is cleared and a record built from the
/// backend's acknowledgement lands at the head of the log.
///
/// Best-effort, non-transactional: there is no idempotency key, and a
/// resubmission after a reported failure can create a duplicate backend
/// order.
pub async fn place_order<G: OrderGateway>(
    gateway: &G,
    user: &User,
    details: &ShippingDetails,
    cart: &mut Cart,
    orders: &mut OrderLog,
) -> Result<OrderRecord, CheckoutError> {
    details.validate()?;
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let total_price = cart.total_price();
    let items: Vec<OrderItemRequest> = cart
        .entries()
        .iter()
        .map(|entry| OrderItemRequest {
            product_id: entry.product().id,
            quantity: entry.quantity(),
            price: entry.product().effective_price(),
        })
        .collect();

    let request = CreateOrderRequest {
        user_id: user.id,
        customer_name: details.name.clone(),
        phone: details.phone.clone(),
        address: details.address.clone(),
        total_price,
        items,
    };

    tracing::info!(
        user_id = user.id,
        total_price,
        item_count = cart.total_items(),
        "submitting order"
    );
    let response = gateway.submit_order(&request).await?;
    tracing::info!(order_id = response.id, "order accepted");

    let record = OrderRecord {
        id: response.id,
        total_price,
        created_at: response.created_at.unwrap_or_else(Utc::now),
        status: response.status,
        items: cart
            .entries()
            .iter()
            .map(|entry| OrderItem {
                product_id: entry.product().id,
                name: entry.product().name.clone(),
                quantity: entry.quantity(),
                unit_price: entry.product().effective_price(),
            })
            .collect(),
    };
    orders.record(record.clone());
    cart.clear();
    Ok(record)
}
