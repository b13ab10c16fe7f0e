//! End-to-end cart and checkout scenarios against a scripted order gateway.

use std::sync::Mutex;

use async_trait::async_trait;

use blossom_storefront::api::orders::{CreateOrderRequest, OrderResponse};
use blossom_storefront::api::ApiError;
use blossom_storefront::checkout::{place_order, CheckoutError, OrderGateway, ShippingDetails};
use blossom_storefront::domain::cart::Cart;
use blossom_storefront::domain::order::OrderLog;
use blossom_storefront::domain::product::Product;
use blossom_storefront::domain::user::User;
use blossom_storefront::OrderStatus;

/// Scripted gateway: acknowledges with a fixed id or fails, and remembers
/// every payload it saw.
struct FakeGateway {
    fail: bool,
    submissions: Mutex<Vec<CreateOrderRequest>>,
}

impl FakeGateway {
    fn accepting() -> Self {
        Self {
            fail: false,
            submissions: Mutex::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            submissions: Mutex::new(Vec::new()),
        }
    }

    fn submission_count(&self) -> usize {
        self.submissions.lock().unwrap().len()
    }

    fn last_submission(&self) -> CreateOrderRequest {
        self.submissions.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl OrderGateway for FakeGateway {
    async fn submit_order(&self, order: &CreateOrderRequest) -> Result<OrderResponse, ApiError> {
        self.submissions.lock().unwrap().push(order.clone());
        if self.fail {
            return Err(ApiError::Status {
                status: 500,
                message: "order service unavailable".into(),
            });
        }
        Ok(OrderResponse {
            id: 4242,
            total_price: order.total_price,
            status: OrderStatus::Pending,
            created_at: None,
        })
    }
}

fn product(id: u64, price: i64) -> Product {
    Product {
        id,
        name: format!("Product {id}"),
        price,
        discount_percent: None,
        stock: Some(10),
        category_id: None,
        image: None,
    }
}

fn user() -> User {
    User {
        id: 7,
        username: "mai".into(),
        email: None,
        role: None,
    }
}

fn shipping() -> ShippingDetails {
    ShippingDetails::new("Mai Tran", "0901234567", "12 Hoa Street, District 1")
}

#[tokio::test]
async fn checkout_success_clears_cart_and_records_the_order() {
    let gateway = FakeGateway::accepting();
    let mut cart = Cart::new();
    let mut orders = OrderLog::new();
    cart.add(product(2, 50));

    let record = place_order(&gateway, &user(), &shipping(), &mut cart, &mut orders)
        .await
        .unwrap();

    assert!(cart.is_empty());
    assert_eq!(orders.len(), 1);
    assert_eq!(record.id, 4242);
    assert_eq!(record.total_price, 50);
    assert_eq!(record.items.len(), 1);
    assert_eq!(record.items[0].product_id, 2);
    assert_eq!(record.items[0].quantity, 1);
    assert_eq!(record.items[0].unit_price, 50);

    let sent = gateway.last_submission();
    assert_eq!(sent.user_id, 7);
    assert_eq!(sent.customer_name, "Mai Tran");
    assert_eq!(sent.total_price, 50);
    assert_eq!(sent.items.len(), 1);
}

#[tokio::test]
async fn blank_phone_aborts_before_the_backend_is_called() {
    let gateway = FakeGateway::accepting();
    let mut cart = Cart::new();
    let mut orders = OrderLog::new();
    cart.add(product(2, 50));

    let details = ShippingDetails::new("Mai Tran", "   ", "12 Hoa Street");
    let err = place_order(&gateway, &user(), &details, &mut cart, &mut orders)
        .await
        .unwrap_err();

    assert!(matches!(err, CheckoutError::Invalid(_)));
    assert_eq!(gateway.submission_count(), 0);
    assert_eq!(cart.quantity_of(2), 1);
    assert!(orders.is_empty());
}

#[tokio::test]
async fn empty_cart_aborts_before_the_backend_is_called() {
    let gateway = FakeGateway::accepting();
    let mut cart = Cart::new();
    let mut orders = OrderLog::new();

    let err = place_order(&gateway, &user(), &shipping(), &mut cart, &mut orders)
        .await
        .unwrap_err();

    assert!(matches!(err, CheckoutError::EmptyCart));
    assert_eq!(gateway.submission_count(), 0);
}

#[tokio::test]
async fn backend_failure_leaves_cart_and_log_untouched() {
    let gateway = FakeGateway::failing();
    let mut cart = Cart::new();
    let mut orders = OrderLog::new();
    cart.add(product(1, 100));
    cart.add(product(1, 100));
    cart.add(product(2, 50));

    let err = place_order(&gateway, &user(), &shipping(), &mut cart, &mut orders)
        .await
        .unwrap_err();

    assert!(matches!(err, CheckoutError::Backend(_)));
    assert_eq!(gateway.submission_count(), 1);
    assert_eq!(cart.total_items(), 3);
    assert_eq!(cart.total_price(), 250);
    assert!(orders.is_empty());
}

#[tokio::test]
async fn full_browse_to_order_scenario() {
    let gateway = FakeGateway::accepting();
    let mut cart = Cart::new();
    let mut orders = OrderLog::new();

    // Two units of P1 at 100, one of P2 at 50.
    cart.add(product(1, 100));
    cart.add(product(1, 100));
    cart.add(product(2, 50));
    assert_eq!(cart.total_items(), 3);
    assert_eq!(cart.total_price(), 250);

    cart.remove(1);
    assert_eq!(cart.quantity_of(1), 1);
    assert_eq!(cart.total_items(), 2);
    assert_eq!(cart.total_price(), 150);

    cart.remove(1);
    assert_eq!(cart.quantity_of(1), 0);
    assert_eq!(cart.entries().len(), 1);

    let record = place_order(&gateway, &user(), &shipping(), &mut cart, &mut orders)
        .await
        .unwrap();

    assert!(cart.is_empty());
    assert_eq!(record.total_price, 50);
    assert_eq!(record.items.len(), 1);
    assert_eq!(record.items[0].product_id, 2);
    assert_eq!(orders.orders()[0].id, record.id);
}

#[tokio::test]
async fn snapshot_is_detached_from_later_cart_mutation() {
    let gateway = FakeGateway::accepting();
    let mut cart = Cart::new();
    let mut orders = OrderLog::new();
    cart.add(product(2, 50));

    place_order(&gateway, &user(), &shipping(), &mut cart, &mut orders)
        .await
        .unwrap();

    // New shopping session after checkout must not touch the logged order.
    cart.add(product(9, 999));
    cart.add(product(9, 999));

    assert_eq!(orders.len(), 1);
    assert_eq!(orders.orders()[0].items.len(), 1);
    assert_eq!(orders.orders()[0].items[0].product_id, 2);
}
