//! Application state wiring.
//!
//! One explicit state object instead of ambient globals: created at startup,
//! dropped at process exit, per-user pieces reset on logout.

use thiserror::Error;

use crate::api::{ApiClient, ApiError, ApiResult};
use crate::checkout::{self, CheckoutError, ShippingDetails};
use crate::config::Config;
use crate::domain::cart::Cart;
use crate::domain::order::{OrderLog, OrderRecord};
use crate::domain::product::Product;
use crate::domain::user::User;
use crate::session::{AuthSession, SessionStore, StoreError};

/// Login can fail on the wire or when persisting the session.
#[derive(Debug, Error)]
pub enum LoginError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("could not persist the session: {0}")]
    Store(#[from] StoreError),
}

/// The storefront application state.
pub struct Storefront<S: SessionStore> {
    api: ApiClient,
    session: AuthSession<S>,
    cart: Cart,
    orders: OrderLog,
}

impl<S: SessionStore> Storefront<S> {
    /// Wire the application from configuration and a session store,
    /// restoring any persisted login.
    pub fn new(config: &Config, store: S) -> ApiResult<Self> {
        let session = AuthSession::load(store);
        let mut api = ApiClient::new(config)?;
        api.set_token(session.token().map(str::to_owned));
        Ok(Self {
            api,
            session,
            cart: Cart::new(),
            orders: OrderLog::new(),
        })
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn session(&self) -> &AuthSession<S> {
        &self.session
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn orders(&self) -> &OrderLog {
        &self.orders
    }

    pub fn add_to_cart(&mut self, product: Product) {
        self.cart.add(product);
    }

    pub fn remove_from_cart(&mut self, product_id: u64) {
        self.cart.remove(product_id);
    }

    /// Authenticate against the backend and persist the session.
    pub async fn log_in(&mut self, username: &str, password: &str) -> Result<User, LoginError> {
        let response = self.api.login(username, password).await?;
        self.api.set_token(Some(response.token.clone()));
        self.session.log_in(response.user.clone(), response.token)?;
        Ok(response.user)
    }

    /// Clear the session and reset per-user state (cart and order log).
    pub fn log_out(&mut self) -> Result<(), StoreError> {
        self.session.log_out()?;
        self.api.set_token(None);
        self.cart.clear();
        self.orders = OrderLog::new();
        tracing::info!("logged out");
        Ok(())
    }

    /// Run checkout with the current cart. Requires a logged-in session.
    pub async fn place_order(
        &mut self,
        details: &ShippingDetails,
    ) -> Result<OrderRecord, CheckoutError> {
        let user = self
            .session
            .user()
            .cloned()
            .ok_or(CheckoutError::NotLoggedIn)?;
        checkout::place_order(&self.api, &user, details, &mut self.cart, &mut self.orders).await
    }
}
