//! REST client for the storefront backend.
//!
//! The backend owns every contract here; this layer is typed plumbing:
//! build the request, check the status, decode the body, map failures onto
//! [`ApiError`]. One surface module per backend area.

pub mod admin;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod orders;
pub mod profile;

pub use error::{ApiError, ApiResult};

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::config::Config;

/// Shared HTTP client for all backend surfaces.
///
/// Carries the base url, a fixed request timeout, the bearer token of the
/// logged-in session (if any) and a client-generated session key for the
/// server-side cart endpoints.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
    session_id: String,
}

impl ApiClient {
    /// Build a client from configuration.
    ///
    /// The timeout is fixed here; a timed-out call later surfaces as
    /// [`ApiError::Connection`], the same as any other network failure.
    pub fn new(config: &Config) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ApiError::Connection)?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            token: None,
            session_id: Uuid::new_v4().to_string(),
        })
    }

    /// Install or clear the bearer token attached to every request.
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Client-generated key for the server-side cart endpoints. Stable for
    /// the lifetime of this client.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.send_json(self.http.get(self.url(path))).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(self.http.post(self.url(path)).json(body)).await
    }

    async fn put<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(self.http.put(self.url(path)).json(body)).await
    }

    async fn delete(&self, path: &str) -> ApiResult<()> {
        self.send_unit(self.http.delete(self.url(path))).await
    }

    /// Send, check the status, decode the JSON body.
    async fn send_json<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> ApiResult<T> {
        let response = self.dispatch(req).await?;
        response.json().await.map_err(ApiError::Decode)
    }

    /// Send and check the status, discarding whatever body came back.
    async fn send_unit(&self, req: reqwest::RequestBuilder) -> ApiResult<()> {
        self.dispatch(req).await?;
        Ok(())
    }

    async fn dispatch(&self, req: reqwest::RequestBuilder) -> ApiResult<reqwest::Response> {
        let req = match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        };
        let response = req.send().await.map_err(ApiError::Connection)?;
        let status = response.status();
        if !status.is_success() {
            let message = error::extract_message(response).await;
            tracing::warn!(status = status.as_u16(), %message, "backend rejected request");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}
