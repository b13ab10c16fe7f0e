//! Authentication endpoints.

use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiResult};
use crate::domain::user::User;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    password: &'a str,
    email: &'a str,
}

/// Successful login payload: the principal plus a bearer token.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
}

impl ApiClient {
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<LoginResponse> {
        tracing::info!(username, "logging in");
        self.post("/auth/login", &LoginRequest { username, password })
            .await
    }

    pub async fn register(&self, username: &str, password: &str, email: &str) -> ApiResult<User> {
        self.post(
            "/auth/register",
            &RegisterRequest {
                username,
                password,
                email,
            },
        )
        .await
    }

    /// Back-office login: same shape, separate endpoint and audience.
    pub async fn admin_login(&self, username: &str, password: &str) -> ApiResult<LoginResponse> {
        tracing::info!(username, "admin logging in");
        self.post("/admin/auth/login", &LoginRequest { username, password })
            .await
    }
}
