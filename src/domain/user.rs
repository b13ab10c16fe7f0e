//! Users and back-office staff.

use serde::{Deserialize, Serialize};

/// The logged-in principal, as returned by the auth endpoints and persisted
/// in the session store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// A back-office staff account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub role: String,
    pub active: bool,
}
