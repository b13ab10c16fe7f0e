//! Profile endpoints: get/update, stats, password change.

use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiResult};
use crate::domain::user::User;

/// Profile fields a user can edit. Absent fields are left untouched.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Aggregated per-user counters shown on the profile screen.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub order_count: u64,
    pub total_spent: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChangePasswordRequest<'a> {
    user_id: u64,
    old_password: &'a str,
    new_password: &'a str,
}

impl ApiClient {
    pub async fn get_profile(&self, user_id: u64) -> ApiResult<User> {
        self.get(&format!("/users/{user_id}")).await
    }

    pub async fn update_profile(&self, user_id: u64, update: &ProfileUpdate) -> ApiResult<User> {
        self.put(&format!("/users/{user_id}"), update).await
    }

    pub async fn user_stats(&self, user_id: u64) -> ApiResult<UserStats> {
        self.get(&format!("/users/{user_id}/stats")).await
    }

    pub async fn change_password(
        &self,
        user_id: u64,
        old_password: &str,
        new_password: &str,
    ) -> ApiResult<()> {
        let req = self.http.post(self.url("/profile/change-password")).json(
            &ChangePasswordRequest {
                user_id,
                old_password,
                new_password,
            },
        );
        self.send_unit(req).await
    }
}
