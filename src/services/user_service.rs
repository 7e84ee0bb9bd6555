use chrono::{DateTime, SecondsFormat, Utc};

use crate::errors::Result;
use crate::models::{PublicUser, User};
use crate::services::ApiClient;
use crate::transport::HttpTransport;

#[derive(Clone)]
pub struct UserService<T> {
    api: ApiClient<T>,
}

impl<T: HttpTransport> UserService<T> {
    pub fn new(api: ApiClient<T>) -> Self {
        Self { api }
    }

    pub async fn get_user(&self, user_id: i64) -> Result<PublicUser> {
        self.api.get(&format!("users/{user_id}")).await
    }

    pub async fn get_users(&self, name: Option<&str>) -> Result<Vec<User>> {
        let mut query = Vec::new();
        if let Some(name) = name {
            query.push(("name", name.to_string()));
        }
        self.api.get_with_query("users", query).await
    }

    /// Revoke a named permission until the given instant. The timestamp goes
    /// over the wire as RFC 3339 with millisecond precision.
    pub async fn update_permission(
        &self,
        user_id: i64,
        permission: &str,
        revoked_until: DateTime<Utc>,
    ) -> Result<serde_json::Value> {
        let body = serde_json::json!({
            "revoked_until": revoked_until.to_rfc3339_opts(SecondsFormat::Millis, true),
        });
        self.api
            .patch(&format!("users/{user_id}/permissions/{permission}"), &body)
            .await
    }
}
