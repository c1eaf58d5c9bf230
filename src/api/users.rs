//! User Endpoints

use super::{ApiResult, JsonPlaceholderClient};
use crate::models::User;

impl JsonPlaceholderClient {
    /// `GET /users`
    pub async fn fetch_users(&self) -> ApiResult<Vec<User>> {
        self.get_json(&self.url("users"), &[]).await
    }
}
