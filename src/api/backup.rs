//! Backup Endpoints
//!
//! DummyJSON wraps its arrays in an object (`{"quotes": [...], "total": ..}`),
//! so bodies go through `decode_listing`.

use serde_json::Value;

use super::{decode_listing, params, ApiResult, JsonPlaceholderClient};
use crate::models::Quote;

impl JsonPlaceholderClient {
    /// `GET {backup}/quotes?limit=N`
    pub async fn fetch_quotes(&self, limit: Option<u32>) -> ApiResult<Vec<Quote>> {
        let body: Value = self.get_json(&self.backup_url("quotes"), &params([("limit", limit)])).await?;
        decode_listing(body, "quotes")
    }
}
