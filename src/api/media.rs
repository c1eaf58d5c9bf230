//! Album and Photo Endpoints

use super::{params, ApiResult, JsonPlaceholderClient};
use crate::models::{Album, Photo};

impl JsonPlaceholderClient {
    /// `GET /albums?_limit=N`
    pub async fn fetch_albums(&self, limit: Option<u32>) -> ApiResult<Vec<Album>> {
        self.get_json(&self.url("albums"), &params([("_limit", limit)])).await
    }

    /// `GET /photos?albumId=A&_limit=N`, both optional
    pub async fn fetch_photos(&self, album_id: Option<u32>, limit: Option<u32>) -> ApiResult<Vec<Photo>> {
        let query = params([("albumId", album_id), ("_limit", limit)]);
        self.get_json(&self.url("photos"), &query).await
    }
}
