//! Remote API Wrappers
//!
//! Read-only bindings to JSONPlaceholder (and the DummyJSON backup API),
//! organized by domain.

mod backup;
mod media;
mod posts;
mod users;

use async_trait::async_trait;
use log::{debug, error};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::config::{AppConfig, SEARCH_POOL_LIMIT};
use crate::models::{Photo, Post};

pub use posts::filter_posts;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP error! status: {status} ({url})")]
    Status { status: u16, url: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Where the data panel gets its collections from
#[async_trait(?Send)]
pub trait RemoteSource {
    async fn posts(&self, limit: Option<u32>) -> ApiResult<Vec<Post>>;

    async fn photos(&self, album_id: Option<u32>, limit: Option<u32>) -> ApiResult<Vec<Photo>>;

    /// Posts whose title or body contains `query`, case-insensitively.
    /// Searches a fixed pool of posts since the API has no search endpoint.
    async fn search(&self, query: &str) -> ApiResult<Vec<Post>> {
        let pool = self.posts(Some(SEARCH_POOL_LIMIT)).await?;
        Ok(filter_posts(pool, query))
    }
}

/// HTTP client for the JSONPlaceholder API
#[derive(Debug, Clone)]
pub struct JsonPlaceholderClient {
    http: reqwest::Client,
    base_url: String,
    backup_base_url: String,
}

impl JsonPlaceholderClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.clone(),
            backup_base_url: config.backup_api_base_url.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    fn backup_url(&self, path: &str) -> String {
        join_url(&self.backup_base_url, path)
    }

    /// GET `url` and decode the JSON body. Non-2xx responses are errors.
    async fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, String)]) -> ApiResult<T> {
        debug!("[API] GET {} {:?}", url, query);
        let result = self.send_get(url, query).await;
        if let Err(e) = &result {
            error!("[API] fetch error: {}", e);
        }
        result
    }

    async fn send_get<T: DeserializeOwned>(&self, url: &str, query: &[(&str, String)]) -> ApiResult<T> {
        let response = self.http.get(url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl RemoteSource for JsonPlaceholderClient {
    async fn posts(&self, limit: Option<u32>) -> ApiResult<Vec<Post>> {
        self.fetch_posts(limit).await
    }

    async fn photos(&self, album_id: Option<u32>, limit: Option<u32>) -> ApiResult<Vec<Photo>> {
        self.fetch_photos(album_id, limit).await
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Query parameters, skipping the ones that are unset
fn params<const N: usize>(pairs: [(&'static str, Option<u32>); N]) -> Vec<(&'static str, String)> {
    pairs
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v.to_string())))
        .collect()
}

/// Items from a response that is either a bare array or an object holding
/// the array under `field`
pub fn decode_listing<T: DeserializeOwned>(body: Value, field: &str) -> ApiResult<Vec<T>> {
    let items = match body {
        Value::Array(_) => body,
        Value::Object(mut map) => map
            .remove(field)
            .ok_or_else(|| ApiError::Decode(format!("missing \"{}\" array", field)))?,
        other => return Err(ApiError::Decode(format!("expected array, got {}", other))),
    };
    serde_json::from_value(items).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("https://api.test/", "/posts"), "https://api.test/posts");
        assert_eq!(join_url("https://api.test", "posts/3/comments"), "https://api.test/posts/3/comments");
    }

    #[test]
    fn test_params_skip_unset() {
        let query = params([("albumId", None), ("_limit", Some(12))]);
        assert_eq!(query, vec![("_limit", "12".to_string())]);
    }

    #[test]
    fn test_decode_bare_array() {
        let body = json!([{ "userId": 1, "id": 2, "title": "t", "body": "b" }]);
        let posts: Vec<Post> = decode_listing(body, "posts").unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, 2);
    }

    #[test]
    fn test_decode_wrapped_array() {
        let body = json!({
            "quotes": [{ "id": 1, "quote": "Stay hungry", "author": "Someone" }],
            "total": 1,
            "skip": 0,
            "limit": 1
        });
        let quotes: Vec<crate::models::Quote> = decode_listing(body, "quotes").unwrap();
        assert_eq!(quotes[0].author, "Someone");
    }

    #[test]
    fn test_decode_rejects_other_shapes() {
        let missing: ApiResult<Vec<Post>> = decode_listing(json!({ "items": [] }), "posts");
        assert!(matches!(missing, Err(ApiError::Decode(_))));

        let scalar: ApiResult<Vec<Post>> = decode_listing(json!("nope"), "posts");
        assert!(matches!(scalar, Err(ApiError::Decode(_))));
    }
}
