//! Post and Comment Endpoints

use super::{params, ApiResult, JsonPlaceholderClient};
use crate::models::{Comment, Post};

impl JsonPlaceholderClient {
    /// `GET /posts?_limit=N`
    pub async fn fetch_posts(&self, limit: Option<u32>) -> ApiResult<Vec<Post>> {
        self.get_json(&self.url("posts"), &params([("_limit", limit)])).await
    }

    /// `GET /posts/{id}/comments`
    pub async fn fetch_comments(&self, post_id: u32) -> ApiResult<Vec<Comment>> {
        self.get_json(&self.url(&format!("posts/{}/comments", post_id)), &[]).await
    }
}

/// Keep posts whose title or body contains `query`, ignoring case
pub fn filter_posts(posts: Vec<Post>, query: &str) -> Vec<Post> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return posts;
    }
    posts
        .into_iter()
        .filter(|p| p.title.to_lowercase().contains(&needle) || p.body.to_lowercase().contains(&needle))
        .collect()
}
