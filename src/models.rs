//! Frontend Models
//!
//! Task records persisted in local storage and the shapes returned by the
//! remote API. Field names serialize as camelCase to match the JSON on both
//! sides.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task identifier: creation time in milliseconds, bumped when needed to stay unique
pub type TaskId = i64;

/// Maximum task text length in characters
pub const MAX_TASK_LEN: usize = 200;

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Trim and cap task text. Returns `None` when nothing is left.
pub fn normalize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let capped: String = trimmed.chars().take(MAX_TASK_LEN).collect();
    Some(capped.trim_end().to_string())
}

/// Counts derived from the task collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
}

impl TaskStats {
    /// Single pass over the collection
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let completed = tasks.iter().fold(0, |acc, t| acc + usize::from(t.completed));
        Self {
            total: tasks.len(),
            completed,
            remaining: tasks.len() - completed,
        }
    }

    /// Rounded completion percentage, 0 when empty
    pub fn percent_complete(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed as f64 / self.total as f64) * 100.0).round() as u32
    }
}

/// Post from JSONPlaceholder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: u32,
    pub id: u32,
    pub title: String,
    pub body: String,
}

/// Photo from JSONPlaceholder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub album_id: u32,
    pub id: u32,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub post_id: u32,
    pub id: u32,
    pub name: String,
    pub email: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub user_id: u32,
    pub id: u32,
    pub title: String,
}

/// Quote from the DummyJSON backup API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub id: u32,
    pub quote: String,
    pub author: String,
}
