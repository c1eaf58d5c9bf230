//! Persisted Task Store
//!
//! Owns the ordered task collection and writes the whole collection back to
//! storage after every change.

use chrono::{DateTime, Utc};
use log::{debug, info};

use crate::models::{normalize_text, Task, TaskId, TaskStats};
use crate::storage::{load_or_default, persist_or_log, KeyValueStorage};

/// Task collection backed by a key-value store
#[derive(Debug, Clone)]
pub struct TaskStore<S> {
    storage: S,
    key: String,
    tasks: Vec<Task>,
}

impl<S: KeyValueStorage> TaskStore<S> {
    /// Load the collection stored under `key`. Missing or unreadable
    /// entries give an empty collection.
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let tasks: Vec<Task> = load_or_default(&storage, &key);
        info!("[TaskStore] Loaded {} tasks from \"{}\"", tasks.len(), key);
        Self { storage, key, tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Append a task created now. `None` if the text is blank.
    pub fn add(&mut self, text: &str) -> Option<Task> {
        self.add_at(text, Utc::now())
    }

    /// Append a task created at `now`
    pub fn add_at(&mut self, text: &str, now: DateTime<Utc>) -> Option<Task> {
        let text = normalize_text(text)?;
        let task = Task {
            id: self.next_id(now),
            text,
            completed: false,
            created_at: now,
        };
        debug!("[TaskStore] Adding task {}", task.id);
        self.tasks.push(task.clone());
        self.persist();
        Some(task)
    }

    /// Flip `completed`. Returns false if the id is unknown.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        task.completed = !task.completed;
        self.persist();
        true
    }

    /// Delete by id. Returns false if the id is unknown.
    pub fn remove(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// Delete every completed task, returning how many were removed
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();
        if removed > 0 {
            debug!("[TaskStore] Cleared {} completed tasks", removed);
            self.persist();
        }
        removed
    }

    /// Replace the text of a task. Blank text leaves the task untouched.
    pub fn update(&mut self, id: TaskId, new_text: &str) -> bool {
        let Some(text) = normalize_text(new_text) else {
            return false;
        };
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        task.text = text;
        self.persist();
        true
    }

    pub fn stats(&self) -> TaskStats {
        TaskStats::from_tasks(&self.tasks)
    }

    /// Creation time in ms, or one past the newest id if the clock hasn't moved past it
    fn next_id(&self, now: DateTime<Utc>) -> TaskId {
        let stamp = now.timestamp_millis();
        match self.tasks.iter().map(|t| t.id).max() {
            Some(max) if max >= stamp => max + 1,
            _ => stamp,
        }
    }

    fn persist(&self) {
        persist_or_log(&self.storage, &self.key, &self.tasks);
    }
}
