//! Task Filtering
//!
//! View-only selection of tasks by completion state.

use crate::models::{Task, TaskStats};

/// Which tasks the list shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    pub const ALL: [TaskFilter; 3] = [TaskFilter::All, TaskFilter::Active, TaskFilter::Completed];

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Active => !task.completed,
            TaskFilter::Completed => task.completed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskFilter::All => "All",
            TaskFilter::Active => "Active",
            TaskFilter::Completed => "Completed",
        }
    }

    /// Badge count shown next to the filter button
    pub fn count(&self, stats: &TaskStats) -> usize {
        match self {
            TaskFilter::All => stats.total,
            TaskFilter::Active => stats.remaining,
            TaskFilter::Completed => stats.completed,
        }
    }

    /// Text shown when the filtered list is empty
    pub fn empty_message(&self) -> &'static str {
        match self {
            TaskFilter::All => "No tasks yet. Add one above!",
            TaskFilter::Active => "No active tasks remaining",
            TaskFilter::Completed => "No completed tasks yet",
        }
    }
}

/// Tasks matching `filter`, in collection order
pub fn filter_tasks(tasks: &[Task], filter: TaskFilter) -> Vec<Task> {
    tasks.iter().filter(|t| filter.matches(t)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn make_task(id: i64, completed: bool) -> Task {
        Task {
            id,
            text: format!("Task {}", id),
            completed,
            created_at: DateTime::from_timestamp_millis(id).unwrap(),
        }
    }

    fn sample() -> Vec<Task> {
        vec![
            make_task(1, false),
            make_task(2, true),
            make_task(3, false),
            make_task(4, true),
        ]
    }

    #[test]
    fn test_all_keeps_everything_in_order() {
        let ids: Vec<i64> = filter_tasks(&sample(), TaskFilter::All).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_active_never_returns_completed() {
        let active = filter_tasks(&sample(), TaskFilter::Active);
        assert_eq!(active.len(), 2);
        assert!(active.iter().all(|t| !t.completed));
    }

    #[test]
    fn test_completed_only() {
        let done = filter_tasks(&sample(), TaskFilter::Completed);
        let ids: Vec<i64> = done.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn test_counts_follow_stats() {
        let stats = TaskStats::from_tasks(&sample());
        let counts: Vec<usize> = TaskFilter::ALL.iter().map(|f| f.count(&stats)).collect();
        assert_eq!(counts, vec![4, 2, 2]);
    }
}
