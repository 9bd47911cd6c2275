use super::enums::{Priority, TaskStatus, Theme};
use serde::{Deserialize, Serialize};

/// Sentinel written into the date field when a task is marked done
/// without an explicit finish date.
pub const FINISHED_MARKER: &str = "Finished";

/// A single trackable task belonging to a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique id assigned by the persistence layer
    pub id: u64,
    pub title: String,
    pub status: TaskStatus,
    /// Deadline or finish marker; empty string means unset
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub priority: Option<Priority>,
    /// Target pomodoro count; None or 0 means open-ended
    #[serde(default)]
    pub pomodoros: Option<u32>,
    #[serde(default)]
    pub desc: Option<String>,
    pub group_id: u64,
    #[serde(default)]
    pub completed_pomodoros: u32,
    #[serde(default)]
    pub pomodoros_since_long_break: u32,
}

impl Task {
    /// Target pomodoro count, treating None as 0
    pub fn target_pomodoros(&self) -> u32 {
        self.pomodoros.unwrap_or(0)
    }

    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }

    /// Mark this task done, defaulting the finish marker if no date is set
    pub fn mark_done(&mut self) {
        self.status = TaskStatus::Done;
        if self.date.is_empty() {
            self.date = FINISHED_MARKER.to_string();
        }
    }
}

/// Creation payload for a task; the persistence layer assigns the id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub status: TaskStatus,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub pomodoros: Option<u32>,
    #[serde(default)]
    pub desc: Option<String>,
    pub group_id: u64,
}

impl NewTask {
    pub fn into_task(self, id: u64) -> Task {
        Task {
            id,
            title: self.title,
            status: self.status,
            date: self.date,
            priority: self.priority,
            pomodoros: self.pomodoros,
            desc: self.desc,
            group_id: self.group_id,
            completed_pomodoros: 0,
            pomodoros_since_long_break: 0,
        }
    }
}

/// A named collection of tasks with aggregate progress and a deadline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskGroup {
    pub id: u64,
    pub title: String,
    pub desc: String,
    pub priority: Priority,
    /// Legacy stored counters; superseded by live counts where tasks exist
    #[serde(default)]
    pub completed: u32,
    #[serde(default)]
    pub total: u32,
    pub deadline: String,
    #[serde(default)]
    pub theme: Theme,
}

/// Creation payload for a task group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTaskGroup {
    pub title: String,
    pub desc: String,
    pub priority: Priority,
    pub deadline: String,
    #[serde(default)]
    pub theme: Theme,
}

impl NewTaskGroup {
    pub fn into_group(self, id: u64) -> TaskGroup {
        TaskGroup {
            id,
            title: self.title,
            desc: self.desc,
            priority: self.priority,
            completed: 0,
            total: 0,
            deadline: self.deadline,
            theme: self.theme,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task(id: u64) -> Task {
        Task {
            id,
            title: format!("Task {}", id),
            status: TaskStatus::Todo,
            date: String::new(),
            priority: Some(Priority::Medium),
            pomodoros: Some(4),
            desc: None,
            group_id: 1,
            completed_pomodoros: 0,
            pomodoros_since_long_break: 0,
        }
    }

    #[test]
    fn test_mark_done_defaults_finish_marker() {
        let mut task = sample_task(1);
        task.mark_done();
        assert_eq!(task.status, TaskStatus::Done);
        assert_eq!(task.date, FINISHED_MARKER);
    }

    #[test]
    fn test_mark_done_keeps_existing_date() {
        let mut task = sample_task(1);
        task.date = "Finished: 23 Oct, 2025".to_string();
        task.mark_done();
        assert_eq!(task.date, "Finished: 23 Oct, 2025");
    }

    #[test]
    fn test_target_pomodoros_defaults_to_zero() {
        let mut task = sample_task(1);
        task.pomodoros = None;
        assert_eq!(task.target_pomodoros(), 0);
        task.pomodoros = Some(6);
        assert_eq!(task.target_pomodoros(), 6);
    }

    #[test]
    fn test_new_task_into_task_zeroes_counters() {
        let new = NewTask {
            title: "Lesson 7".to_string(),
            status: TaskStatus::Todo,
            date: "Deadline: 24 Oct, 2025".to_string(),
            priority: Some(Priority::High),
            pomodoros: Some(2),
            desc: Some("Learn something about business.".to_string()),
            group_id: 3,
        };
        let task = new.into_task(42);
        assert_eq!(task.id, 42);
        assert_eq!(task.group_id, 3);
        assert_eq!(task.completed_pomodoros, 0);
        assert_eq!(task.pomodoros_since_long_break, 0);
    }

    #[test]
    fn test_task_roundtrips_through_json() {
        let task = sample_task(7);
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }

    #[test]
    fn test_task_deserializes_with_missing_optional_fields() {
        let json = r#"{"id":1,"title":"Lesson 5","status":"done","group_id":1}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.date, "");
        assert_eq!(task.priority, None);
        assert_eq!(task.completed_pomodoros, 0);
    }
}
