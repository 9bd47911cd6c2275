use crate::domain::{
    is_task_finished, sanitize_task_statuses, NewTask, NewTaskGroup, Task, TaskGroup, TaskStatus,
};
use crate::persistence::TaskService;
use tracing::warn;

/// Single in-memory authority for tasks and groups.
///
/// Commands mutate the collections optimistically and then persist
/// through the service; persistence failures are logged and surfaced
/// only through `last_error`, never rolled back. A later fetch
/// re-reconciles memory with disk.
pub struct TaskStore<S: TaskService> {
    service: S,
    pub groups: Vec<TaskGroup>,
    pub tasks: Vec<Task>,
    pub last_error: Option<String>,
}

impl<S: TaskService> TaskStore<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            groups: Vec::new(),
            tasks: Vec::new(),
            last_error: None,
        }
    }

    /// Load groups from the service; on failure the previous in-memory
    /// state is kept
    pub fn fetch_task_groups(&mut self) {
        self.last_error = None;
        match self.service.get_task_groups() {
            Ok(groups) => self.groups = groups,
            Err(e) => {
                warn!(error = %e, "failed to fetch task groups");
                self.last_error = Some("Failed to fetch task groups".to_string());
            }
        }
    }

    /// Load tasks, repair status/date drift, and best-effort persist the
    /// corrected subset. A sync failure is logged and never affects the
    /// loaded state.
    pub fn fetch_tasks(&mut self) {
        self.last_error = None;
        match self.service.get_tasks() {
            Ok(tasks) => {
                let outcome = sanitize_task_statuses(&tasks);
                self.tasks = outcome.valid_tasks;

                if !outcome.tasks_to_sync.is_empty() {
                    if let Err(e) = self.service.update_tasks(&outcome.tasks_to_sync) {
                        warn!(error = %e, count = outcome.tasks_to_sync.len(),
                            "failed to sync sanitized tasks");
                    }
                }
            }
            Err(e) => {
                warn!(error = %e, "failed to fetch tasks");
                self.last_error = Some("Failed to fetch tasks".to_string());
            }
        }
    }

    /// Create a group; on failure nothing is inserted
    pub fn add_task_group(&mut self, data: NewTaskGroup) {
        self.last_error = None;
        match self.service.create_task_group(data) {
            Ok(group) => self.groups.push(group),
            Err(e) => {
                warn!(error = %e, "failed to create task group");
                self.last_error = Some("Failed to create task group".to_string());
            }
        }
    }

    /// Create a task; on failure nothing is inserted
    pub fn add_task(&mut self, data: NewTask) {
        self.last_error = None;
        match self.service.create_task(data) {
            Ok(task) => self.tasks.push(task),
            Err(e) => {
                warn!(error = %e, "failed to create task");
                self.last_error = Some("Failed to create task".to_string());
            }
        }
    }

    pub fn update_task_group(&mut self, group: TaskGroup) {
        if let Some(existing) = self.groups.iter_mut().find(|g| g.id == group.id) {
            *existing = group.clone();
            if let Err(e) = self.service.update_task_group(&group) {
                warn!(error = %e, group_id = group.id, "failed to persist group update");
            }
        }
    }

    /// Delete a group and every task it owns, in memory and on disk
    pub fn delete_task_group(&mut self, id: u64) {
        self.groups.retain(|g| g.id != id);
        self.tasks.retain(|t| t.group_id != id);

        if let Err(e) = self.service.delete_task_group(id) {
            warn!(error = %e, group_id = id, "failed to persist group deletion");
        }
        if let Err(e) = self.service.delete_tasks_in_group(id) {
            warn!(error = %e, group_id = id, "failed to persist task cascade deletion");
        }
    }

    pub fn update_task(&mut self, task: Task) {
        if let Some(existing) = self.tasks.iter_mut().find(|t| t.id == task.id) {
            *existing = task.clone();
            if let Err(e) = self.service.update_task(&task) {
                warn!(error = %e, task_id = task.id, "failed to persist task update");
            }
        }
    }

    pub fn delete_task(&mut self, id: u64) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() != before {
            if let Err(e) = self.service.delete_task(id) {
                warn!(error = %e, task_id = id, "failed to persist task deletion");
            }
        }
    }

    /// Record one completed pomodoro on the task, marking it done when
    /// its target is reached. Optimistic: persistence failure is logged,
    /// the in-memory update stands.
    pub fn increment_task_pomodoro(&mut self, id: u64) {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return;
        };

        task.completed_pomodoros += 1;
        task.pomodoros_since_long_break += 1;
        if is_task_finished(task) {
            task.mark_done();
        }

        let updated = task.clone();
        if let Err(e) = self.service.update_task(&updated) {
            warn!(error = %e, task_id = id, "failed to persist pomodoro increment");
        }
    }

    /// Zero the since-last-long-break counter (called after a long break)
    pub fn reset_task_pomodoros_since_long_break(&mut self, id: u64) {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return;
        };

        task.pomodoros_since_long_break = 0;

        let updated = task.clone();
        if let Err(e) = self.service.update_task(&updated) {
            warn!(error = %e, task_id = id, "failed to persist long-break reset");
        }
    }

    /// Make the task the single current one. The previous current task
    /// is demoted to done (if finished) or todo. Both records are
    /// persisted independently; one failure does not roll back the other.
    /// An unknown id leaves the collection unchanged.
    pub fn set_current_task(&mut self, id: u64) {
        if !self.tasks.iter().any(|t| t.id == id) {
            return;
        }

        let previous = self
            .tasks
            .iter()
            .find(|t| t.status == TaskStatus::Current && t.id != id)
            .map(|t| t.id);

        let mut to_persist = Vec::new();

        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.status = TaskStatus::Current;
            to_persist.push(task.clone());
        }

        if let Some(prev_id) = previous {
            if let Some(task) = self.tasks.iter_mut().find(|t| t.id == prev_id) {
                if is_task_finished(task) {
                    task.mark_done();
                } else {
                    task.status = TaskStatus::Todo;
                }
                to_persist.push(task.clone());
            }
        }

        for task in to_persist {
            if let Err(e) = self.service.update_task(&task) {
                warn!(error = %e, task_id = task.id, "failed to persist current-task change");
            }
        }
    }

    /// The task currently attached to the timer, if any
    pub fn current_task(&self) -> Option<&Task> {
        self.tasks.iter().find(|t| t.status == TaskStatus::Current)
    }

    pub fn task(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn group(&self, id: u64) -> Option<&TaskGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// Group progress as (completed, total): derived live from the task
    /// list when the group has tasks, otherwise the stored legacy counters
    pub fn group_progress(&self, group_id: u64) -> (u32, u32) {
        let mut total = 0u32;
        let mut completed = 0u32;
        for task in self.tasks.iter().filter(|t| t.group_id == group_id) {
            total += 1;
            if task.is_done() {
                completed += 1;
            }
        }

        if total > 0 {
            (completed, total)
        } else {
            self.group(group_id)
                .map(|g| (g.completed, g.total))
                .unwrap_or((0, 0))
        }
    }
}
