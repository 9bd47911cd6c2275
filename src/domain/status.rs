use super::enums::TaskStatus;
use super::task::{Task, FINISHED_MARKER};

/// Result of a sanitize pass over the task collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizeOutcome {
    /// The full corrected collection, in input order
    pub valid_tasks: Vec<Task>,
    /// The subset that was corrected and needs persisting
    pub tasks_to_sync: Vec<Task>,
}

/// Check whether a task has earned its done status.
///
/// A task with a positive target is finished once the completed count
/// reaches it; an open-ended task (no target) is finished after any
/// completed pomodoro. A task with no target and no completions is
/// never finished.
pub fn is_task_finished(task: &Task) -> bool {
    let target = task.target_pomodoros();
    let completed = task.completed_pomodoros;

    (target > 0 && completed >= target) || (target == 0 && completed > 0)
}

/// Repair status/date drift across the whole collection.
///
/// Tasks that are finished but not marked done get `status=done`; done
/// tasks with an empty date get the finish marker. Untouched tasks pass
/// through unchanged, order is preserved, and the corrected subset is
/// returned separately so the caller can persist just those records.
pub fn sanitize_task_statuses(tasks: &[Task]) -> SanitizeOutcome {
    let mut valid_tasks = Vec::with_capacity(tasks.len());
    let mut tasks_to_sync = Vec::new();

    for task in tasks {
        let needs_status_fix = is_task_finished(task) && task.status != TaskStatus::Done;
        let needs_date_fix = task.status == TaskStatus::Done && task.date.is_empty();

        if needs_status_fix || needs_date_fix {
            let mut fixed = task.clone();
            fixed.status = TaskStatus::Done;
            if fixed.date.is_empty() {
                fixed.date = FINISHED_MARKER.to_string();
            }
            valid_tasks.push(fixed.clone());
            tasks_to_sync.push(fixed);
        } else {
            valid_tasks.push(task.clone());
        }
    }

    SanitizeOutcome {
        valid_tasks,
        tasks_to_sync,
    }
}
