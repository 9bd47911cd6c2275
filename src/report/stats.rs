use crate::domain::{Priority, Task, TaskGroup, TaskStatus};

/// Global statistics across every group
#[derive(Debug)]
pub struct GlobalStats {
    pub total_tasks: usize,
    pub done_count: usize,
    pub current_task: Option<String>,
    pub completed_pomodoros: u32,
    pub target_pomodoros: u32,
}

/// Per-group progress, derived from the tasks themselves
#[derive(Debug)]
pub struct GroupStats {
    pub title: String,
    pub deadline: String,
    pub total_tasks: usize,
    pub done_count: usize,
    pub completed_pomodoros: u32,
    pub target_pomodoros: u32,
}

/// Pomodoros grouped by task priority
#[derive(Debug, Default)]
pub struct PriorityStats {
    pub high: u32,
    pub medium: u32,
    pub low: u32,
    pub unset: u32,
}

/// Calculate global statistics across all tasks
pub fn calculate_global_stats(tasks: &[Task]) -> GlobalStats {
    let done_count = tasks.iter().filter(|t| t.is_done()).count();
    let current_task = tasks
        .iter()
        .find(|t| t.status == TaskStatus::Current)
        .map(|t| t.title.clone());

    GlobalStats {
        total_tasks: tasks.len(),
        done_count,
        current_task,
        completed_pomodoros: tasks.iter().map(|t| t.completed_pomodoros).sum(),
        target_pomodoros: tasks.iter().map(|t| t.target_pomodoros()).sum(),
    }
}

/// Calculate per-group statistics, in the groups' stored order
pub fn calculate_group_stats(groups: &[TaskGroup], tasks: &[Task]) -> Vec<GroupStats> {
    groups
        .iter()
        .map(|group| {
            let members: Vec<&Task> = tasks.iter().filter(|t| t.group_id == group.id).collect();
            GroupStats {
                title: group.title.clone(),
                deadline: group.deadline.clone(),
                total_tasks: members.len(),
                done_count: members.iter().filter(|t| t.is_done()).count(),
                completed_pomodoros: members.iter().map(|t| t.completed_pomodoros).sum(),
                target_pomodoros: members.iter().map(|t| t.target_pomodoros()).sum(),
            }
        })
        .collect()
}

/// Calculate completed pomodoros per priority band
pub fn calculate_priority_stats(tasks: &[Task]) -> PriorityStats {
    let mut stats = PriorityStats::default();
    for task in tasks {
        match task.priority {
            Some(Priority::High) => stats.high += task.completed_pomodoros,
            Some(Priority::Medium) => stats.medium += task.completed_pomodoros,
            Some(Priority::Low) => stats.low += task.completed_pomodoros,
            None => stats.unset += task.completed_pomodoros,
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Theme;
    use pretty_assertions::assert_eq;

    fn task(id: u64, group_id: u64, status: TaskStatus, completed: u32, target: u32) -> Task {
        Task {
            id,
            title: format!("task {}", id),
            status,
            date: String::new(),
            priority: Some(Priority::Medium),
            pomodoros: Some(target),
            desc: None,
            group_id,
            completed_pomodoros: completed,
            pomodoros_since_long_break: 0,
        }
    }

    fn group(id: u64, title: &str) -> TaskGroup {
        TaskGroup {
            id,
            title: title.to_string(),
            desc: String::new(),
            priority: Priority::Medium,
            deadline: String::new(),
            theme: Theme::Light,
            completed: 0,
            total: 0,
        }
    }

    #[test]
    fn test_global_stats() {
        let tasks = vec![
            task(1, 1, TaskStatus::Done, 3, 3),
            task(2, 1, TaskStatus::Current, 1, 4),
            task(3, 2, TaskStatus::Todo, 0, 2),
        ];
        let stats = calculate_global_stats(&tasks);

        assert_eq!(stats.total_tasks, 3);
        assert_eq!(stats.done_count, 1);
        assert_eq!(stats.current_task.as_deref(), Some("task 2"));
        assert_eq!(stats.completed_pomodoros, 4);
        assert_eq!(stats.target_pomodoros, 9);
    }

    #[test]
    fn test_group_stats_only_count_members() {
        let groups = vec![group(1, "thesis"), group(2, "chores")];
        let tasks = vec![
            task(1, 1, TaskStatus::Done, 2, 2),
            task(2, 1, TaskStatus::Todo, 0, 4),
            task(3, 2, TaskStatus::Done, 1, 1),
        ];

        let stats = calculate_group_stats(&groups, &tasks);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].total_tasks, 2);
        assert_eq!(stats[0].done_count, 1);
        assert_eq!(stats[0].completed_pomodoros, 2);
        assert_eq!(stats[0].target_pomodoros, 6);
        assert_eq!(stats[1].total_tasks, 1);
        assert_eq!(stats[1].done_count, 1);
    }

    #[test]
    fn test_priority_stats_bands() {
        let mut untagged = task(3, 1, TaskStatus::Todo, 2, 0);
        untagged.priority = None;
        let mut urgent = task(1, 1, TaskStatus::Done, 5, 5);
        urgent.priority = Some(Priority::High);
        let tasks = vec![urgent, task(2, 1, TaskStatus::Todo, 1, 4), untagged];

        let stats = calculate_priority_stats(&tasks);
        assert_eq!(stats.high, 5);
        assert_eq!(stats.medium, 1);
        assert_eq!(stats.low, 0);
        assert_eq!(stats.unset, 2);
    }
}
