use super::dates::sort_timestamp;
use super::enums::{Priority, SortKey, TaskStatus};
use super::task::Task;

/// Which tasks the list shows; disabled priority flags hide their tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOptions {
    pub high_priority: bool,
    pub medium_priority: bool,
    pub low_priority: bool,
    pub show_done: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            high_priority: true,
            medium_priority: true,
            low_priority: true,
            show_done: true,
        }
    }
}

impl FilterOptions {
    fn matches_priority(&self, priority: Option<Priority>) -> bool {
        match priority {
            Some(Priority::High) => self.high_priority,
            Some(Priority::Medium) => self.medium_priority,
            Some(Priority::Low) => self.low_priority,
            None => false,
        }
    }
}

/// Derive the displayed task list for one group.
///
/// A task is shown when its priority flag is enabled and its done state
/// matches `show_done`, or when it is the pinned task; pinning overrides
/// the filters but not group membership. Sorting is stable.
pub fn filtered_and_sorted_tasks(
    tasks: &[Task],
    group_id: u64,
    options: FilterOptions,
    sort: SortKey,
    pinned_id: Option<u64>,
) -> Vec<Task> {
    let mut shown: Vec<Task> = tasks
        .iter()
        .filter(|task| {
            if task.group_id != group_id {
                return false;
            }

            let matches_status = options.show_done || task.status != TaskStatus::Done;
            let matches_priority = options.matches_priority(task.priority);

            (matches_status && matches_priority) || Some(task.id) == pinned_id
        })
        .cloned()
        .collect();

    match sort {
        SortKey::Priority => {
            shown.sort_by_key(|task| std::cmp::Reverse(task.priority.map_or(0, |p| p.rank())));
        }
        SortKey::Deadline => {
            shown.sort_by_key(|task| sort_timestamp(&task.date));
        }
        SortKey::Name => {
            shown.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
        }
        SortKey::Pomodoros => {
            shown.sort_by_key(|task| std::cmp::Reverse(task.target_pomodoros()));
        }
    }

    shown
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn task(id: u64, group_id: u64, priority: Option<Priority>, status: TaskStatus) -> Task {
        Task {
            id,
            title: format!("Task {}", id),
            status,
            date: String::new(),
            priority,
            pomodoros: None,
            desc: None,
            group_id,
            completed_pomodoros: 0,
            pomodoros_since_long_break: 0,
        }
    }

    fn ids(tasks: &[Task]) -> Vec<u64> {
        tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_filters_by_group() {
        let tasks = vec![
            task(1, 1, Some(Priority::High), TaskStatus::Todo),
            task(2, 2, Some(Priority::High), TaskStatus::Todo),
        ];
        let shown = filtered_and_sorted_tasks(
            &tasks,
            1,
            FilterOptions::default(),
            SortKey::Priority,
            None,
        );
        assert_eq!(ids(&shown), vec![1]);
    }

    #[test]
    fn test_disabled_priority_flag_hides_tasks() {
        let tasks = vec![
            task(1, 1, Some(Priority::High), TaskStatus::Todo),
            task(2, 1, Some(Priority::Low), TaskStatus::Todo),
            task(3, 1, None, TaskStatus::Todo),
        ];
        let options = FilterOptions {
            low_priority: false,
            ..FilterOptions::default()
        };
        let shown = filtered_and_sorted_tasks(&tasks, 1, options, SortKey::Priority, None);
        // Missing priority matches no flag, so task 3 is hidden too
        assert_eq!(ids(&shown), vec![1]);
    }

    #[test]
    fn test_show_done_flag() {
        let tasks = vec![
            task(1, 1, Some(Priority::High), TaskStatus::Done),
            task(2, 1, Some(Priority::High), TaskStatus::Todo),
        ];
        let hidden = FilterOptions {
            show_done: false,
            ..FilterOptions::default()
        };
        let shown = filtered_and_sorted_tasks(&tasks, 1, hidden, SortKey::Priority, None);
        assert_eq!(ids(&shown), vec![2]);
    }

    #[test]
    fn test_pinned_task_bypasses_filters() {
        let tasks = vec![
            task(1, 1, Some(Priority::Low), TaskStatus::Done),
            task(2, 1, Some(Priority::High), TaskStatus::Todo),
        ];
        let options = FilterOptions {
            low_priority: false,
            show_done: false,
            ..FilterOptions::default()
        };
        let shown = filtered_and_sorted_tasks(&tasks, 1, options, SortKey::Priority, Some(1));
        assert!(ids(&shown).contains(&1));
    }

    #[test]
    fn test_pinned_task_does_not_cross_groups() {
        let tasks = vec![task(1, 2, Some(Priority::High), TaskStatus::Todo)];
        let shown = filtered_and_sorted_tasks(
            &tasks,
            1,
            FilterOptions::default(),
            SortKey::Priority,
            Some(1),
        );
        assert!(shown.is_empty());
    }

    #[test]
    fn test_sort_by_priority_descending() {
        let tasks = vec![
            task(1, 1, Some(Priority::Low), TaskStatus::Todo),
            task(2, 1, None, TaskStatus::Todo),
            task(3, 1, Some(Priority::High), TaskStatus::Todo),
            task(4, 1, Some(Priority::Medium), TaskStatus::Todo),
        ];
        let options = FilterOptions::default();
        // Pin task 2 so the missing-priority task stays visible
        let shown = filtered_and_sorted_tasks(&tasks, 1, options, SortKey::Priority, Some(2));
        assert_eq!(ids(&shown), vec![3, 4, 1, 2]);
    }

    #[test]
    fn test_sort_by_deadline_unparseable_first() {
        let mut a = task(1, 1, Some(Priority::High), TaskStatus::Todo);
        a.date = "Deadline: 25 Oct, 2025".to_string();
        let mut b = task(2, 1, Some(Priority::High), TaskStatus::Todo);
        b.date = "whenever".to_string();
        let mut c = task(3, 1, Some(Priority::High), TaskStatus::Todo);
        c.date = "Deadline: 24 Oct, 2025".to_string();

        let shown = filtered_and_sorted_tasks(
            &[a, b, c],
            1,
            FilterOptions::default(),
            SortKey::Deadline,
            None,
        );
        assert_eq!(ids(&shown), vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_by_name_case_insensitive() {
        let mut banana = task(1, 1, Some(Priority::High), TaskStatus::Todo);
        banana.title = "Banana".to_string();
        let mut apple = task(2, 1, Some(Priority::High), TaskStatus::Todo);
        apple.title = "apple".to_string();
        let mut cherry = task(3, 1, Some(Priority::High), TaskStatus::Todo);
        cherry.title = "Cherry".to_string();

        let shown = filtered_and_sorted_tasks(
            &[banana, apple, cherry],
            1,
            FilterOptions::default(),
            SortKey::Name,
            None,
        );
        let titles: Vec<&str> = shown.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["apple", "Banana", "Cherry"]);
    }

    #[test]
    fn test_sort_by_pomodoros_descending_missing_last() {
        let mut a = task(1, 1, Some(Priority::High), TaskStatus::Todo);
        a.pomodoros = Some(2);
        let mut b = task(2, 1, Some(Priority::High), TaskStatus::Todo);
        b.pomodoros = None;
        let mut c = task(3, 1, Some(Priority::High), TaskStatus::Todo);
        c.pomodoros = Some(6);

        let shown = filtered_and_sorted_tasks(
            &[a, b, c],
            1,
            FilterOptions::default(),
            SortKey::Pomodoros,
            None,
        );
        assert_eq!(ids(&shown), vec![3, 1, 2]);
    }

    #[test]
    fn test_equal_keys_keep_original_order() {
        let tasks = vec![
            task(5, 1, Some(Priority::High), TaskStatus::Todo),
            task(6, 1, Some(Priority::High), TaskStatus::Todo),
            task(7, 1, Some(Priority::High), TaskStatus::Todo),
        ];
        let shown = filtered_and_sorted_tasks(
            &tasks,
            1,
            FilterOptions::default(),
            SortKey::Priority,
            None,
        );
        assert_eq!(ids(&shown), vec![5, 6, 7]);
    }
}
