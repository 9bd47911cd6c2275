pub mod dates;
pub mod enums;
pub mod filter;
pub mod status;
pub mod task;

pub use dates::{format_deadline, parse_task_date, sort_timestamp};
pub use enums::{Priority, SortKey, TaskStatus, Theme, TimerMode, UiMode};
pub use filter::{filtered_and_sorted_tasks, FilterOptions};
pub use status::{is_task_finished, sanitize_task_statuses, SanitizeOutcome};
pub use task::{NewTask, NewTaskGroup, Task, TaskGroup, FINISHED_MARKER};
