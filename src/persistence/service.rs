use crate::domain::{NewTask, NewTaskGroup, Task, TaskGroup};
use thiserror::Error;

/// Failure raised by a persistence backend. The store never inspects the
/// variant beyond its message; no operation retries.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored data is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("{0}")]
    Other(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Persistence contract consumed by the task store. Implementations own
/// durable storage and id assignment; ids are unique and monotonic per
/// collection.
pub trait TaskService {
    fn get_task_groups(&self) -> ServiceResult<Vec<TaskGroup>>;
    fn create_task_group(&mut self, data: NewTaskGroup) -> ServiceResult<TaskGroup>;
    fn update_task_group(&mut self, group: &TaskGroup) -> ServiceResult<()>;
    fn delete_task_group(&mut self, id: u64) -> ServiceResult<()>;

    fn get_tasks(&self) -> ServiceResult<Vec<Task>>;
    fn create_task(&mut self, data: NewTask) -> ServiceResult<Task>;
    fn update_task(&mut self, task: &Task) -> ServiceResult<()>;
    /// Bulk upsert by id; records absent from `tasks` are left untouched
    fn update_tasks(&mut self, tasks: &[Task]) -> ServiceResult<()>;
    fn delete_task(&mut self, id: u64) -> ServiceResult<()>;
    /// Remove every task owned by the group (cascade for group deletion)
    fn delete_tasks_in_group(&mut self, group_id: u64) -> ServiceResult<()>;
}

/// In-memory backend used by store and app tests; `fail_writes` makes
/// every mutating call error to exercise the failure paths.
#[cfg(test)]
pub mod memory {
    use super::*;

    #[derive(Debug, Default)]
    pub struct MemoryTaskService {
        pub groups: Vec<TaskGroup>,
        pub tasks: Vec<Task>,
        pub next_id: u64,
        pub fail_writes: bool,
        pub fail_reads: bool,
    }

    impl MemoryTaskService {
        pub fn new() -> Self {
            Self {
                next_id: 1,
                ..Self::default()
            }
        }

        pub fn with_tasks(tasks: Vec<Task>) -> Self {
            let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
            Self {
                tasks,
                next_id,
                ..Self::new()
            }
        }

        fn check_write(&self) -> ServiceResult<()> {
            if self.fail_writes {
                return Err(ServiceError::Other("write refused".to_string()));
            }
            Ok(())
        }

        fn check_read(&self) -> ServiceResult<()> {
            if self.fail_reads {
                return Err(ServiceError::Other("read refused".to_string()));
            }
            Ok(())
        }

        fn take_id(&mut self) -> u64 {
            let id = self.next_id;
            self.next_id += 1;
            id
        }
    }

    impl TaskService for MemoryTaskService {
        fn get_task_groups(&self) -> ServiceResult<Vec<TaskGroup>> {
            self.check_read()?;
            Ok(self.groups.clone())
        }

        fn create_task_group(&mut self, data: NewTaskGroup) -> ServiceResult<TaskGroup> {
            self.check_write()?;
            let id = self.take_id();
            let group = data.into_group(id);
            self.groups.push(group.clone());
            Ok(group)
        }

        fn update_task_group(&mut self, group: &TaskGroup) -> ServiceResult<()> {
            self.check_write()?;
            if let Some(existing) = self.groups.iter_mut().find(|g| g.id == group.id) {
                *existing = group.clone();
            }
            Ok(())
        }

        fn delete_task_group(&mut self, id: u64) -> ServiceResult<()> {
            self.check_write()?;
            self.groups.retain(|g| g.id != id);
            Ok(())
        }

        fn get_tasks(&self) -> ServiceResult<Vec<Task>> {
            self.check_read()?;
            Ok(self.tasks.clone())
        }

        fn create_task(&mut self, data: NewTask) -> ServiceResult<Task> {
            self.check_write()?;
            let id = self.take_id();
            let task = data.into_task(id);
            self.tasks.push(task.clone());
            Ok(task)
        }

        fn update_task(&mut self, task: &Task) -> ServiceResult<()> {
            self.check_write()?;
            if let Some(existing) = self.tasks.iter_mut().find(|t| t.id == task.id) {
                *existing = task.clone();
            }
            Ok(())
        }

        fn update_tasks(&mut self, tasks: &[Task]) -> ServiceResult<()> {
            self.check_write()?;
            for task in tasks {
                match self.tasks.iter_mut().find(|t| t.id == task.id) {
                    Some(existing) => *existing = task.clone(),
                    None => self.tasks.push(task.clone()),
                }
            }
            Ok(())
        }

        fn delete_task(&mut self, id: u64) -> ServiceResult<()> {
            self.check_write()?;
            self.tasks.retain(|t| t.id != id);
            Ok(())
        }

        fn delete_tasks_in_group(&mut self, group_id: u64) -> ServiceResult<()> {
            self.check_write()?;
            self.tasks.retain(|t| t.group_id != group_id);
            Ok(())
        }
    }
}
