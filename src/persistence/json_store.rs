use super::files::{atomic_write, read_file};
use super::service::{ServiceResult, TaskService};
use crate::domain::{NewTask, NewTaskGroup, Task, TaskGroup};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const GROUPS_FILE: &str = "groups.json";
const TASKS_FILE: &str = "tasks.json";

/// On-disk envelope for one collection; `next_id` stays monotonic across
/// deletes so ids are never reused.
#[derive(Debug, Serialize, Deserialize)]
struct Collection<T> {
    next_id: u64,
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            items: Vec::new(),
        }
    }
}

fn load_collection<T: DeserializeOwned>(path: &Path) -> ServiceResult<Collection<T>> {
    let content = read_file(path).map_err(|e| super::ServiceError::Other(e.to_string()))?;
    if content.is_empty() {
        return Ok(Collection::default());
    }
    Ok(serde_json::from_str(&content)?)
}

fn save_collection<T: Serialize>(path: &Path, collection: &Collection<T>) -> ServiceResult<()> {
    let json = serde_json::to_string_pretty(collection)?;
    atomic_write(path, &json).map_err(|e| super::ServiceError::Other(e.to_string()))
}

/// File-backed persistence service storing groups and tasks as JSON
/// under the ember data directory.
#[derive(Debug)]
pub struct JsonTaskService {
    dir: PathBuf,
}

impl JsonTaskService {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn groups_path(&self) -> PathBuf {
        self.dir.join(GROUPS_FILE)
    }

    fn tasks_path(&self) -> PathBuf {
        self.dir.join(TASKS_FILE)
    }

    fn load_groups(&self) -> ServiceResult<Collection<TaskGroup>> {
        load_collection(&self.groups_path())
    }

    fn load_tasks(&self) -> ServiceResult<Collection<Task>> {
        load_collection(&self.tasks_path())
    }
}

impl TaskService for JsonTaskService {
    fn get_task_groups(&self) -> ServiceResult<Vec<TaskGroup>> {
        Ok(self.load_groups()?.items)
    }

    fn create_task_group(&mut self, data: NewTaskGroup) -> ServiceResult<TaskGroup> {
        let mut collection = self.load_groups()?;
        let group = data.into_group(collection.next_id);
        collection.next_id += 1;
        collection.items.push(group.clone());
        save_collection(&self.groups_path(), &collection)?;
        Ok(group)
    }

    fn update_task_group(&mut self, group: &TaskGroup) -> ServiceResult<()> {
        let mut collection = self.load_groups()?;
        if let Some(existing) = collection.items.iter_mut().find(|g| g.id == group.id) {
            *existing = group.clone();
            save_collection(&self.groups_path(), &collection)?;
        }
        Ok(())
    }

    fn delete_task_group(&mut self, id: u64) -> ServiceResult<()> {
        let mut collection = self.load_groups()?;
        let before = collection.items.len();
        collection.items.retain(|g| g.id != id);
        if collection.items.len() != before {
            save_collection(&self.groups_path(), &collection)?;
        }
        Ok(())
    }

    fn get_tasks(&self) -> ServiceResult<Vec<Task>> {
        Ok(self.load_tasks()?.items)
    }

    fn create_task(&mut self, data: NewTask) -> ServiceResult<Task> {
        let mut collection = self.load_tasks()?;
        let task = data.into_task(collection.next_id);
        collection.next_id += 1;
        collection.items.push(task.clone());
        save_collection(&self.tasks_path(), &collection)?;
        Ok(task)
    }

    fn update_task(&mut self, task: &Task) -> ServiceResult<()> {
        self.update_tasks(std::slice::from_ref(task))
    }

    fn update_tasks(&mut self, tasks: &[Task]) -> ServiceResult<()> {
        if tasks.is_empty() {
            return Ok(());
        }
        let mut collection = self.load_tasks()?;
        for task in tasks {
            match collection.items.iter_mut().find(|t| t.id == task.id) {
                Some(existing) => *existing = task.clone(),
                None => collection.items.push(task.clone()),
            }
        }
        save_collection(&self.tasks_path(), &collection)
    }

    fn delete_task(&mut self, id: u64) -> ServiceResult<()> {
        let mut collection = self.load_tasks()?;
        let before = collection.items.len();
        collection.items.retain(|t| t.id != id);
        if collection.items.len() != before {
            save_collection(&self.tasks_path(), &collection)?;
        }
        Ok(())
    }

    fn delete_tasks_in_group(&mut self, group_id: u64) -> ServiceResult<()> {
        let mut collection = self.load_tasks()?;
        let before = collection.items.len();
        collection.items.retain(|t| t.group_id != group_id);
        if collection.items.len() != before {
            save_collection(&self.tasks_path(), &collection)?;
        }
        Ok(())
    }
}
