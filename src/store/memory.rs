use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::TaskStore;
use crate::errors::{ApiError, Result};
use crate::routes::tasks::model::Task;

/// In-memory task store with the same contract as [`super::DynamoStore`].
/// Backs the test suite; no persistence, no ttl expiry.
#[derive(Default)]
pub struct MemoryStore {
    tasks: Mutex<HashMap<String, Task>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Task>>> {
        self.tasks
            .lock()
            .map_err(|_| ApiError::Store("task map lock poisoned".to_string()))
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn put(&self, task: &Task) -> Result<()> {
        self.lock()?.insert(task.task_id.clone(), task.clone());
        Ok(())
    }

    async fn get_by_id(&self, task_id: &str) -> Result<Option<Task>> {
        Ok(self.lock()?.get(task_id).cloned())
    }

    async fn query_by_user(
        &self,
        user_id: &str,
        limit: i32,
        descending: bool,
    ) -> Result<Vec<Task>> {
        let mut tasks: Vec<Task> = self
            .lock()?
            .values()
            .filter(|task| task.user_id == user_id)
            .cloned()
            .collect();

        tasks.sort_by_key(|task| task.created_time);
        if descending {
            tasks.reverse();
        }
        tasks.truncate(limit.max(0) as usize);

        Ok(tasks)
    }

    async fn update_fields(&self, task_id: &str, content: &str, is_done: bool) -> Result<()> {
        let mut tasks = self.lock()?;
        let task = tasks
            .get_mut(task_id)
            .ok_or_else(|| ApiError::NotFound(format!("Task {task_id} not found")))?;

        task.content = content.to_string();
        task.is_done = is_done;

        Ok(())
    }

    async fn delete(&self, task_id: &str) -> Result<()> {
        self.lock()?.remove(task_id);
        Ok(())
    }
}
