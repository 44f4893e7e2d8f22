use chrono::Utc;
use uuid::Uuid;

use super::dto::PutTaskRequest;
use super::model::Task;
use crate::errors::{ApiError, Result};
use crate::store::TaskStore;

/// Tasks expire 24 hours after creation; the store garbage-collects them.
const TASK_TTL_SECS: i64 = 86_400;

/// Fixed page size when listing a user's tasks.
const LIST_LIMIT: i32 = 10;

pub async fn create_task(store: &dyn TaskStore, request: PutTaskRequest) -> Result<Task> {
    let created_time = Utc::now().timestamp();
    let task = Task {
        // The service owns id assignment; a caller-supplied task_id or
        // is_done is ignored.
        task_id: format!("task_{}", Uuid::new_v4().simple()),
        user_id: request.user_id.unwrap_or_default(),
        content: request.content,
        is_done: false,
        created_time,
        ttl: created_time + TASK_TTL_SECS,
    };

    // Fire-and-forget: the constructed task is returned verbatim, no re-read.
    store.put(&task).await?;

    Ok(task)
}

pub async fn get_task(store: &dyn TaskStore, task_id: &str) -> Result<Task> {
    store
        .get_by_id(task_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Task {task_id} not found")))
}

pub async fn list_tasks(store: &dyn TaskStore, user_id: &str) -> Result<Vec<Task>> {
    // Newest first; an unknown user yields an empty list, not an error.
    store.query_by_user(user_id, LIST_LIMIT, true).await
}

pub async fn update_task(store: &dyn TaskStore, request: PutTaskRequest) -> Result<String> {
    let task_id = request
        .task_id
        .ok_or_else(|| ApiError::Validation("task_id is required to update a task".to_string()))?;

    store
        .update_fields(&task_id, &request.content, request.is_done)
        .await?;

    Ok(task_id)
}

pub async fn delete_task(store: &dyn TaskStore, task_id: &str) -> Result<String> {
    // Idempotent: the id is echoed back whether or not the item existed.
    store.delete(task_id).await?;
    Ok(task_id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn put_request(content: &str, user_id: Option<&str>) -> PutTaskRequest {
        PutTaskRequest {
            content: content.to_string(),
            user_id: user_id.map(str::to_string),
            task_id: None,
            is_done: false,
        }
    }

    #[tokio::test]
    async fn create_assigns_id_timestamp_and_ttl() {
        let store = MemoryStore::new();
        let task = create_task(&store, put_request("buy milk", Some("user_abc")))
            .await
            .unwrap();

        assert!(task.task_id.starts_with("task_"));
        assert_eq!(task.user_id, "user_abc");
        assert_eq!(task.content, "buy milk");
        assert!(!task.is_done);
        assert_eq!(task.ttl, task.created_time + 86_400);

        let stored = get_task(&store, &task.task_id).await.unwrap();
        assert_eq!(stored, task);
    }

    #[tokio::test]
    async fn create_ignores_caller_supplied_id_and_done_flag() {
        let store = MemoryStore::new();
        let request = PutTaskRequest {
            content: "buy milk".to_string(),
            user_id: Some("user_abc".to_string()),
            task_id: Some("task_forged".to_string()),
            is_done: true,
        };

        let task = create_task(&store, request).await.unwrap();
        assert_ne!(task.task_id, "task_forged");
        assert!(!task.is_done);
    }

    #[tokio::test]
    async fn update_without_task_id_is_a_validation_error() {
        let store = MemoryStore::new();
        let err = update_task(&store, put_request("new content", None))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn delete_echoes_id_for_unknown_task() {
        let store = MemoryStore::new();
        let echoed = delete_task(&store, "task_missing").await.unwrap();
        assert_eq!(echoed, "task_missing");
    }
}
