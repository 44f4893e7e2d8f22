use serde::{Deserialize, Serialize};

use super::model::Task;

/// Shared body for the create and update endpoints.
///
/// `content` is always required. Create ignores `task_id` and `is_done`
/// (the service assigns both); update requires `task_id` in the body.
#[derive(Debug, Deserialize)]
pub struct PutTaskRequest {
    pub content: String,
    pub user_id: Option<String>,
    pub task_id: Option<String>,
    #[serde(default)]
    pub is_done: bool,
}

#[derive(Debug, Serialize)]
pub struct CreateTaskResponse {
    pub task: Task,
}

#[derive(Debug, Serialize)]
pub struct ListTasksResponse {
    pub tasks: Vec<Task>,
}

#[derive(Debug, Serialize)]
pub struct UpdateTaskResponse {
    pub updated_task_id: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteTaskResponse {
    pub deleted_task_id: String,
}
