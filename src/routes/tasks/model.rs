use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub task_id: String,
    pub user_id: String,
    pub content: String,
    pub is_done: bool,
    /// Unix seconds; doubles as the listing sort key.
    pub created_time: i64,
    /// Unix seconds; the store expires the item once this passes.
    pub ttl: i64,
}
