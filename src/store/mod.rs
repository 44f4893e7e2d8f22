//! Store access layer: one key-value table holding tasks.
//!
//! `task_id` is the primary key; `user_id` + `created_time` form a secondary
//! index used for listing a user's tasks in recency order. The store owns
//! durability, indexing, and ttl-based expiry.

mod dynamo;
mod memory;

pub use dynamo::DynamoStore;
pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::errors::Result;
use crate::routes::tasks::model::Task;

#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Inserts or fully overwrites an item. No precondition check.
    async fn put(&self, task: &Task) -> Result<()>;

    /// Point lookup by primary key. Absent is `None`, not an error.
    async fn get_by_id(&self, task_id: &str) -> Result<Option<Task>>;

    /// Secondary-index scan over one user's tasks, ordered by `created_time`.
    async fn query_by_user(&self, user_id: &str, limit: i32, descending: bool)
        -> Result<Vec<Task>>;

    /// Partial update of `content` and `is_done`. The item must already
    /// exist; a nonexistent key is `NotFound` rather than a silent upsert.
    async fn update_fields(&self, task_id: &str, content: &str, is_done: bool) -> Result<()>;

    /// Removes the item if present. Idempotent.
    async fn delete(&self, task_id: &str) -> Result<()>;
}
