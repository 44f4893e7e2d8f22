use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use super::TaskStore;
use crate::errors::{ApiError, Result};
use crate::routes::tasks::model::Task;

/// Global secondary index: partition key `user_id`, sort key `created_time`.
const USER_INDEX: &str = "user-index";

/// DynamoDB-backed task store. Holds one long-lived client shared by all
/// requests; the connection itself is stateless HTTP.
pub struct DynamoStore {
    client: Client,
    table_name: String,
}

impl DynamoStore {
    pub fn new(client: Client, table_name: String) -> Self {
        Self { client, table_name }
    }
}

#[async_trait]
impl TaskStore for DynamoStore {
    async fn put(&self, task: &Task) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(to_item(task)))
            .send()
            .await
            .map_err(|err| ApiError::Store(DisplayErrorContext(err).to_string()))?;

        Ok(())
    }

    async fn get_by_id(&self, task_id: &str) -> Result<Option<Task>> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("task_id", AttributeValue::S(task_id.to_string()))
            .send()
            .await
            .map_err(|err| ApiError::Store(DisplayErrorContext(err).to_string()))?;

        output.item().map(from_item).transpose()
    }

    async fn query_by_user(
        &self,
        user_id: &str,
        limit: i32,
        descending: bool,
    ) -> Result<Vec<Task>> {
        let output = self
            .client
            .query()
            .table_name(&self.table_name)
            .index_name(USER_INDEX)
            .key_condition_expression("user_id = :user_id")
            .expression_attribute_values(":user_id", AttributeValue::S(user_id.to_string()))
            .scan_index_forward(!descending)
            .limit(limit)
            .send()
            .await
            .map_err(|err| ApiError::Store(DisplayErrorContext(err).to_string()))?;

        output.items().iter().map(from_item).collect()
    }

    async fn update_fields(&self, task_id: &str, content: &str, is_done: bool) -> Result<()> {
        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key("task_id", AttributeValue::S(task_id.to_string()))
            .update_expression("SET content = :content, is_done = :is_done")
            // Without this condition a partial item would be silently created
            // for an unknown key.
            .condition_expression("attribute_exists(task_id)")
            .expression_attribute_values(":content", AttributeValue::S(content.to_string()))
            .expression_attribute_values(":is_done", AttributeValue::Bool(is_done))
            .send()
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(err) => {
                let err = err.into_service_error();
                if err.is_conditional_check_failed_exception() {
                    Err(ApiError::NotFound(format!("Task {task_id} not found")))
                } else {
                    Err(ApiError::Store(DisplayErrorContext(err).to_string()))
                }
            }
        }
    }

    async fn delete(&self, task_id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("task_id", AttributeValue::S(task_id.to_string()))
            .send()
            .await
            .map_err(|err| ApiError::Store(DisplayErrorContext(err).to_string()))?;

        Ok(())
    }
}

// ITEM MARSHALLING

fn to_item(task: &Task) -> HashMap<String, AttributeValue> {
    HashMap::from([
        ("task_id".into(), AttributeValue::S(task.task_id.clone())),
        ("user_id".into(), AttributeValue::S(task.user_id.clone())),
        ("content".into(), AttributeValue::S(task.content.clone())),
        ("is_done".into(), AttributeValue::Bool(task.is_done)),
        (
            "created_time".into(),
            AttributeValue::N(task.created_time.to_string()),
        ),
        ("ttl".into(), AttributeValue::N(task.ttl.to_string())),
    ])
}

fn from_item(item: &HashMap<String, AttributeValue>) -> Result<Task> {
    Ok(Task {
        task_id: string_attr(item, "task_id")?,
        user_id: string_attr(item, "user_id")?,
        content: string_attr(item, "content")?,
        is_done: *item
            .get("is_done")
            .and_then(|value| value.as_bool().ok())
            .unwrap_or(&false),
        created_time: number_attr(item, "created_time")?,
        ttl: number_attr(item, "ttl")?,
    })
}

fn string_attr(item: &HashMap<String, AttributeValue>, name: &str) -> Result<String> {
    item.get(name)
        .and_then(|value| value.as_s().ok())
        .cloned()
        .ok_or_else(|| ApiError::Store(format!("item missing string attribute {name}")))
}

fn number_attr(item: &HashMap<String, AttributeValue>, name: &str) -> Result<i64> {
    item.get(name)
        .and_then(|value| value.as_n().ok())
        .and_then(|raw| raw.parse().ok())
        .ok_or_else(|| ApiError::Store(format!("item missing numeric attribute {name}")))
}
