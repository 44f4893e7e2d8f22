use axum::{
    routing::{delete, get, put},
    Json, Router,
};
use serde_json::{json, Value};

mod health;
pub mod tasks;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health::health))
        .route("/create-task", put(tasks::routes::create))
        .route("/get-task/{task_id}", get(tasks::routes::get))
        .route("/list-tasks/{user_id}", get(tasks::routes::list))
        .route("/update-task", put(tasks::routes::update))
        .route("/delete-task/{task_id}", delete(tasks::routes::delete))
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Hello World from Todo API" }))
}
