use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;

use super::dto::{
    CreateTaskResponse, DeleteTaskResponse, ListTasksResponse, PutTaskRequest, UpdateTaskResponse,
};
use super::model::Task;
use super::service;
use crate::errors::{ApiError, Result};
use crate::state::AppState;

// Body extraction is handled here rather than by axum's default rejection so
// that malformed JSON and schema violations both come back as a 400 with the
// shared {"detail": ...} shape.
fn parse_body(
    payload: std::result::Result<Json<PutTaskRequest>, JsonRejection>,
) -> Result<PutTaskRequest> {
    let Json(body) = payload.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    Ok(body)
}

pub async fn create(
    State(state): State<AppState>,
    payload: std::result::Result<Json<PutTaskRequest>, JsonRejection>,
) -> Result<Json<CreateTaskResponse>> {
    let body = parse_body(payload)?;
    let task = service::create_task(state.store.as_ref(), body).await?;
    Ok(Json(CreateTaskResponse { task }))
}

pub async fn get(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<Json<Task>> {
    let task = service::get_task(state.store.as_ref(), &task_id).await?;
    Ok(Json(task))
}

pub async fn list(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ListTasksResponse>> {
    let tasks = service::list_tasks(state.store.as_ref(), &user_id).await?;
    Ok(Json(ListTasksResponse { tasks }))
}

pub async fn update(
    State(state): State<AppState>,
    payload: std::result::Result<Json<PutTaskRequest>, JsonRejection>,
) -> Result<Json<UpdateTaskResponse>> {
    let body = parse_body(payload)?;
    let updated_task_id = service::update_task(state.store.as_ref(), body).await?;
    Ok(Json(UpdateTaskResponse { updated_task_id }))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<Json<DeleteTaskResponse>> {
    let deleted_task_id = service::delete_task(state.store.as_ref(), &task_id).await?;
    Ok(Json(DeleteTaskResponse { deleted_task_id }))
}
