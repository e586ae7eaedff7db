//! HTTP handlers for todo CRUD operations.

use crate::api::models::todos::{TodoCreate, TodoResponse, TodoUpdate};
use crate::db::handlers::{Repository, Todos};
use crate::db::models::todos::{TodoCreateDBRequest, TodoUpdateDBRequest};
use crate::errors::{Error, Result};
use crate::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

#[utoipa::path(
    post,
    path = "/todos/",
    tag = "todos",
    summary = "Create todo",
    request_body = TodoCreate,
    responses(
        (status = 201, description = "Todo created successfully", body = TodoResponse),
        (status = 422, description = "Body missing a required field or wrong-typed"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_todo(State(state): State<AppState>, Json(create): Json<TodoCreate>) -> Result<(StatusCode, Json<TodoResponse>)> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Todos::new(&mut conn);
    let request = TodoCreateDBRequest::from(create);

    let todo = repo.create(&request).await?;
    Ok((StatusCode::CREATED, Json(TodoResponse::from(todo))))
}

#[utoipa::path(
    get,
    path = "/todos/",
    tag = "todos",
    summary = "List todos",
    responses(
        (status = 200, description = "Every stored todo (possibly empty)", body = Vec<TodoResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<TodoResponse>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Todos::new(&mut conn);

    let todos = repo.list().await?;
    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/todos/{id}",
    tag = "todos",
    summary = "Get todo",
    responses(
        (status = 200, description = "Todo details", body = TodoResponse),
        (status = 404, description = "Todo not found"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = i64, Path, description = "Todo ID")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_todo(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<TodoResponse>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Todos::new(&mut conn);

    match repo.get_by_id(id).await? {
        Some(todo) => Ok(Json(TodoResponse::from(todo))),
        None => Err(Error::NotFound {
            resource: "Todo".to_string(),
        }),
    }
}

#[utoipa::path(
    put,
    path = "/todos/{id}",
    tag = "todos",
    summary = "Update todo",
    request_body = TodoUpdate,
    responses(
        (status = 200, description = "Todo updated successfully", body = TodoResponse),
        (status = 404, description = "Todo not found"),
        (status = 422, description = "Body missing a required field or wrong-typed"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = i64, Path, description = "Todo ID")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(update): Json<TodoUpdate>,
) -> Result<Json<TodoResponse>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Todos::new(&mut conn);
    let request = TodoUpdateDBRequest::from(update);

    match repo.update(id, &request).await? {
        Some(todo) => Ok(Json(TodoResponse::from(todo))),
        None => Err(Error::NotFound {
            resource: "Todo".to_string(),
        }),
    }
}

#[utoipa::path(
    delete,
    path = "/todos/{id}",
    tag = "todos",
    summary = "Delete todo",
    responses(
        (status = 200, description = "Todo deleted; body is the pre-deletion snapshot", body = TodoResponse),
        (status = 404, description = "Todo not found"),
        (status = 500, description = "Internal server error")
    ),
    params(
        ("id" = i64, Path, description = "Todo ID")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_todo(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<TodoResponse>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Todos::new(&mut conn);

    match repo.delete(id).await? {
        Some(todo) => Ok(Json(TodoResponse::from(todo))),
        None => Err(Error::NotFound {
            resource: "Todo".to_string(),
        }),
    }
}
