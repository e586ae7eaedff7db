//! API request/response models for todos.

use crate::db::models::todos::{TodoCreateDBRequest, TodoDBResponse, TodoUpdateDBRequest};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating a new todo. Both fields are required.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TodoCreate {
    /// Short label for the task
    #[schema(example = "Buy groceries")]
    pub title: String,
    /// What needs doing
    #[schema(example = "Milk, eggs, flour")]
    pub description: String,
}

/// Request body for updating an existing todo. This is a full replacement:
/// both fields are required and overwrite the stored values.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TodoUpdate {
    /// New title
    #[schema(example = "Buy groceries")]
    pub title: String,
    /// New description
    #[schema(example = "Milk, eggs, flour, butter")]
    pub description: String,
}

/// Full todo details returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TodoResponse {
    /// Unique identifier, assigned by the store on creation
    pub id: i64,
    /// Short label for the task
    pub title: String,
    /// What needs doing
    pub description: String,
}

impl From<TodoDBResponse> for TodoResponse {
    fn from(db: TodoDBResponse) -> Self {
        Self {
            id: db.id,
            title: db.title,
            description: db.description,
        }
    }
}

impl From<TodoCreate> for TodoCreateDBRequest {
    fn from(create: TodoCreate) -> Self {
        Self {
            title: create.title,
            description: create.description,
        }
    }
}

impl From<TodoUpdate> for TodoUpdateDBRequest {
    fn from(update: TodoUpdate) -> Self {
        Self {
            title: update.title,
            description: update.description,
        }
    }
}
