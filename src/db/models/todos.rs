//! Database models for todos.

use serde::{Deserialize, Serialize};

/// Data required to insert a new todo row. The id is assigned by the store.
#[derive(Debug, Clone)]
pub struct TodoCreateDBRequest {
    pub title: String,
    pub description: String,
}

/// Full replacement of a todo's mutable columns. The id is immutable.
#[derive(Debug, Clone)]
pub struct TodoUpdateDBRequest {
    pub title: String,
    pub description: String,
}

/// A persisted todo as returned by repository operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoDBResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
}
