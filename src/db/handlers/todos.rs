//! Database repository for todos.

use crate::db::{
    errors::Result,
    handlers::repository::Repository,
    models::todos::{TodoCreateDBRequest, TodoDBResponse, TodoUpdateDBRequest},
};
use sqlx::{FromRow, SqliteConnection};
use tracing::instrument;

// Database entity model
#[derive(Debug, Clone, FromRow)]
struct Todo {
    pub id: i64,
    pub title: String,
    pub description: String,
}

impl From<Todo> for TodoDBResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            title: todo.title,
            description: todo.description,
        }
    }
}

pub struct Todos<'c> {
    db: &'c mut SqliteConnection,
}

impl<'c> Todos<'c> {
    pub fn new(db: &'c mut SqliteConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl<'c> Repository for Todos<'c> {
    type CreateRequest = TodoCreateDBRequest;
    type UpdateRequest = TodoUpdateDBRequest;
    type Response = TodoDBResponse;
    type Id = i64;

    #[instrument(skip(self, request), fields(title = %request.title), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let todo = sqlx::query_as::<_, Todo>(
            "INSERT INTO todos (title, description) VALUES (?, ?) RETURNING id, title, description",
        )
        .bind(&request.title)
        .bind(&request.description)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(TodoDBResponse::from(todo))
    }

    #[instrument(skip(self), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let todo = sqlx::query_as::<_, Todo>("SELECT id, title, description FROM todos WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(todo.map(TodoDBResponse::from))
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<Self::Response>> {
        let todos = sqlx::query_as::<_, Todo>("SELECT id, title, description FROM todos")
            .fetch_all(&mut *self.db)
            .await?;

        Ok(todos.into_iter().map(TodoDBResponse::from).collect())
    }

    #[instrument(skip(self, request), err)]
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Option<Self::Response>> {
        // Single statement: no write happens when the id is absent
        let todo = sqlx::query_as::<_, Todo>(
            "UPDATE todos SET title = ?, description = ? WHERE id = ? RETURNING id, title, description",
        )
        .bind(&request.title)
        .bind(&request.description)
        .bind(id)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(todo.map(TodoDBResponse::from))
    }

    #[instrument(skip(self), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        // RETURNING hands back the pre-deletion snapshot atomically
        let todo = sqlx::query_as::<_, Todo>("DELETE FROM todos WHERE id = ? RETURNING id, title, description")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(todo.map(TodoDBResponse::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::SqlitePool;

    fn create_request(title: &str, description: &str) -> TodoCreateDBRequest {
        TodoCreateDBRequest {
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_assigns_monotonic_ids(pool: SqlitePool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Todos::new(&mut conn);

        let first = repo.create(&create_request("first", "a")).await.expect("Failed to create todo");
        let second = repo.create(&create_request("second", "b")).await.expect("Failed to create todo");

        assert_eq!(first.title, "first");
        assert_eq!(first.description, "a");
        assert!(second.id > first.id);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_then_get_round_trip(pool: SqlitePool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Todos::new(&mut conn);

        let created = repo
            .create(&create_request("groceries", "milk and eggs"))
            .await
            .expect("Failed to create todo");

        let fetched = repo
            .get_by_id(created.id)
            .await
            .expect("Failed to get todo")
            .expect("Todo should exist");

        assert_eq!(fetched, created);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_get_missing_returns_none(pool: SqlitePool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Todos::new(&mut conn);

        let missing = repo.get_by_id(9999).await.expect("Failed to query todo");
        assert!(missing.is_none());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_list_empty_store(pool: SqlitePool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Todos::new(&mut conn);

        let todos = repo.list().await.expect("Failed to list todos");
        assert!(todos.is_empty());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_list_returns_all_rows(pool: SqlitePool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Todos::new(&mut conn);

        for i in 0..3 {
            repo.create(&create_request(&format!("todo {i}"), "body"))
                .await
                .expect("Failed to create todo");
        }

        let todos = repo.list().await.expect("Failed to list todos");
        assert_eq!(todos.len(), 3);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_update_overwrites_and_preserves_id(pool: SqlitePool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Todos::new(&mut conn);

        let created = repo.create(&create_request("before", "old")).await.expect("Failed to create todo");

        let update = TodoUpdateDBRequest {
            title: "after".to_string(),
            description: "new".to_string(),
        };
        let updated = repo
            .update(created.id, &update)
            .await
            .expect("Failed to update todo")
            .expect("Todo should exist");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "after");
        assert_eq!(updated.description, "new");

        let fetched = repo
            .get_by_id(created.id)
            .await
            .expect("Failed to get todo")
            .expect("Todo should exist");
        assert_eq!(fetched, updated);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_update_missing_performs_no_write(pool: SqlitePool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Todos::new(&mut conn);

        let update = TodoUpdateDBRequest {
            title: "ghost".to_string(),
            description: "never lands".to_string(),
        };
        let result = repo.update(42, &update).await.expect("Failed to update todo");
        assert!(result.is_none());

        let todos = repo.list().await.expect("Failed to list todos");
        assert!(todos.is_empty());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_delete_returns_snapshot_then_none(pool: SqlitePool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Todos::new(&mut conn);

        let created = repo.create(&create_request("ephemeral", "soon gone")).await.expect("Failed to create todo");

        let deleted = repo
            .delete(created.id)
            .await
            .expect("Failed to delete todo")
            .expect("Todo should exist");
        assert_eq!(deleted, created);

        // Second delete finds nothing
        let second = repo.delete(created.id).await.expect("Failed to delete todo");
        assert!(second.is_none());

        let fetched = repo.get_by_id(created.id).await.expect("Failed to get todo");
        assert!(fetched.is_none());
    }
}
