//! Database layer for data persistence and access.
//!
//! This module implements the data access layer using SQLx with SQLite.
//! It follows the Repository pattern to provide clean abstractions over
//! database operations.
//!
//! # Modules
//!
//! - [`handlers`]: Repository implementations for CRUD operations
//! - [`models`]: Database record structures matching table schemas
//! - [`errors`]: Database-specific error types
//!
//! # Repository Pattern
//!
//! The [`handlers`] module provides a repository trait and an implementation
//! per database table. Repositories encapsulate all database access for a
//! specific entity type and borrow a connection for the duration of a
//! request:
//!
//! ```ignore
//! use todo_api::db::handlers::{Repository, Todos};
//!
//! async fn example(pool: &sqlx::SqlitePool) -> Result<(), Box<dyn std::error::Error>> {
//!     let mut conn = pool.acquire().await?;
//!     let mut repo = Todos::new(&mut conn);
//!
//!     if let Some(todo) = repo.get_by_id(1).await? {
//!         println!("Found todo: {}", todo.title);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Migrations
//!
//! Database migrations are managed by SQLx and located in the `migrations/`
//! directory. The [`crate::migrator`] function provides access to the
//! migrator and is run on startup.

pub mod errors;
pub mod handlers;
pub mod models;
