//! Repository implementations for CRUD operations.
//!
//! Each database table gets a repository struct that borrows a connection
//! and implements the [`Repository`] trait. Handlers construct a repository
//! per request from the shared pool.

pub mod repository;
pub mod todos;

pub use repository::Repository;
pub use todos::Todos;
