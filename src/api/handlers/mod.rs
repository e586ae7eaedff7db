//! HTTP request handlers for all endpoints.
//!
//! Each handler is responsible for:
//! - Request validation and deserialization (via axum extractors)
//! - Business logic execution via database repositories
//! - Response serialization and status code mapping
//!
//! # Handler Modules
//!
//! - [`greeting`]: Fixed greeting payloads at `/` and `/home`
//! - [`todos`]: CRUD operations over the todo entity
//! - [`static_assets`]: The embedded todos listing page and its assets
//!
//! # Error Handling
//!
//! Handlers return [`crate::errors::Error`] which automatically converts to
//! appropriate HTTP status codes and `{"detail": …}` JSON error responses.

pub mod greeting;
pub mod static_assets;
pub mod todos;
