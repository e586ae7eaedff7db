//! API layer for HTTP request handling and data models.
//!
//! This module contains the REST API implementation, organized into:
//!
//! - **[`handlers`]**: Axum route handlers for all endpoints
//! - **[`models`]**: Request/response data structures for API communication
//!
//! # API Structure
//!
//! - **Greetings** (`/`, `/home`): Fixed JSON payloads
//! - **Todos** (`/todos/*`): CRUD operations over the todo entity
//! - **Todos page** (`/todos_list/`, `/static/*`): Embedded HTML listing page
//!
//! # OpenAPI Documentation
//!
//! All endpoints are documented with OpenAPI annotations using `utoipa`.
//! API documentation is available at `/docs` when the server is running.

pub mod handlers;
pub mod models;
