//! OpenAPI documentation configuration.
//!
//! The generated document is served through a Scalar viewer at `/docs`.

use crate::api;
use crate::api::models::todos::{TodoCreate, TodoResponse, TodoUpdate};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "todo-api",
        description = "CRUD operations over todos, plus greeting routes and a static listing page"
    ),
    paths(
        api::handlers::greeting::root,
        api::handlers::greeting::home,
        api::handlers::todos::create_todo,
        api::handlers::todos::list_todos,
        api::handlers::todos::get_todo,
        api::handlers::todos::update_todo,
        api::handlers::todos::delete_todo,
    ),
    components(schemas(TodoCreate, TodoUpdate, TodoResponse))
)]
pub struct ApiDoc;
