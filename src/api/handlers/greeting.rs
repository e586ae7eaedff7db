//! Fixed greeting payloads.

use axum::Json;
use serde_json::{Value, json};

#[utoipa::path(
    get,
    path = "/",
    tag = "greetings",
    summary = "Root greeting",
    responses(
        (status = 200, description = "Fixed greeting payload")
    )
)]
#[tracing::instrument]
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Hello, World" }))
}

#[utoipa::path(
    get,
    path = "/home",
    tag = "greetings",
    summary = "Home greeting",
    responses(
        (status = 200, description = "Fixed greeting payload")
    )
)]
#[tracing::instrument]
pub async fn home() -> Json<Value> {
    Json(json!({ "message": "Home!" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, routing::get};
    use axum_test::TestServer;

    fn create_test_router() -> Router {
        Router::new().route("/", get(root)).route("/home", get(home))
    }

    #[tokio::test]
    async fn test_root_greeting() {
        let server = TestServer::new(create_test_router()).unwrap();

        let response = server.get("/").await;

        response.assert_status_ok();
        response.assert_json(&serde_json::json!({ "message": "Hello, World" }));
    }

    #[tokio::test]
    async fn test_home_greeting() {
        let server = TestServer::new(create_test_router()).unwrap();

        let response = server.get("/home").await;

        response.assert_status_ok();
        response.assert_json(&serde_json::json!({ "message": "Home!" }));
    }
}
