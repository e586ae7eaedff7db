//! Test utilities for integration testing.

use crate::config::Config;
use axum_test::TestServer;
use sqlx::SqlitePool;

/// Configuration for tests: ephemeral port, defaults everywhere else.
/// The database comes from the pool handed in by `#[sqlx::test]`, so the
/// configured connection string is never used.
pub fn create_test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        ..Default::default()
    }
}

pub async fn create_test_app(pool: SqlitePool) -> TestServer {
    let config = create_test_config();

    let app = crate::Application::new_with_pool(config, Some(pool))
        .await
        .expect("Failed to create application");

    app.into_test_server()
}
