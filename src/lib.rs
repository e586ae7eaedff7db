//! # todo-api: CRUD over todos
//!
//! `todo-api` is a small HTTP/JSON service exposing create/read/update/delete
//! operations over a single "todo" entity backed by a relational table, plus
//! a couple of greeting routes and a static HTML page that lists todos.
//!
//! ## Architecture
//!
//! The application is built on [Axum](https://github.com/tokio-rs/axum) for
//! the HTTP layer and uses SQLite (via SQLx) for persistence.
//!
//! The **API layer** ([`api`]) maps HTTP verbs and paths onto persistence
//! operations: request bodies are shape-validated by the extractors, absence
//! becomes 404, and successful operations return the full entity. The
//! **database layer** ([`db`]) uses the repository pattern: the todo table
//! has a repository handling its queries and mutations, returning explicit
//! `Option`s for missing rows rather than errors.
//!
//! Each request acquires a pooled connection, performs a single-row
//! statement, and releases the connection on every exit path. There is no
//! cross-request coordination; concurrent updates to the same id are
//! last-write-wins under the store's own serialization.
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use todo_api::{Application, Config, telemetry};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Parse CLI arguments and load configuration
//!     let args = todo_api::config::Args::parse();
//!     let config = Config::load(&args)?;
//!
//!     // Initialize structured logging
//!     telemetry::init_telemetry()?;
//!
//!     // Create and start the application
//!     let app = Application::new(config).await?;
//!
//!     // Run with graceful shutdown on Ctrl+C
//!     app.serve(async {
//!         tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
//!     })
//!     .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! See the [`config`] module for configuration options.

pub mod api;
pub mod config;
pub mod db;
pub mod errors;
mod openapi;
mod static_assets;
pub mod telemetry;

#[cfg(test)]
pub mod test_utils;

use crate::config::CorsOrigin;
use axum::http::HeaderValue;
use axum::{Router, http, routing::get};
pub use config::Config;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, debug, info, instrument};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

/// Application state shared across all request handlers.
///
/// Holds the shared resources handlers need: the database connection pool
/// and the loaded configuration. Initialized once at startup and injected
/// into handlers via axum's `State` extractor, never accessed as an ambient
/// global.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Config,
}

/// Get the todo-api database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

/// Connect the pool and run migrations
async fn setup_database(config: &Config) -> anyhow::Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;

    migrator().run(&pool).await?;

    Ok(pool)
}

/// Create CORS layer from configuration
fn create_cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let has_wildcard = config.cors.allowed_origins.iter().any(|origin| matches!(origin, CorsOrigin::Wildcard));
    if has_wildcard && config.cors.allow_credentials {
        anyhow::bail!("CORS cannot use wildcard origin '*' with allow_credentials=true. Specify explicit origins.");
    }

    // AllowOrigin::list refuses a literal `*`, so the wildcard gets the Any origin
    let allow_origin: AllowOrigin = if has_wildcard {
        Any.into()
    } else {
        config
            .cors
            .allowed_origins
            .iter()
            .map(|origin| match origin {
                CorsOrigin::Wildcard => unreachable!(),
                CorsOrigin::Url(url) => url.as_str().parse::<HeaderValue>(),
            })
            .collect::<Result<Vec<_>, _>>()?
            .into()
    };

    let mut cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_credentials(config.cors.allow_credentials)
        .allow_methods([http::Method::GET, http::Method::POST, http::Method::PUT, http::Method::DELETE])
        .allow_headers([http::header::CONTENT_TYPE]);

    if let Some(max_age) = config.cors.max_age {
        cors = cors.max_age(std::time::Duration::from_secs(max_age));
    }

    Ok(cors)
}

/// Build the application router with all endpoints and middleware.
///
/// This function constructs the complete Axum router with:
/// - Greeting routes (`/`, `/home`)
/// - Todo CRUD routes (`/todos/`, `/todos/{id}`)
/// - The static todos listing page (`/todos_list/`, `/static/{*file}`)
/// - OpenAPI documentation at `/docs`
/// - CORS configuration
/// - Tracing middleware
///
/// # Errors
///
/// Returns an error if the CORS configuration is invalid.
#[instrument(skip_all)]
pub fn build_router(state: AppState) -> anyhow::Result<Router> {
    let cors_layer = create_cors_layer(&state.config)?;

    let router = Router::new()
        .route("/", get(api::handlers::greeting::root))
        .route("/home", get(api::handlers::greeting::home))
        .route("/healthz", get(|| async { "OK" }))
        .route(
            "/todos/",
            get(api::handlers::todos::list_todos).post(api::handlers::todos::create_todo),
        )
        .route(
            "/todos/{id}",
            get(api::handlers::todos::get_todo)
                .put(api::handlers::todos::update_todo)
                .delete(api::handlers::todos::delete_todo),
        )
        .route("/todos_list/", get(api::handlers::static_assets::todos_page))
        .route("/static/{*file}", get(api::handlers::static_assets::serve_static_file))
        .with_state(state)
        .merge(Scalar::with_url("/docs", openapi::ApiDoc::openapi()))
        .layer(cors_layer)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );

    Ok(router)
}

/// Main application struct that owns all resources and lifecycle.
///
/// # Lifecycle
///
/// 1. **Create**: [`Application::new`] connects the pool, runs migrations,
///    and builds the router
/// 2. **Serve**: [`Application::serve`] binds a TCP port and handles
///    requests until the shutdown future resolves
/// 3. **Shutdown**: in-flight requests drain, then the pool is closed
pub struct Application {
    router: Router,
    config: Config,
    pool: SqlitePool,
}

impl Application {
    /// Create a new application instance with all resources initialized
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        Self::new_with_pool(config, None).await
    }

    /// Create an application over an existing pool (used by tests, where
    /// `#[sqlx::test]` provisions the database)
    pub async fn new_with_pool(config: Config, pool: Option<SqlitePool>) -> anyhow::Result<Self> {
        debug!("Starting todo service with configuration: {:#?}", config);

        let pool = match pool {
            // Migrations are idempotent, so running them on a provisioned
            // pool is harmless
            Some(pool) => {
                migrator().run(&pool).await?;
                pool
            }
            None => setup_database(&config).await?,
        };

        let state = AppState {
            db: pool.clone(),
            config: config.clone(),
        };
        let router = build_router(state)?;

        Ok(Self { router, config, pool })
    }

    /// Convert application into a test server (for tests)
    #[cfg(test)]
    pub fn into_test_server(self) -> axum_test::TestServer {
        axum_test::TestServer::new(self.router).expect("Failed to create test server")
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!(
            "Todo service listening on http://{}, docs at http://localhost:{}/docs",
            bind_addr, self.config.port
        );

        // Run the server with graceful shutdown
        axum::serve(listener, self.router).with_graceful_shutdown(shutdown).await?;

        // Close database connections
        info!("Closing database connections...");
        self.pool.close().await;

        Ok(())
    }
}
