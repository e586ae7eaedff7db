//! Telemetry initialization (tracing, fmt subscriber).
//!
//! Log verbosity is controlled through the standard `RUST_LOG` environment
//! variable and defaults to `info`:
//!
//! ```bash
//! RUST_LOG=todo_api=debug,sqlx=warn todo-api
//! ```

use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize tracing with console output
///
/// This function sets up tracing-subscriber with an env-filter layer and a
/// fmt layer. Calling it twice is an error; tests that want log output use
/// `test-log` instead.
pub fn init_telemetry() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    info!("Telemetry initialized");

    Ok(())
}
