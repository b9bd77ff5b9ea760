//! Eagle Results server
//!
//! Run with: cargo run --bin eagle-results [-- path/to/config.toml]
//!
//! # Configuration
//!
//! A TOML file (see `eagle-cli config`), found at the path given as the
//! first argument or in the default locations. Environment variables:
//! - `EAGLE_HOST`: Host to bind to (default: 0.0.0.0)
//! - `EAGLE_PORT`: Port to listen on (default: 8080)
//! - `EAGLE_DATASET`: Dataset file path or URL (default: ./data/student_data.json)
//! - `EAGLE_STATIC_DIR`: Built web UI (default: ./eagle-ui/dist)
//! - `EAGLE_LOG_LEVEL`, `EAGLE_LOG_FORMAT`: Logging (default: info, pretty)
//! - `RUST_LOG`: Overrides the log filter entirely

use eagle_results::api::{serve, AppState};
use eagle_results::config::Config;
use eagle_results::dataset::{source_for, DatasetLoader};
use eagle_results::telemetry;
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = Config::load_default(config_path.as_deref())?;

    telemetry::init(&config.logging);

    tracing::info!("Starting Eagle Results v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Dataset: {} ({:?})", config.dataset.location, config.dataset.policy);
    tracing::info!("Static files: {}", config.server.static_dir);

    let loader = Arc::new(DatasetLoader::with_policy(
        source_for(&config.dataset.location),
        config.dataset.policy,
    ));

    // Pages load the dataset on demand, so a bad dataset only degrades them
    match loader.load().await {
        Ok(dataset) => tracing::info!(
            exam = %dataset.exam.title,
            students = dataset.len(),
            "Dataset verified"
        ),
        Err(e) => tracing::warn!("Dataset not loadable at startup: {}", e),
    }

    if !config.server.serve_dataset {
        tracing::warn!("Raw dataset endpoint disabled, the web UI cannot sign students in; use POST /api/v1/login");
    }

    let state = AppState::new(loader, config.server.clone());
    serve(state, &config.server).await?;

    tracing::info!("Eagle Results stopped");
    Ok(())
}
