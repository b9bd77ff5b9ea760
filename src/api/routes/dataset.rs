//! Dataset Route
//!
//! - GET /student_data.json - The validated dataset, as the web UI fetches it
//!
//! The document includes plaintext passwords because the web UI matches
//! credentials itself. Set `server.serve_dataset = false` to hide it.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::dataset::Dataset;

/// GET /student_data.json
pub async fn student_data(State(state): State<Arc<AppState>>) -> ApiResult<Json<Dataset>> {
    if !state.config.serve_dataset {
        return Err(ApiError::NotFound("student_data.json".to_string()));
    }

    let dataset = state.loader.load().await?;
    Ok(Json(Dataset::clone(&dataset)))
}
