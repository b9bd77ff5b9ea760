//! Results Route
//!
//! - GET /api/v1/results/:student_id - Derived results view for one student
//!
//! The id segment follows the client route rules: non-numeric ids are
//! treated as not found.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::results::{resolve_results, ResultsView};
use crate::router::RouteStudentId;

/// GET /api/v1/results/:student_id
pub async fn get_results(
    State(state): State<Arc<AppState>>,
    Path(student_id): Path<String>,
) -> ApiResult<Json<ResultsView>> {
    let id = RouteStudentId::parse(&student_id);

    let dataset = state.loader.load().await?;
    let view = resolve_results(&dataset, id)?;

    Ok(Json(view))
}
