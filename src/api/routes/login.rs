//! Login Route
//!
//! - POST /api/v1/login - Match credentials server-side
//!
//! Same rules as the login page: case-insensitive name, exact password.
//! No pacing delays are applied here.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{LoginRequest, LoginResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::login::{authenticate, Credentials};
use crate::router::Route;

/// POST /api/v1/login
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    validate_login_request(&req)?;

    let dataset = state.loader.load().await?;
    let credentials = Credentials::new(req.name, req.password);
    let student = authenticate(&dataset.students, &credentials)?;

    tracing::info!(student_id = student.id, "Login succeeded");

    Ok(Json(LoginResponse {
        student_id: student.id,
        redirect: Route::results(student.id).path(),
    }))
}

/// Both fields are required, like the form inputs
fn validate_login_request(req: &LoginRequest) -> ApiResult<()> {
    if req.name.is_empty() {
        return Err(ApiError::Validation("Name is required".to_string()));
    }

    if req.password.is_empty() {
        return Err(ApiError::Validation("Password is required".to_string()));
    }

    Ok(())
}
