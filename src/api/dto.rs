//! Data Transfer Objects
//!
//! Request and response bodies for the JSON API. The results endpoint
//! returns [`ResultsView`](crate::results::ResultsView) directly.

use serde::{Deserialize, Serialize};

use crate::dataset::StudentId;

// ============================================
// LOGIN DTOs
// ============================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// Full name, any letter case
    pub name: String,
    /// Exact password
    pub password: String,
}

/// Successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Matched student
    pub student_id: StudentId,
    /// Client route to navigate to
    pub redirect: String,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, unhealthy
    pub status: String,
    /// Dataset status: ok, error
    pub dataset: String,
    /// Where the dataset is read from
    pub dataset_source: String,
    /// Number of students, when the dataset loads
    #[serde(skip_serializing_if = "Option::is_none")]
    pub students: Option<usize>,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
    /// When this check ran (RFC 3339)
    pub checked_at: String,
}
