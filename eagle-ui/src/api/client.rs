//! Dataset Client
//!
//! Fetches the static `student_data.json` document the pages run on.

use eagle_results::dataset::{Dataset, LoadError};
use gloo_net::http::Request;

/// Where the dataset is served from
pub const DATASET_URL: &str = "/student_data.json";

/// Fetch and validate the dataset
///
/// Network failures, non-success statuses and malformed documents all come
/// back as a [`LoadError`].
pub async fn fetch_dataset() -> Result<Dataset, LoadError> {
    let response = Request::get(DATASET_URL)
        .send()
        .await
        .map_err(|e| LoadError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    let bytes = response
        .binary()
        .await
        .map_err(|e| LoadError::Request(e.to_string()))?;

    Dataset::from_json(&bytes)
}
