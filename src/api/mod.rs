//! Eagle Results HTTP server
//!
//! Serves the web UI, the dataset it fetches, and a small JSON API,
//! built with Axum.
//!
//! # Endpoints
//!
//! ## Dataset
//! - `GET /student_data.json` - The dataset document the web UI loads
//!
//! ## API
//! - `POST /api/v1/login` - Match a name and password
//! - `GET /api/v1/results/:student_id` - Results view for one student
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! ## Web UI
//! Any other path serves a file from `server.static_dir`, falling back to
//! `index.html` so the client router can handle `/results/:id` and `/404`.
//!
//! # Example
//!
//! ```rust,ignore
//! use eagle_results::api::{serve, AppState};
//! use eagle_results::config::ServerConfig;
//! use eagle_results::dataset::{source_for, DatasetLoader};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let loader = Arc::new(DatasetLoader::new(source_for("./data/student_data.json")));
//!     let config = ServerConfig::default();
//!
//!     let state = AppState::new(loader, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::ServerConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/login", post(routes::login::login))
        .route("/results/:student_id", get(routes::results::get_results))
        .fallback(|| async { ApiError::NotFound("endpoint".to_string()) });

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let static_dir = Path::new(&state.config.static_dir);
    let web_ui = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    let cors = cors_layer(&state.config.cors_origins);

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .route("/student_data.json", get(routes::dataset::student_data))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .fallback_service(web_ui)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// Permissive when no origins are configured
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}

/// Start the server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Eagle Results listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Eagle Results shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, DatasetLoader, ExamDescriptor, FileSource, Student};
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        response::Response,
    };
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    fn sample_dataset() -> Dataset {
        Dataset::new(
            ExamDescriptor {
                title: "Final Physics Exam".to_string(),
                total_marks: 100.0,
                pass_percentage: 50.0,
                model_answer_url: "https://example.com/model.pdf".to_string(),
                notes: vec!["Appeals close on Friday".to_string()],
            },
            vec![
                Student::new(7, "Lina Samir", "pass123", 92.0, 92.0, "A+")
                    .certificate(true)
                    .notes("Outstanding work")
                    .pdf_url("https://example.com/lina.pdf"),
                Student::new(12, "Omar Hassan", "omar2024", 41.0, 41.0, "F"),
            ],
        )
    }

    fn create_test_app_with(config: ServerConfig) -> Router {
        let loader = Arc::new(DatasetLoader::from_dataset(sample_dataset()));
        build_router(AppState::new(loader, config))
    }

    fn create_test_app() -> Router {
        create_test_app_with(ServerConfig::default())
    }

    async fn send_get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_json(app: Router, uri: &str, body: &str) -> Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let response = send_get(create_test_app(), "/health/live").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let response = send_get(create_test_app(), "/health/ready").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready_without_dataset() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("student_data.json");
        let loader = Arc::new(DatasetLoader::new(Arc::new(FileSource::new(missing))));
        let app = build_router(AppState::new(loader, ServerConfig::default()));

        let response = send_get(app, "/health/ready").await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_health_full() {
        let response = send_get(create_test_app(), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["students"], 2);
    }

    #[tokio::test]
    async fn test_login_then_results() {
        let response = post_json(
            create_test_app(),
            "/api/v1/login",
            r#"{"name": "lina samir", "password": "pass123"}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["student_id"], 7);
        assert_eq!(body["redirect"], "/results/7");

        let response = send_get(create_test_app(), "/api/v1/results/7").await;
        assert_eq!(response.status(), StatusCode::OK);

        let view = json_body(response).await;
        assert_eq!(view["student_name"], "Lina Samir");
        assert_eq!(view["score_label"], "92/100");
        assert_eq!(view["percentage_label"], "92%");
        assert_eq!(view["badge"]["color"], "#1e7e34");
        assert_eq!(view["certificate"], true);
        assert_eq!(view["celebrate"], true);
        assert_eq!(view["downloads"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_login_wrong_password_case() {
        let response = post_json(
            create_test_app(),
            "/api/v1/login",
            r#"{"name": "Lina Samir", "password": "PASS123"}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
        assert_eq!(
            body["error"]["message"],
            "Invalid name or password. Please try again."
        );
    }

    #[tokio::test]
    async fn test_login_empty_name() {
        let response = post_json(
            create_test_app(),
            "/api/v1/login",
            r#"{"name": "", "password": "pass123"}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_login_invalid_json() {
        let response = post_json(create_test_app(), "/api/v1/login", "not json").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_results_unknown_student() {
        let response = send_get(create_test_app(), "/api/v1/results/999").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = json_body(response).await;
        assert_eq!(body["error"]["message"], "Student data not found");
    }

    #[tokio::test]
    async fn test_results_malformed_id() {
        let response = send_get(create_test_app(), "/api/v1/results/abc").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_failing_student_has_no_celebration() {
        let response = send_get(create_test_app(), "/api/v1/results/12").await;
        assert_eq!(response.status(), StatusCode::OK);

        let view = json_body(response).await;
        assert_eq!(view["celebrate"], false);
        assert_eq!(view["certificate"], false);
        assert_eq!(view["badge"]["emoji"], "😢");
    }

    #[tokio::test]
    async fn test_student_data_served() {
        let response = send_get(create_test_app(), "/student_data.json").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["exam"]["total_marks"], 100.0);
        assert_eq!(body["students"][0]["pdfUrl"], "https://example.com/lina.pdf");
    }

    #[tokio::test]
    async fn test_student_data_hidden() {
        let config = ServerConfig {
            serve_dataset: false,
            ..ServerConfig::default()
        };

        let response = send_get(create_test_app_with(config), "/student_data.json").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_api_endpoint() {
        let response = send_get(create_test_app(), "/api/v1/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_client_routes_fall_back_to_index() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>eagle</html>").unwrap();

        let config = ServerConfig {
            static_dir: dir.path().to_string_lossy().into_owned(),
            ..ServerConfig::default()
        };

        let response = send_get(create_test_app_with(config), "/results/7").await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"<html>eagle</html>");
    }
}
