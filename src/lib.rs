//! # Eagle Results
//!
//! Exam results portal for the Eagle Series. Students sign in with their
//! full name and password and see their score, grade, remarks and
//! downloadable answer sheets, all derived from one static dataset.
//!
//! ## Modules
//!
//! - [`dataset`]: The `student_data.json` model and its loader
//! - [`login`]: Credential matching and the login state machine
//! - [`results`]: Grade tiers, the derived results view, celebration
//! - [`router`]: Client routes and the results id segment
//! - [`api`]: HTTP server with Axum (native builds)
//! - [`config`]: TOML configuration with environment overrides (native builds)
//!
//! The core modules build without the `server` feature so the WASM web UI
//! can share them.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use eagle_results::dataset::{source_for, DatasetLoader};
//! use eagle_results::login::{authenticate, Credentials};
//! use eagle_results::results::ResultsView;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let loader = DatasetLoader::new(source_for("data/student_data.json"));
//!     let dataset = loader.load().await?;
//!
//!     let credentials = Credentials::new("lina samir", "p1");
//!     let student = authenticate(&dataset.students, &credentials)?;
//!
//!     let view = ResultsView::build(student, &dataset.exam);
//!     println!("{} - {} ({})", view.student_name, view.score_label, view.badge.text());
//!
//!     Ok(())
//! }
//! ```

pub mod dataset;
pub mod login;
pub mod results;
pub mod router;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod telemetry;

pub use dataset::{Dataset, ExamDescriptor, LoadError, Student, StudentId};
pub use login::{AuthError, Credentials, LoginFlow, LoginState};
pub use results::{GradeTier, ResultsState, ResultsView};
pub use router::{Route, RouteStudentId};
