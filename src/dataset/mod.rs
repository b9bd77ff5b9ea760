//! Student Dataset
//!
//! The single static document the portal runs on:
//!
//! - **types**: `Student`, `ExamDescriptor`, `Dataset`
//! - **error**: `LoadError`
//! - **loader**: Sources and the `DatasetLoader` (native builds only)
//!
//! # Example
//!
//! ```rust,no_run
//! use eagle_results::dataset::{source_for, DatasetLoader};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let loader = DatasetLoader::new(source_for("data/student_data.json"));
//!     let dataset = loader.load().await?;
//!
//!     if let Some(student) = dataset.find_student(7) {
//!         println!("{} scored {}", student.name, student.score);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod error;
#[cfg(feature = "server")]
pub mod loader;
pub mod types;

pub use error::{LoadError, LoadResult};
#[cfg(feature = "server")]
pub use loader::{
    source_for, DatasetLoader, DatasetSource, FileSource, HttpSource, LoadPolicy, StaticSource,
};
pub use types::{display_number, Dataset, ExamDescriptor, Student, StudentId};
