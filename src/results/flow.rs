//! Results page state
//!
//! `Loading` until the dataset arrives, then either `Ready` with the derived
//! view or `Failed` with a page-level message and a way back to login.

use thiserror::Error;

use super::view::ResultsView;
use crate::dataset::{Dataset, LoadError, StudentId};
use crate::router::{Route, RouteStudentId};

/// Page message when the student is not in the dataset
pub const NOT_FOUND_MESSAGE: &str = "Student data not found";

/// Page message when the dataset could not be loaded
pub const RESULTS_LOAD_ERROR_MESSAGE: &str = "Error loading student data";

/// The route names a student the dataset does not have
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Student data not found")]
    NotFound(StudentId),

    /// Non-numeric route segment, treated as id 0 that matches nobody
    #[error("Student data not found")]
    MalformedId,
}

/// Why the results page shows an error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResultsError {
    /// Dataset fetch or parse failure, with the loader's detail
    #[error("Error loading student data")]
    Load(String),

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl From<&LoadError> for ResultsError {
    fn from(err: &LoadError) -> Self {
        ResultsError::Load(err.to_string())
    }
}

/// Find a student and derive their results view
pub fn resolve_results(dataset: &Dataset, id: RouteStudentId) -> Result<ResultsView, LookupError> {
    let id = match id {
        RouteStudentId::Parsed(id) => id,
        RouteStudentId::Malformed => return Err(LookupError::MalformedId),
    };

    dataset
        .find_student(id)
        .map(|student| ResultsView::build(student, &dataset.exam))
        .ok_or(LookupError::NotFound(id))
}

/// Current phase of the results page
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsState {
    Loading,
    Ready(Box<ResultsView>),
    Failed(ResultsError),
}

impl ResultsState {
    /// State once the dataset load has finished
    pub fn resolve(loaded: Result<&Dataset, &LoadError>, id: RouteStudentId) -> Self {
        let dataset = match loaded {
            Ok(dataset) => dataset,
            Err(e) => {
                tracing::warn!(error = %e, "Results page could not load student data");
                return ResultsState::Failed(e.into());
            }
        };

        match resolve_results(dataset, id) {
            Ok(view) => ResultsState::Ready(Box::new(view)),
            Err(e) => {
                tracing::info!(student_id = id.value(), "Results requested for unknown student");
                ResultsState::Failed(e.into())
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ResultsState::Loading)
    }

    pub fn view(&self) -> Option<&ResultsView> {
        match self {
            ResultsState::Ready(view) => Some(&**view),
            _ => None,
        }
    }

    /// Page-level error text
    pub fn error_message(&self) -> Option<String> {
        match self {
            ResultsState::Failed(e) => Some(e.to_string()),
            _ => None,
        }
    }

    /// Where the "Return to Login" and "Logout" controls lead
    pub fn back_route(&self) -> Route {
        Route::Login
    }
}
