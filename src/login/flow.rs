//! Login state machine
//!
//! ```text
//! Idle ──submit──▶ Submitting ──match──▶ Success { student_id, redirect }
//!   ▲                  │
//!   └──── submit ◀── Failed(AuthError)
//! ```
//!
//! `Failed` keeps the typed values and accepts a new submission, which
//! clears the error. The flow performs no I/O and no waiting; drivers
//! apply [`LoginPacing`] between the steps.

use std::time::Duration;

use super::matching::{authenticate, AuthError, Credentials};
use crate::dataset::{LoadError, Student, StudentId};
use crate::router::Route;

/// Message shown when the dataset could not be loaded at mount
pub const LOAD_ERROR_MESSAGE: &str = "Error loading student data. Please try again later.";

/// UX pacing between login steps
///
/// Purely cosmetic. Zero durations skip the waits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginPacing {
    /// Wait between submission and matching
    pub submit_delay: Duration,
    /// Wait between a successful match and navigation
    pub redirect_delay: Duration,
}

impl Default for LoginPacing {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_millis(800),
            redirect_delay: Duration::from_millis(1000),
        }
    }
}

impl LoginPacing {
    /// No waiting at all
    pub fn none() -> Self {
        Self {
            submit_delay: Duration::ZERO,
            redirect_delay: Duration::ZERO,
        }
    }

    pub fn from_millis(submit_ms: u64, redirect_ms: u64) -> Self {
        Self {
            submit_delay: Duration::from_millis(submit_ms),
            redirect_delay: Duration::from_millis(redirect_ms),
        }
    }
}

/// Current phase of the login form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginState {
    Idle,
    Submitting,
    Success {
        student_id: StudentId,
        redirect: Route,
    },
    Failed(AuthError),
}

/// Login form state
#[derive(Debug, Clone)]
pub struct LoginFlow {
    credentials: Credentials,
    /// Values captured by the in-flight submission
    submitted: Option<Credentials>,
    state: LoginState,
    load_error: Option<String>,
}

impl Default for LoginFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginFlow {
    pub fn new() -> Self {
        Self {
            credentials: Credentials::default(),
            submitted: None,
            state: LoginState::Idle,
            load_error: None,
        }
    }

    pub fn state(&self) -> &LoginState {
        &self.state
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.credentials.name = name.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.credentials.password = password.into();
    }

    /// Record a dataset load failure reported at mount
    pub fn record_load_error(&mut self, err: &LoadError) {
        tracing::warn!(error = %err, "Login page could not load student data");
        self.load_error = Some(LOAD_ERROR_MESSAGE.to_string());
    }

    /// Start a submission
    ///
    /// Returns the credentials to match, or `None` when a submission is
    /// already in flight or has succeeded. Clears any displayed error.
    pub fn submit(&mut self) -> Option<Credentials> {
        match self.state {
            LoginState::Idle | LoginState::Failed(_) => {
                self.state = LoginState::Submitting;
                self.load_error = None;
                self.submitted = Some(self.credentials.clone());
                self.submitted.clone()
            }
            LoginState::Submitting | LoginState::Success { .. } => None,
        }
    }

    /// Finish a submission against the loaded students
    ///
    /// Matches the values captured at submit time, so edits made while
    /// waiting do not change the outcome. An empty slice (dataset missing or
    /// empty) always fails.
    pub fn resolve(&mut self, students: &[Student]) -> &LoginState {
        if self.state != LoginState::Submitting {
            return &self.state;
        }

        let submitted = self
            .submitted
            .take()
            .unwrap_or_else(|| self.credentials.clone());

        self.state = match authenticate(students, &submitted) {
            Ok(student) => {
                tracing::info!(student_id = student.id, "Login succeeded");
                LoginState::Success {
                    student_id: student.id,
                    redirect: Route::results(student.id),
                }
            }
            Err(e) => {
                tracing::debug!("Login rejected");
                LoginState::Failed(e)
            }
        };

        &self.state
    }

    /// Message to show under the form, if any
    pub fn error_message(&self) -> Option<String> {
        match &self.state {
            LoginState::Failed(e) => Some(e.to_string()),
            _ => self.load_error.clone(),
        }
    }

    /// Whether the submit button should be disabled
    pub fn is_busy(&self) -> bool {
        matches!(
            self.state,
            LoginState::Submitting | LoginState::Success { .. }
        )
    }

    /// Whether the success cue should be shown
    pub fn is_success(&self) -> bool {
        matches!(self.state, LoginState::Success { .. })
    }

    /// Where to navigate once the success cue has played
    pub fn redirect(&self) -> Option<&Route> {
        match &self.state {
            LoginState::Success { redirect, .. } => Some(redirect),
            _ => None,
        }
    }
}
