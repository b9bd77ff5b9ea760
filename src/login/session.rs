//! Paced login driver
//!
//! Loads the dataset once at mount, like the login page does, then runs
//! submissions through a [`LoginFlow`] with the configured pacing.

use std::sync::Arc;
use std::time::Duration;

use super::flow::{LoginFlow, LoginPacing, LoginState};
use super::matching::{AuthError, Credentials};
use crate::dataset::{Dataset, DatasetLoader};
use crate::router::Route;

/// A mounted login page
pub struct LoginSession {
    flow: LoginFlow,
    dataset: Option<Arc<Dataset>>,
    pacing: LoginPacing,
}

impl LoginSession {
    /// Mount the page, loading the dataset
    ///
    /// A load failure is kept on the flow as the page-level message and
    /// every later submission fails to match.
    pub async fn mount(loader: &DatasetLoader, pacing: LoginPacing) -> Self {
        let mut flow = LoginFlow::new();
        let dataset = match loader.load().await {
            Ok(dataset) => Some(dataset),
            Err(e) => {
                flow.record_load_error(&e);
                None
            }
        };

        Self {
            flow,
            dataset,
            pacing,
        }
    }

    pub fn flow(&self) -> &LoginFlow {
        &self.flow
    }

    pub fn is_loaded(&self) -> bool {
        self.dataset.is_some()
    }

    /// Page-level message when the dataset failed to load at mount
    pub fn mount_error(&self) -> Option<String> {
        if self.is_loaded() {
            None
        } else {
            self.flow.error_message()
        }
    }

    /// Submit credentials and wait for the outcome
    ///
    /// On success returns the route to navigate to after the redirect delay.
    pub async fn submit(&mut self, credentials: Credentials) -> Result<Route, AuthError> {
        self.flow.set_name(credentials.name);
        self.flow.set_password(credentials.password);

        if self.flow.submit().is_none() {
            return self
                .flow
                .redirect()
                .cloned()
                .ok_or(AuthError::InvalidCredentials);
        }

        pause(self.pacing.submit_delay).await;

        let students = self
            .dataset
            .as_deref()
            .map(|d| d.students.as_slice())
            .unwrap_or_default();

        match self.flow.resolve(students).clone() {
            LoginState::Success { redirect, .. } => {
                pause(self.pacing.redirect_delay).await;
                Ok(redirect)
            }
            LoginState::Failed(e) => Err(e),
            LoginState::Idle | LoginState::Submitting => Err(AuthError::InvalidCredentials),
        }
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
