//! App Root Component
//!
//! Main application component with routing.

use eagle_results::router::Route as AppRoute;
use leptos::*;
use leptos_router::*;

use crate::pages::{LoginPage, NotFoundPage, ResultsPage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="app">
                <Routes>
                    <Route path=AppRoute::Login.pattern() view=LoginPage />
                    <Route path=AppRoute::RESULTS_PATTERN view=ResultsPage />
                    <Route path=AppRoute::NotFound.pattern() view=NotFoundPage />
                    <Route path=AppRoute::FALLBACK_PATTERN view=Unmatched />
                </Routes>
            </div>
        </Router>
    }
}

/// Sends unmatched paths to the not-found page
#[component]
fn Unmatched() -> impl IntoView {
    let pathname = use_location().pathname.get_untracked();
    let target = AppRoute::redirect_for(&pathname).unwrap_or(AppRoute::NotFound);

    view! { <Redirect path=target.path() /> }
}
