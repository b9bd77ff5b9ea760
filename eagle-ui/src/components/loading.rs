//! Loading Component
//!
//! Loading spinners.

use leptos::*;

/// Full-page loading state
#[component]
pub fn Loading(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="loading-container">
            <div class="spinner" />
            <p>{message}</p>
        </div>
    }
}

/// Inline loading spinner, used inside buttons
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="loading-spinner" />
    }
}
