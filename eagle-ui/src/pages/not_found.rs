//! Not Found Page

use eagle_results::router::Route;
use leptos::*;
use leptos_router::use_navigate;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="not-found-container">
            <div class="not-found-content">
                <h1>"404"</h1>
                <h2>"Page Not Found"</h2>
                <p>"Sorry, the page you are looking for does not exist."</p>
                <button
                    class="home-button"
                    on:click=move |_| navigate(&Route::Login.path(), Default::default())
                >
                    "Return to Home Page"
                </button>
            </div>
        </div>
    }
}
