//! Results Page
//!
//! Loads the dataset on mount, looks up the student from the route id and
//! renders the derived results view. Top grades get confetti and the
//! celebration sound, once per view.

use std::cell::Cell;
use std::rc::Rc;

use eagle_results::results::{CelebrationLatch, ResultsState, ResultsView};
use eagle_results::router::{Route, RouteStudentId, STUDENT_ID_PARAM};
use leptos::*;
use leptos_router::{use_navigate, use_params_map};

use crate::api;
use crate::components::{Confetti, Loading, ScoreRing};
use crate::cue::AudioCue;

#[component]
pub fn ResultsPage() -> impl IntoView {
    let params = use_params_map();
    let student_id = move || {
        params.with(|p| RouteStudentId::parse(p.get(STUDENT_ID_PARAM).map(String::as_str).unwrap_or("")))
    };

    let (state, set_state) = create_signal(ResultsState::Loading);

    let mounted = Rc::new(Cell::new(true));
    on_cleanup({
        let mounted = Rc::clone(&mounted);
        move || mounted.set(false)
    });

    // Reload whenever the id changes; each load gets a fresh latch
    create_effect(move |_| {
        let id = student_id();
        set_state.set(ResultsState::Loading);

        let mounted = Rc::clone(&mounted);
        spawn_local(async move {
            let loaded = api::fetch_dataset().await;
            if !mounted.get() || id != student_id() {
                return;
            }

            let resolved = ResultsState::resolve(loaded.as_ref(), id);
            if let Err(e) = &loaded {
                web_sys::console::error_1(&format!("Error loading student data: {}", e).into());
            }

            if let Some(view) = resolved.view() {
                CelebrationLatch::new().fire(view, &AudioCue);
            }

            set_state.set(resolved);
        });
    });

    view! {
        {move || state.with(|state| match state {
            ResultsState::Loading => view! {
                <Loading message="Loading results... 📊" />
            }.into_view(),
            ResultsState::Failed(_) => view! {
                <ErrorPanel message=state.error_message().unwrap_or_default() back=state.back_route() />
            }.into_view(),
            ResultsState::Ready(results) => view! {
                <ResultsCard results=ResultsView::clone(results) back=state.back_route() />
            }.into_view(),
        })}
    }
}

#[component]
fn ErrorPanel(message: String, back: Route) -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="error-container">
            <h2>"Error ❌"</h2>
            <p>{message}</p>
            <button class="back-button" on:click=move |_| navigate(&back.path(), Default::default())>
                "Return to Login"
            </button>
        </div>
    }
}

#[component]
fn ResultsCard(results: ResultsView, back: Route) -> impl IntoView {
    let navigate = use_navigate();
    let celebrate = results.celebrate;

    view! {
        <div class="results-container">
            {celebrate.then(|| view! { <Confetti /> })}

            <div class="results-card">
                <div class="results-header">
                    <div class="logo-container">
                        <img src="/images/eagle_logo_small.jpg" alt="The Eagle Series" class="eagle-logo" />
                    </div>
                    <h1>{format!("✨ {} ✨", results.exam_title)}</h1>
                    <div class="student-info">
                        <h2>{results.student_name.clone()}</h2>
                    </div>
                </div>

                <div class="results-content">
                    <div class="score-display">
                        <ScoreRing results=results.clone() />

                        <div class="score-details">
                            <div class="percentage">{results.percentage_label.clone()}</div>
                            <div class="grade" style=format!("background-color: {}", results.badge.color)>
                                {results.badge.text()}
                            </div>
                        </div>
                    </div>

                    {results.notes.clone().map(|notes| view! {
                        <div class="student-notes">
                            <p>{notes}</p>
                        </div>
                    })}

                    {results.certificate.then(|| view! {
                        <div class="certificate-section">
                            <h3>"🎉 Congratulations! 🎉"</h3>
                            <p>"You can download your certificate of excellence"</p>
                            <button class="certificate-button">"🏆 Download Certificate"</button>
                        </div>
                    })}

                    <div class="downloads-section">
                        <h3>"📝 Answer Sheets"</h3>
                        <div class="download-buttons">
                            {results.downloads.iter().map(|download| view! {
                                <a
                                    href=download.url.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class=format!("download-button {}", download.kind.css_class())
                                >
                                    {download.label}
                                </a>
                            }).collect_view()}
                        </div>
                    </div>

                    <div class="general-notes">
                        <h3>"📎 Important Notes:"</h3>
                        <ul>
                            {results.announcements.iter().map(|note| view! {
                                <li>{note.clone()}</li>
                            }).collect_view()}
                        </ul>
                    </div>
                </div>

                <div class="results-footer">
                    <button class="logout-button" on:click=move |_| navigate(&back.path(), Default::default())>
                        "Logout"
                    </button>
                </div>
            </div>
        </div>
    }
}
