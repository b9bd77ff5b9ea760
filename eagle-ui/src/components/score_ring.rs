//! Score Ring Component
//!
//! Circular score indicator filled in the grade color up to the percentage.

use eagle_results::dataset::display_number;
use eagle_results::results::ResultsView;
use leptos::*;

#[component]
pub fn ScoreRing(results: ResultsView) -> impl IntoView {
    view! {
        <div class="score-circle" style=format!("background: {}", results.ring.css_background())>
            <div class="score-inner">
                <span class="score-value">{display_number(results.score)}</span>
                <span class="score-total">{format!("/ {}", display_number(results.total_marks))}</span>
            </div>
        </div>
    }
}
