//! Confetti Component
//!
//! Side confetti for top grades. The animation runs for three seconds
//! after the component mounts.

use leptos::*;

/// How long the confetti animates
const CONFETTI_MS: u32 = 3_000;

#[component]
pub fn Confetti() -> impl IntoView {
    let (animating, set_animating) = create_signal(true);

    let timeout = gloo_timers::callback::Timeout::new(CONFETTI_MS, move || {
        // The page may already be gone
        let _ = set_animating.try_set(false);
    });
    on_cleanup(move || drop(timeout));

    let class = move |side: &str| {
        if animating.get() {
            format!("confetti {} animate", side)
        } else {
            format!("confetti {}", side)
        }
    };

    view! {
        <div class=move || class("left") />
        <div class=move || class("right") />
    }
}
