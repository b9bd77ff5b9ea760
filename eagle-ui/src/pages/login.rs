//! Login Page
//!
//! Loads the dataset on mount, then matches the typed name and password
//! after a short pause. A successful match shows the success cue and
//! navigates to the student's results.

use std::cell::Cell;
use std::rc::Rc;

use eagle_results::dataset::Student;
use eagle_results::login::{LoginFlow, LoginPacing};
use gloo_timers::callback::Timeout;
use leptos::*;
use leptos_router::use_navigate;

use crate::api;
use crate::components::InlineLoading;

#[component]
pub fn LoginPage() -> impl IntoView {
    let flow = create_rw_signal(LoginFlow::new());
    let (students, set_students) = create_signal(Vec::<Student>::new());
    let pacing = LoginPacing::default();
    let navigate = use_navigate();

    // Late fetches and timers must not touch an unmounted page
    let mounted = Rc::new(Cell::new(true));
    on_cleanup({
        let mounted = Rc::clone(&mounted);
        move || mounted.set(false)
    });

    {
        let mounted = Rc::clone(&mounted);
        spawn_local(async move {
            let loaded = api::fetch_dataset().await;
            if !mounted.get() {
                return;
            }

            match loaded {
                Ok(dataset) => set_students.set(dataset.students),
                Err(e) => {
                    web_sys::console::error_1(&format!("Error loading student data: {}", e).into());
                    flow.update(|f| f.record_load_error(&e));
                }
            }
        });
    }

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if flow.try_update(|f| f.submit()).flatten().is_none() {
            return;
        }

        let mounted = Rc::clone(&mounted);
        let navigate = navigate.clone();
        Timeout::new(millis(pacing.submit_delay), move || {
            if !mounted.get() {
                return;
            }

            let redirect = flow
                .try_update(|f| {
                    students.with_untracked(|s| {
                        f.resolve(s);
                    });
                    f.redirect().cloned()
                })
                .flatten();

            if let Some(route) = redirect {
                Timeout::new(millis(pacing.redirect_delay), move || {
                    if mounted.get() {
                        navigate(&route.path(), Default::default());
                    }
                })
                .forget();
            }
        })
        .forget();
    };

    let busy = move || flow.with(|f| f.is_busy());

    view! {
        <div class="login-container">
            <div class="login-card">
                <div class="login-header">
                    <div class="logo-container">
                        <img src="/images/eagle_logo_small.jpg" alt="The Eagle Series" class="eagle-logo" />
                    </div>
                    <h1 class="animate-text">"✨ The Eagle Series ✨"</h1>
                    <h2 class="animate-text">"Final Exam Results"</h2>
                </div>

                <form
                    class=move || form_class(flow.with(|f| f.is_success()))
                    on:submit=on_submit
                >
                    <div class="form-group animate-text">
                        <label for="name">"Full Name"</label>
                        <input
                            type="text"
                            id="name"
                            placeholder="Enter your full name"
                            required
                            prop:value=move || flow.with(|f| f.credentials().name.clone())
                            on:input=move |ev| flow.update(|f| f.set_name(event_target_value(&ev)))
                        />
                    </div>

                    <div class="form-group animate-text">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="Enter your password"
                            required
                            prop:value=move || flow.with(|f| f.credentials().password.clone())
                            on:input=move |ev| flow.update(|f| f.set_password(event_target_value(&ev)))
                        />
                    </div>

                    {move || flow.with(|f| f.error_message()).map(|message| view! {
                        <div class="error-message">{message}</div>
                    })}

                    <button type="submit" class="login-button animate-text" disabled=busy>
                        {move || if busy() {
                            view! { <InlineLoading /> }.into_view()
                        } else {
                            "📊 View Results".into_view()
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}

fn millis(delay: std::time::Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

fn form_class(success: bool) -> &'static str {
    if success {
        "login-form success"
    } else {
        "login-form"
    }
}
