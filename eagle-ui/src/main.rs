//! Eagle Results web UI
//!
//! The student-facing portal built with Leptos (WASM).
//!
//! # Pages
//!
//! - `/` - Login with full name and password
//! - `/results/:student_id` - Score, grade, remarks and downloads
//! - `/404` - Not found; any unknown path redirects here
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Each page fetches `/student_data.json` when it mounts and
//! runs the shared `eagle_results` login and results logic against it.

use leptos::*;

mod api;
mod app;
mod components;
mod cue;
mod pages;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
