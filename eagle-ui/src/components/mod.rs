//! UI Components
//!
//! Reusable Leptos components for the pages.

pub mod confetti;
pub mod loading;
pub mod score_ring;

pub use confetti::Confetti;
pub use loading::{InlineLoading, Loading};
pub use score_ring::ScoreRing;
