//! Pages
//!
//! Top-level page components for each route.

pub mod login;
pub mod not_found;
pub mod results;

pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use results::ResultsPage;
