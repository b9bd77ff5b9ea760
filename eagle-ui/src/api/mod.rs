//! Data access for the pages

pub mod client;

pub use client::fetch_dataset;
