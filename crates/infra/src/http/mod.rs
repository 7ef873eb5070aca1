//! Blocking HTTP client wrapper

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
