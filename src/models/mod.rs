//! Diesel models and configuration structures.

pub mod client;
#[cfg(feature = "server")]
pub mod config;
