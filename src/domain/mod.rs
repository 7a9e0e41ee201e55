//! Domain aggregates exposed by the CRM service layer.

pub mod client;
pub mod types;
