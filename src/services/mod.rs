//! Framework-free controller logic shared by the HTTP handlers.

pub mod client;
pub mod errors;

pub use errors::{ServiceError, ServiceResult};
