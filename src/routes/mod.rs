//! HTTP routing for the CRM API.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::middleware::NormalizePath;
use actix_web::{HttpResponse, ResponseError, error, web};

use crate::dto::client::{ErrorResponse, INVALID_BODY_MESSAGE};
use crate::models::config::ErrorStatusPolicy;
use crate::repository::ClientStore;
use crate::services::ServiceError;

pub mod client;

/// Path prefix the client routes are mounted under.
pub const CLIENTS_PREFIX: &str = "/clients";

/// Registers the client routes together with the state they extract.
pub fn configure(
    store: Arc<dyn ClientStore>,
    policy: ErrorStatusPolicy,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::from(store))
            .app_data(web::Data::new(policy))
            .app_data(json_config())
            .service(
                web::scope(CLIENTS_PREFIX)
                    .service(client::list_clients)
                    .service(client::create_client),
            );
    }
}

/// Strips trailing slashes so `/clients/` reaches the same handlers as `/clients`.
pub fn path_normalizer() -> NormalizePath {
    NormalizePath::trim()
}

/// JSON extractor settings: unreadable bodies are answered with the
/// framework's status code and a JSON error body.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        log::warn!("Rejected request body on {} {}: {err}", req.method(), req.path());
        let response = HttpResponse::build(err.status_code())
            .json(ErrorResponse::new(INVALID_BODY_MESSAGE));
        error::InternalError::from_response(err, response).into()
    })
}

/// Maps a service failure to a response without exposing its detail.
pub fn service_error_response(err: &ServiceError, policy: ErrorStatusPolicy) -> HttpResponse {
    let status = match (policy, err) {
        (ErrorStatusPolicy::Detailed, ServiceError::Conflict(_)) => StatusCode::CONFLICT,
        (ErrorStatusPolicy::Detailed, ServiceError::MissingField(_)) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    HttpResponse::build(status).json(ErrorResponse::internal())
}
