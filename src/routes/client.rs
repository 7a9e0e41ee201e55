use actix_web::{HttpResponse, Responder, get, post, web};

use crate::domain::client::NewClient;
use crate::dto::client::{ClientCreatedResponse, CreateClientRequest, ErrorResponse};
use crate::models::config::ErrorStatusPolicy;
use crate::repository::ClientStore;
use crate::routes::service_error_response;
use crate::services::client as client_service;

#[get("")]
pub async fn list_clients(
    repo: web::Data<dyn ClientStore>,
    policy: web::Data<ErrorStatusPolicy>,
) -> impl Responder {
    match web::block(move || client_service::list_clients(repo.get_ref())).await {
        Ok(Ok(clients)) => HttpResponse::Ok().json(clients),
        Ok(Err(err)) => service_error_response(&err, *policy.get_ref()),
        Err(err) => {
            log::error!("Failed to run list clients task: {err}");
            HttpResponse::InternalServerError().json(ErrorResponse::internal())
        }
    }
}

#[post("")]
pub async fn create_client(
    repo: web::Data<dyn ClientStore>,
    policy: web::Data<ErrorStatusPolicy>,
    web::Json(request): web::Json<CreateClientRequest>,
) -> impl Responder {
    let new_client = NewClient::from(request);

    match web::block(move || client_service::create_client(repo.get_ref(), &new_client)).await {
        Ok(Ok(id)) => HttpResponse::Created().json(ClientCreatedResponse::new(id)),
        Ok(Err(err)) => service_error_response(&err, *policy.get_ref()),
        Err(err) => {
            log::error!("Failed to run create client task: {err}");
            HttpResponse::InternalServerError().json(ErrorResponse::internal())
        }
    }
}
