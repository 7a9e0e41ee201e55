//! Request and response bodies of the `/clients` endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::client::NewClient;
use crate::domain::types::ClientId;

pub const CLIENT_CREATED_MESSAGE: &str = "Cliente creado";
pub const INTERNAL_ERROR_MESSAGE: &str = "Error interno del servidor";
pub const INVALID_BODY_MESSAGE: &str = "Cuerpo de la solicitud inválido";

/// Body of `POST /clients`. Unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct CreateClientRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl From<CreateClientRequest> for NewClient {
    fn from(request: CreateClientRequest) -> Self {
        NewClient::new(request.name, request.email, request.phone)
    }
}

/// Body returned after a client has been stored.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ClientCreatedResponse {
    pub message: String,
    pub id: ClientId,
}

impl ClientCreatedResponse {
    pub fn new(id: ClientId) -> Self {
        Self {
            message: CLIENT_CREATED_MESSAGE.to_string(),
            id,
        }
    }
}

/// Generic error body; never carries database detail.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    pub fn internal() -> Self {
        Self::new(INTERNAL_ERROR_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn request_ignores_unknown_fields() {
        let request: CreateClientRequest = serde_json::from_value(json!({
            "name": "Acme Inc",
            "phone": "555-0100",
            "industry": "Retail"
        }))
        .unwrap();

        let new_client = NewClient::from(request);
        assert_eq!(new_client.name.as_deref(), Some("Acme Inc"));
        assert_eq!(new_client.email, None);
        assert_eq!(new_client.phone.as_deref(), Some("555-0100"));
    }

    #[test]
    fn request_accepts_missing_name() {
        let request: CreateClientRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.name.is_none());
    }

    #[test]
    fn created_response_shape() {
        let body = serde_json::to_value(ClientCreatedResponse::new(ClientId::new(1).unwrap()))
            .unwrap();
        assert_eq!(body, json!({"message": "Cliente creado", "id": 1}));
    }

    #[test]
    fn error_response_shape() {
        let body = serde_json::to_value(ErrorResponse::internal()).unwrap();
        assert_eq!(body, json!({"error": "Error interno del servidor"}));
    }
}
