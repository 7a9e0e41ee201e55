use crate::domain::client::{Client, NewClient};
use crate::domain::types::ClientId;
use crate::repository::{ClientReader, ClientWriter};
use crate::services::{ServiceError, ServiceResult};

/// Returns all stored clients ordered newest first.
pub fn list_clients<R>(repo: &R) -> ServiceResult<Vec<Client>>
where
    R: ClientReader + ?Sized,
{
    repo.list_clients().map_err(|err| {
        log::error!("Failed to list clients: {err}");
        ServiceError::from(err)
    })
}

/// Persists a new client and returns its database-assigned identifier.
pub fn create_client<R>(repo: &R, new_client: &NewClient) -> ServiceResult<ClientId>
where
    R: ClientWriter + ?Sized,
{
    let id = repo.create_client(new_client).map_err(|err| {
        log::error!("Failed to create client: {err}");
        ServiceError::from(err)
    })?;

    log::info!("Created client {id}");
    Ok(id)
}
