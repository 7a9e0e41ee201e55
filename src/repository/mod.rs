//! Persistence traits and their Diesel implementation.
//!
//! Services only see [`ClientReader`] and [`ClientWriter`]; the HTTP layer
//! receives a [`ClientStore`] at startup so tests can substitute a mock or a
//! throwaway database.

use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::client::{Client, NewClient};
use crate::domain::types::ClientId;
use crate::repository::errors::RepositoryResult;

pub mod client;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub trait ClientReader {
    /// Returns every client, newest first.
    fn list_clients(&self) -> RepositoryResult<Vec<Client>>;
}

pub trait ClientWriter {
    /// Inserts a client and returns the identifier the database assigned.
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<ClientId>;
}

/// Everything the HTTP layer needs from storage, shareable across workers.
pub trait ClientStore: ClientReader + ClientWriter + Send + Sync {}

impl<T> ClientStore for T where T: ClientReader + ClientWriter + Send + Sync {}

/// Diesel-backed repository sharing one connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}
