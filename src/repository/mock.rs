//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::client::{Client, NewClient};
use crate::domain::types::ClientId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClientReader, ClientWriter};

mock! {
    pub ClientStore {}

    impl ClientReader for ClientStore {
        fn list_clients(&self) -> RepositoryResult<Vec<Client>>;
    }

    impl ClientWriter for ClientStore {
        fn create_client(&self, new_client: &NewClient) -> RepositoryResult<ClientId>;
    }
}
