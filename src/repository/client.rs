use diesel::prelude::*;

use crate::domain::client::{Client, NewClient};
use crate::domain::types::ClientId;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ClientReader, ClientWriter, DieselRepository};

impl ClientReader for DieselRepository {
    fn list_clients(&self) -> RepositoryResult<Vec<Client>> {
        use crate::models::client::Client as DbClient;
        use crate::schema::clients;

        let mut conn = self.conn()?;

        let items = clients::table
            .order((clients::created_at.desc(), clients::client_id.desc()))
            .select(DbClient::as_select())
            .load::<DbClient>(&mut conn)?;

        items
            .into_iter()
            .map(|client| Client::try_from(client).map_err(RepositoryError::from))
            .collect()
    }
}

impl ClientWriter for DieselRepository {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<ClientId> {
        use crate::models::client::NewClient as DbNewClient;
        use crate::schema::clients;

        let mut conn = self.conn()?;
        let insertable: DbNewClient = new_client.into();

        let id = diesel::insert_into(clients::table)
            .values(&insertable)
            .returning(clients::client_id)
            .get_result::<i32>(&mut conn)?;

        Ok(ClientId::new(id)?)
    }
}
