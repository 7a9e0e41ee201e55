use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::client::{Client as DomainClient, NewClient as DomainNewClient};
use crate::domain::types::{ClientId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::clients)]
#[diesel(primary_key(client_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::client::Client`].
pub struct Client {
    pub client_id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::clients)]
/// Insertable form of [`Client`].
///
/// A `None` name leaves the column out of the statement, so the `NOT NULL`
/// constraint rejects the row instead of storing an empty string.
pub struct NewClient<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
}

impl TryFrom<Client> for DomainClient {
    type Error = TypeConstraintError;

    fn try_from(client: Client) -> Result<Self, Self::Error> {
        Ok(Self {
            client_id: ClientId::new(client.client_id)?,
            name: client.name,
            email: client.email,
            phone: client.phone,
            created_at: client.created_at,
        })
    }
}

impl<'a> From<&'a DomainNewClient> for NewClient<'a> {
    fn from(client: &'a DomainNewClient) -> Self {
        Self {
            name: client.name.as_deref(),
            email: client.email.as_deref(),
            phone: client.phone.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn from_domain_new_borrows_fields() {
        let domain = DomainNewClient::new(
            Some("Acme Inc".to_string()),
            Some("a@acme.com".to_string()),
            None,
        );
        let new: NewClient = (&domain).into();
        assert_eq!(new.name, Some("Acme Inc"));
        assert_eq!(new.email, Some("a@acme.com"));
        assert_eq!(new.phone, None);
    }

    #[test]
    fn client_into_domain() {
        let now: NaiveDateTime = Utc::now().naive_utc();
        let db_client = Client {
            client_id: 1,
            name: "n".to_string(),
            email: Some("e".to_string()),
            phone: Some("p".to_string()),
            created_at: now,
        };
        let domain = DomainClient::try_from(db_client).unwrap();
        assert_eq!(domain.client_id.get(), 1);
        assert_eq!(domain.name, "n");
        assert_eq!(domain.email, Some("e".to_string()));
        assert_eq!(domain.phone, Some("p".to_string()));
        assert_eq!(domain.created_at, now);
    }

    #[test]
    fn client_with_invalid_id_is_rejected() {
        let db_client = Client {
            client_id: 0,
            name: "n".to_string(),
            email: None,
            phone: None,
            created_at: Utc::now().naive_utc(),
        };
        assert_eq!(
            DomainClient::try_from(db_client),
            Err(TypeConstraintError::NonPositiveId)
        );
    }
}
