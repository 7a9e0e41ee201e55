use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::ClientId;

/// A CRM record for a company or person being tracked.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub client_id: ClientId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Insertion time, assigned by the database and never updated.
    pub created_at: NaiveDateTime,
}

/// Data required to insert a client.
///
/// `name` stays optional here: the `NOT NULL` constraint on the table is the
/// only place a missing name is rejected.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct NewClient {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl NewClient {
    #[must_use]
    pub fn new(name: Option<String>, email: Option<String>, phone: Option<String>) -> Self {
        Self { name, email, phone }
    }
}
