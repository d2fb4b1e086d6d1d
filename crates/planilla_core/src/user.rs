//! Application user records.

use crate::codec::{parse_id, RecordCodec};
use crate::error::CoreResult;
use planilla_store::RecordId;
use serde::{Deserialize, Serialize};

/// Field names in storage order.
pub const USER_FIELDS: [&str; 7] = [
    "id",
    "first_name",
    "first_surname",
    "second_surname",
    "email",
    "username",
    "password",
];

/// A user allowed to sign in to the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Record key; 0 until the user is stored.
    pub id: RecordId,
    /// Given name.
    pub first_name: String,
    /// First surname.
    pub first_surname: String,
    /// Second surname.
    pub second_surname: String,
    /// Contact email.
    pub email: String,
    /// Sign-in name.
    pub username: String,
    /// Sign-in secret, stored as entered.
    #[serde(skip_serializing)]
    pub password: String,
}

impl User {
    /// Returns true if both credentials match exactly.
    #[must_use]
    pub fn matches_credentials(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl RecordCodec for User {
    const ACCEPTED_FIELD_COUNTS: &'static [usize] = &[7];
    const FIELD_NAMES: &'static [&'static str] = &USER_FIELDS;

    fn record_id(&self) -> RecordId {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn encode(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.first_name.clone(),
            self.first_surname.clone(),
            self.second_surname.clone(),
            self.email.clone(),
            self.username.clone(),
            self.password.clone(),
        ]
    }

    fn decode(fields: &[String]) -> CoreResult<Self> {
        Ok(Self {
            id: parse_id(&fields[0])?,
            first_name: fields[1].clone(),
            first_surname: fields[2].clone(),
            second_surname: fields[3].clone(),
            email: fields[4].clone(),
            username: fields[5].clone(),
            password: fields[6].clone(),
        })
    }
}
