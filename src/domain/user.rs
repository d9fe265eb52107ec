use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a registered account.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    /// Argon2 PHC string; never serialized out of the persistence layer.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_admin: bool,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new account.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub updated_at: NaiveDateTime,
}

impl NewUser {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            username: username.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            is_admin: false,
            updated_at: now,
        }
    }

    pub fn admin(mut self) -> Self {
        self.is_admin = true;
        self
    }
}
