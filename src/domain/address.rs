use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A saved shipping address belonging to a user.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Address {
    pub id: i32,
    /// Owning user identifier.
    pub user_id: i32,
    /// Label chosen by the user, e.g. "Home" or "Office".
    pub name: String,
    pub full_address: String,
    pub city: String,
    pub postal_code: String,
    pub phone: String,
    /// Whether this address is pre-selected at checkout. At most one
    /// address per user carries this flag.
    pub is_default: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new address.
#[derive(Debug, Clone)]
pub struct NewAddress {
    pub user_id: i32,
    pub name: String,
    pub full_address: String,
    pub city: String,
    pub postal_code: String,
    pub phone: String,
    pub is_default: bool,
    pub updated_at: NaiveDateTime,
}

impl NewAddress {
    pub fn new(
        user_id: i32,
        name: impl Into<String>,
        full_address: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            user_id,
            name: name.into(),
            full_address: full_address.into(),
            city: city.into(),
            postal_code: postal_code.into(),
            phone: phone.into(),
            is_default: false,
            updated_at: now,
        }
    }

    /// Mark the new address as the user's default.
    pub fn default_address(mut self) -> Self {
        self.is_default = true;
        self
    }
}
