use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A saved payment card belonging to a user. The number is stored as
/// entered but only ever leaves the crate masked.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreditCard {
    pub id: i32,
    /// Owning user identifier.
    pub user_id: i32,
    /// Label chosen by the user, e.g. "Personal card".
    pub name: String,
    pub card_number: String,
    pub card_holder: String,
    pub expiry_month: i32,
    pub expiry_year: i32,
    /// Whether this card is pre-selected at checkout. At most one card
    /// per user carries this flag.
    pub is_default: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl CreditCard {
    /// The card number with all but the last four digits hidden.
    pub fn masked_number(&self) -> String {
        let last_four = self
            .card_number
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect::<String>();
        format!("**** **** **** {last_four}")
    }
}

/// Payload required to insert a new card.
#[derive(Debug, Clone)]
pub struct NewCreditCard {
    pub user_id: i32,
    pub name: String,
    pub card_number: String,
    pub card_holder: String,
    pub expiry_month: i32,
    pub expiry_year: i32,
    pub is_default: bool,
    pub updated_at: NaiveDateTime,
}

impl NewCreditCard {
    pub fn new(
        user_id: i32,
        name: impl Into<String>,
        card_number: impl Into<String>,
        card_holder: impl Into<String>,
        expiry_month: i32,
        expiry_year: i32,
    ) -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            user_id,
            name: name.into(),
            card_number: card_number.into(),
            card_holder: card_holder.into(),
            expiry_month,
            expiry_year,
            is_default: false,
            updated_at: now,
        }
    }

    /// Mark the new card as the user's default.
    pub fn default_card(mut self) -> Self {
        self.is_default = true;
        self
    }
}
