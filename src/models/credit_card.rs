use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::credit_card::{
    CreditCard as DomainCreditCard, NewCreditCard as DomainNewCreditCard,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::credit_cards)]
pub struct CreditCard {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub card_number: String,
    pub card_holder: String,
    pub expiry_month: i32,
    pub expiry_year: i32,
    pub is_default: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::credit_cards)]
pub struct NewCreditCard<'a> {
    pub user_id: i32,
    pub name: &'a str,
    pub card_number: &'a str,
    pub card_holder: &'a str,
    pub expiry_month: i32,
    pub expiry_year: i32,
    pub is_default: bool,
    pub updated_at: NaiveDateTime,
}

impl From<CreditCard> for DomainCreditCard {
    fn from(value: CreditCard) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            name: value.name,
            card_number: value.card_number,
            card_holder: value.card_holder,
            expiry_month: value.expiry_month,
            expiry_year: value.expiry_year,
            is_default: value.is_default,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewCreditCard> for NewCreditCard<'a> {
    fn from(value: &'a DomainNewCreditCard) -> Self {
        Self {
            user_id: value.user_id,
            name: value.name.as_str(),
            card_number: value.card_number.as_str(),
            card_holder: value.card_holder.as_str(),
            expiry_month: value.expiry_month,
            expiry_year: value.expiry_year,
            is_default: value.is_default,
            updated_at: value.updated_at,
        }
    }
}
