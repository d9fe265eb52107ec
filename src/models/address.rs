use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::address::{Address as DomainAddress, NewAddress as DomainNewAddress};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::addresses)]
pub struct Address {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub full_address: String,
    pub city: String,
    pub postal_code: String,
    pub phone: String,
    pub is_default: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::addresses)]
pub struct NewAddress<'a> {
    pub user_id: i32,
    pub name: &'a str,
    pub full_address: &'a str,
    pub city: &'a str,
    pub postal_code: &'a str,
    pub phone: &'a str,
    pub is_default: bool,
    pub updated_at: NaiveDateTime,
}

impl From<Address> for DomainAddress {
    fn from(value: Address) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            name: value.name,
            full_address: value.full_address,
            city: value.city,
            postal_code: value.postal_code,
            phone: value.phone,
            is_default: value.is_default,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewAddress> for NewAddress<'a> {
    fn from(value: &'a DomainNewAddress) -> Self {
        Self {
            user_id: value.user_id,
            name: value.name.as_str(),
            full_address: value.full_address.as_str(),
            city: value.city.as_str(),
            postal_code: value.postal_code.as_str(),
            phone: value.phone.as_str(),
            is_default: value.is_default,
            updated_at: value.updated_at,
        }
    }
}
