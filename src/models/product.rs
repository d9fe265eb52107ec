use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{NewProduct as DomainNewProduct, Product as DomainProduct};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub category_id: i32,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub stock: i32,
    pub rating: f64,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub discount_percent: Option<i32>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub category_id: i32,
    pub name: &'a str,
    pub description: &'a str,
    pub price_cents: i64,
    pub discount_percent: Option<i32>,
    pub stock: i32,
    pub is_active: bool,
    pub updated_at: NaiveDateTime,
}

impl From<Product> for DomainProduct {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            category_id: value.category_id,
            name: value.name,
            description: value.description,
            price_cents: value.price_cents,
            // NULL predates the discount column; treat as no discount.
            discount_percent: value.discount_percent.unwrap_or(0),
            stock: value.stock,
            rating: value.rating,
            is_active: value.is_active,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(value: &'a DomainNewProduct) -> Self {
        Self {
            category_id: value.category_id,
            name: value.name.as_str(),
            description: value.description.as_str(),
            price_cents: value.price_cents,
            discount_percent: value.discount_percent,
            stock: value.stock,
            is_active: value.is_active,
            updated_at: value.updated_at,
        }
    }
}
