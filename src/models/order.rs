use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::order::{
    NewOrder as DomainNewOrder, Order as DomainOrder, OrderItem as DomainOrderItem,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::orders)]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    pub address_id: i32,
    pub credit_card_id: i32,
    pub total_cents: i64,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::order_items)]
#[diesel(belongs_to(Order, foreign_key = order_id))]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub name: String,
    pub price_cents: i64,
    pub quantity: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::orders)]
pub struct NewOrder<'a> {
    pub user_id: i32,
    pub address_id: i32,
    pub credit_card_id: i32,
    pub total_cents: i64,
    pub status: &'a str,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::order_items)]
pub struct NewOrderItem<'a> {
    pub order_id: i32,
    pub product_id: i32,
    pub name: &'a str,
    pub price_cents: i64,
    pub quantity: i32,
}

/// Changeset applied when an order moves through its lifecycle. Status
/// and `updated_at` are the only mutable columns.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::orders)]
pub struct UpdateOrderStatus<'a> {
    pub status: &'a str,
    pub updated_at: NaiveDateTime,
}

impl Order {
    pub fn into_domain(self, items: Vec<OrderItem>) -> DomainOrder {
        DomainOrder {
            id: self.id,
            user_id: self.user_id,
            address_id: self.address_id,
            credit_card_id: self.credit_card_id,
            total_cents: self.total_cents,
            status: self.status.parse().unwrap_or_default(),
            items: items.into_iter().map(OrderItem::into_domain).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl OrderItem {
    pub fn into_domain(self) -> DomainOrderItem {
        DomainOrderItem {
            product_id: self.product_id,
            name: self.name,
            price_cents: self.price_cents,
            quantity: self.quantity,
        }
    }
}

impl From<(Order, Vec<OrderItem>)> for DomainOrder {
    fn from(value: (Order, Vec<OrderItem>)) -> Self {
        value.0.into_domain(value.1)
    }
}

impl<'a> From<&'a DomainNewOrder> for NewOrder<'a> {
    fn from(value: &'a DomainNewOrder) -> Self {
        Self {
            user_id: value.user_id,
            address_id: value.address_id,
            credit_card_id: value.credit_card_id,
            total_cents: value.total_cents,
            status: value.status.as_str(),
            updated_at: value.updated_at,
        }
    }
}

impl<'a> NewOrderItem<'a> {
    pub fn from_domain(order_id: i32, value: &'a DomainOrderItem) -> Self {
        Self {
            order_id,
            product_id: value.product_id,
            name: value.name.as_str(),
            price_cents: value.price_cents,
            quantity: value.quantity,
        }
    }
}
