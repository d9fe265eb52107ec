use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::review::{NewReview as DomainNewReview, Review as DomainReview};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::reviews)]
pub struct Review {
    pub id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub rating: i32,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::reviews)]
pub struct NewReview<'a> {
    pub user_id: i32,
    pub product_id: i32,
    pub rating: i32,
    pub content: &'a str,
    pub updated_at: NaiveDateTime,
}

/// Changeset applied when a user resubmits their review.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::reviews)]
pub struct UpdateReview<'a> {
    pub rating: i32,
    pub content: &'a str,
    pub updated_at: NaiveDateTime,
}

impl From<Review> for DomainReview {
    fn from(value: Review) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            product_id: value.product_id,
            rating: value.rating,
            content: value.content,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewReview> for NewReview<'a> {
    fn from(value: &'a DomainNewReview) -> Self {
        Self {
            user_id: value.user_id,
            product_id: value.product_id,
            rating: value.rating,
            content: value.content.as_str(),
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewReview> for UpdateReview<'a> {
    fn from(value: &'a DomainNewReview) -> Self {
        Self {
            rating: value.rating,
            content: value.content.as_str(),
            updated_at: value.updated_at,
        }
    }
}
