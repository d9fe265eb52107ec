use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A product review. Each user holds at most one review per product;
/// resubmitting replaces the earlier rating and text.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Review {
    pub id: i32,
    pub user_id: i32,
    pub product_id: i32,
    /// Star rating, 1 to 5.
    pub rating: i32,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload required to save a review.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub user_id: i32,
    pub product_id: i32,
    pub rating: i32,
    pub content: String,
    pub updated_at: NaiveDateTime,
}

impl NewReview {
    pub fn new(user_id: i32, product_id: i32, rating: i32, content: impl Into<String>) -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            user_id,
            product_id,
            rating,
            content: content.into(),
            updated_at: now,
        }
    }
}
