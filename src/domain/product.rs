use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// Domain representation of a catalog product.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Category the product is listed under.
    pub category_id: i32,
    /// Human-readable name of the product.
    pub name: String,
    /// Longer description shown on the detail page.
    pub description: String,
    /// Undiscounted unit price in cents.
    pub price_cents: i64,
    /// Discount in whole percent, 0 when no discount is active.
    pub discount_percent: i32,
    /// Units currently available for sale, never negative.
    pub stock: i32,
    /// Average review rating, 0 when the product has no reviews.
    pub rating: f64,
    /// Whether the product is visible in the catalog.
    pub is_active: bool,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the product record.
    pub updated_at: NaiveDateTime,
}

impl Product {
    /// Effective unit price after the discount, rounded down to the cent.
    /// Never negative: the discount is clamped to 0..=100.
    pub fn current_price_cents(&self) -> i64 {
        let discount = i64::from(self.discount_percent.clamp(0, 100));
        if discount > 0 {
            self.price_cents * (100 - discount) / 100
        } else {
            self.price_cents
        }
    }

}

/// Payload required to insert a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub category_id: i32,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub discount_percent: Option<i32>,
    pub stock: i32,
    pub is_active: bool,
    /// Timestamp captured when the payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewProduct {
    /// Build a new product payload with the supplied details and current timestamp.
    pub fn new(
        category_id: i32,
        name: impl Into<String>,
        description: impl Into<String>,
        price_cents: i64,
    ) -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            category_id,
            name: name.into(),
            description: description.into(),
            price_cents,
            discount_percent: None,
            stock: 0,
            is_active: true,
            updated_at: now,
        }
    }

    /// Set the initial stock level.
    pub fn with_stock(mut self, stock: i32) -> Self {
        self.stock = stock;
        self
    }

    /// Apply a discount in whole percent.
    pub fn with_discount(mut self, percent: i32) -> Self {
        self.discount_percent = Some(percent);
        self
    }
}

/// Sort orders accepted by the product listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductSort {
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
    #[default]
    Newest,
}

/// Query definition used to list catalog products.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Optional category filter.
    pub category_id: Option<i32>,
    /// Optional name or description search term.
    pub search: Option<String>,
    /// Optional lower price bound in cents.
    pub min_price_cents: Option<i64>,
    /// Optional upper price bound in cents.
    pub max_price_cents: Option<i64>,
    /// Only include products with stock available.
    pub in_stock: bool,
    /// Sort order applied to the results.
    pub sort: ProductSort,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl ProductListQuery {
    /// Construct a query over all active products.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results by category.
    pub fn category(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Filter the results by a search term applied to the name or description.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Bound the undiscounted price from below.
    pub fn min_price_cents(mut self, cents: i64) -> Self {
        self.min_price_cents = Some(cents);
        self
    }

    /// Bound the undiscounted price from above.
    pub fn max_price_cents(mut self, cents: i64) -> Self {
        self.max_price_cents = Some(cents);
        self
    }

    /// Exclude products that are out of stock.
    pub fn in_stock(mut self) -> Self {
        self.in_stock = true;
        self
    }

    /// Apply a sort order.
    pub fn sort(mut self, sort: ProductSort) -> Self {
        self.sort = sort;
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
