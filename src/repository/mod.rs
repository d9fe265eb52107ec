use crate::db::{DbConnection, DbPool};
use crate::domain::address::{Address, NewAddress};
use crate::domain::category::{Category, NewCategory};
use crate::domain::credit_card::{CreditCard, NewCreditCard};
use crate::domain::news::{NewNewsArticle, NewsArticle};
use crate::domain::notification::{NewNotification, Notification};
use crate::domain::order::{NewOrder, Order, OrderStatus};
use crate::domain::product::{NewProduct, Product, ProductListQuery};
use crate::domain::review::{NewReview, Review};
use crate::domain::user::{NewUser, User};

pub mod errors;

mod address;
mod category;
mod credit_card;
mod news;
mod notification;
mod order;
mod product;
mod review;
mod user;

#[cfg(test)]
pub mod mock;

use self::errors::RepositoryResult;

/// Diesel-backed repository implementation that wraps an r2d2 pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over catalog products.
pub trait ProductReader {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
}

/// Write operations over catalog products.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
}

/// Read-only operations over catalog categories.
pub trait CategoryReader {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
}

/// Write operations over catalog categories.
pub trait CategoryWriter {
    fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
}

/// Read-only operations over orders and their items.
pub trait OrderReader {
    fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
    fn list_orders_for_user(&self, user_id: i32) -> RepositoryResult<Vec<Order>>;
}

/// Write operations over orders.
pub trait OrderWriter {
    /// Create an order with its items, re-checking and decrementing
    /// product stock inside a single transaction. Fails with
    /// `RepositoryError::InsufficientStock` and rolls everything back
    /// if any line cannot be satisfied.
    fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
    /// Set an order's status, stamping `updated_at`.
    fn update_order_status(&self, order_id: i32, status: OrderStatus) -> RepositoryResult<Order>;
}

/// Read-only operations over saved addresses.
pub trait AddressReader {
    fn get_address_by_id(&self, id: i32) -> RepositoryResult<Option<Address>>;
    fn list_addresses(&self, user_id: i32) -> RepositoryResult<Vec<Address>>;
}

/// Write operations over saved addresses.
pub trait AddressWriter {
    /// Insert an address. When the payload is flagged default, the
    /// owner's other defaults are unset in the same transaction.
    fn create_address(&self, new_address: &NewAddress) -> RepositoryResult<Address>;
    fn delete_address(&self, address_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over saved payment cards.
pub trait CreditCardReader {
    fn get_credit_card_by_id(&self, id: i32) -> RepositoryResult<Option<CreditCard>>;
    fn list_credit_cards(&self, user_id: i32) -> RepositoryResult<Vec<CreditCard>>;
}

/// Write operations over saved payment cards.
pub trait CreditCardWriter {
    /// Insert a card. When the payload is flagged default, the owner's
    /// other defaults are unset in the same transaction.
    fn create_credit_card(&self, new_card: &NewCreditCard) -> RepositoryResult<CreditCard>;
    fn delete_credit_card(&self, card_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over product reviews.
pub trait ReviewReader {
    /// Reviews for a product, newest first, each paired with the
    /// author's username.
    fn list_product_reviews(&self, product_id: i32) -> RepositoryResult<Vec<(Review, String)>>;
    fn get_user_review(&self, user_id: i32, product_id: i32) -> RepositoryResult<Option<Review>>;
}

/// Write operations over product reviews.
pub trait ReviewWriter {
    /// Insert or replace the author's review of the product and refresh
    /// the product's average rating, atomically.
    fn save_review(&self, new_review: &NewReview) -> RepositoryResult<Review>;
}

/// Read-only operations over news articles.
pub trait NewsReader {
    fn get_news_by_id(&self, id: i32) -> RepositoryResult<Option<NewsArticle>>;
    fn list_published_news(&self) -> RepositoryResult<Vec<NewsArticle>>;
}

/// Write operations over news articles.
pub trait NewsWriter {
    fn create_news(&self, new_article: &NewNewsArticle) -> RepositoryResult<NewsArticle>;
}

/// Fire-and-forget sink for the admin notification feed.
pub trait NotificationWriter {
    fn create_notification(
        &self,
        new_notification: &NewNotification,
    ) -> RepositoryResult<Notification>;
}

/// Read-only operations over user accounts.
pub trait UserReader {
    fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
    fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
}

/// Write operations over user accounts.
pub trait UserWriter {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
}
