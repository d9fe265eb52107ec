use thiserror::Error;

use crate::domain::order::OrderStatus;
use crate::repository::errors::RepositoryError;

pub mod addresses;
pub mod auth;
pub mod cards;
pub mod cart;
pub mod checkout;
pub mod news;
pub mod notifications;
pub mod orders;
pub mod products;
pub mod reviews;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures surfaced by the service layer and translated to HTTP
/// responses at the route boundary.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("cart is empty")]
    EmptyCart,
    #[error("quantity must be greater than zero")]
    InvalidQuantity,
    /// Carries the live stock level so the client can advertise the
    /// maximum satisfiable quantity.
    #[error("only {available} of `{name}` in stock")]
    InsufficientStock {
        product_id: i32,
        name: String,
        available: i32,
    },
    #[error("not found")]
    NotFound,
    #[error("unauthorized")]
    Unauthorized,
    #[error("invalid address")]
    InvalidAddress,
    #[error("invalid payment card")]
    InvalidPaymentInstrument,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("unknown order status `{0}`")]
    InvalidStatus(String),
    #[error("order cannot move from {from} to {to}")]
    InvalidStatusTransition { from: OrderStatus, to: OrderStatus },
    #[error("already exists")]
    Conflict,
    #[error("{0}")]
    Form(String),
    #[error("internal error: {0}")]
    Internal(String),
    #[error("repository error: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::Conflict => ServiceError::Conflict,
            RepositoryError::InsufficientStock {
                product_id,
                name,
                available,
            } => ServiceError::InsufficientStock {
                product_id,
                name,
                available,
            },
            other => ServiceError::Repository(other),
        }
    }
}
