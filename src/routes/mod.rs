use actix_session::{Session, SessionInsertError};
use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::Serialize;

use crate::domain::cart::Cart;
use crate::services::ServiceError;

pub mod addresses;
pub mod admin;
pub mod auth;
pub mod cards;
pub mod cart;
pub mod checkout;
pub mod news;
pub mod orders;
pub mod products;
pub mod reviews;

/// Session key the serialized cart is stored under.
pub(crate) const CART_SESSION_KEY: &str = "cart";

/// Read the cart out of the session. A missing or unreadable entry is
/// an empty cart, never an error.
pub(crate) fn load_cart(session: &Session) -> Cart {
    session
        .get::<Cart>(CART_SESSION_KEY)
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Persist the cart back into the session.
pub(crate) fn store_cart(session: &Session, cart: &Cart) -> Result<(), SessionInsertError> {
    session.insert(CART_SESSION_KEY, cart)
}

/// Respond 500 after a failed session write.
pub(crate) fn session_error_response(err: SessionInsertError) -> HttpResponse {
    log::error!("Failed to persist cart to session: {err}");
    HttpResponse::InternalServerError().finish()
}

/// Structured failure payload returned by every endpoint.
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    error: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_stock: Option<i32>,
}

/// Translate a service failure into an HTTP response. Internal errors
/// are logged and answered with a generic body.
pub(crate) fn error_response(err: ServiceError) -> HttpResponse {
    let (status, kind) = match &err {
        ServiceError::EmptyCart => (StatusCode::BAD_REQUEST, "empty_cart"),
        ServiceError::InvalidQuantity => (StatusCode::BAD_REQUEST, "invalid_quantity"),
        ServiceError::InsufficientStock { .. } => (StatusCode::BAD_REQUEST, "insufficient_stock"),
        ServiceError::InvalidAddress => (StatusCode::BAD_REQUEST, "invalid_address"),
        ServiceError::InvalidPaymentInstrument => {
            (StatusCode::BAD_REQUEST, "invalid_payment_instrument")
        }
        ServiceError::InvalidStatus(_) => (StatusCode::BAD_REQUEST, "invalid_status"),
        ServiceError::InvalidStatusTransition { .. } => {
            (StatusCode::BAD_REQUEST, "invalid_status_transition")
        }
        ServiceError::Form(_) => (StatusCode::BAD_REQUEST, "validation"),
        ServiceError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "invalid_credentials"),
        ServiceError::Unauthorized => (StatusCode::FORBIDDEN, "unauthorized"),
        ServiceError::NotFound => (StatusCode::NOT_FOUND, "not_found"),
        ServiceError::Conflict => (StatusCode::CONFLICT, "conflict"),
        ServiceError::Internal(_) | ServiceError::Repository(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "internal")
        }
    };

    let max_stock = match &err {
        ServiceError::InsufficientStock { available, .. } => Some(*available),
        _ => None,
    };

    let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
        log::error!("Request failed: {err}");
        "internal server error".to_string()
    } else {
        err.to_string()
    };

    HttpResponse::build(status).json(ErrorBody {
        success: false,
        error: kind,
        message,
        max_stock,
    })
}
