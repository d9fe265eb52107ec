use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// Result type returned by the cart payload helpers.
pub type CartFormResult<T> = Result<T, CartFormError>;

/// Errors that can occur while processing cart payloads.
#[derive(Debug, Error)]
pub enum CartFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

/// JSON payload for adding a product to the cart.
#[derive(Debug, Deserialize, Validate)]
pub struct AddToCartPayload {
    pub product_id: i32,
    /// Units to add; must be at least one.
    #[validate(range(min = 1))]
    pub quantity: i32,
}

impl AddToCartPayload {
    pub fn validated(self) -> CartFormResult<Self> {
        self.validate()?;
        Ok(self)
    }
}

/// JSON payload for setting a cart line's quantity. The quantity is
/// range-checked by the cart service, which reports the maximum
/// satisfiable amount.
#[derive(Debug, Deserialize)]
pub struct UpdateCartPayload {
    pub product_id: i32,
    pub quantity: i32,
}

/// JSON payload for removing a cart line.
#[derive(Debug, Deserialize)]
pub struct RemoveCartPayload {
    pub product_id: i32,
}
