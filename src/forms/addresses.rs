use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::address::NewAddress;
use crate::forms::sanitize_inline_text;

const NAME_MAX_LEN: u64 = 100;
const CITY_MAX_LEN: u64 = 50;
const POSTAL_CODE_MAX_LEN: u64 = 10;
const PHONE_MAX_LEN: u64 = 20;

/// Result type returned by the address form helpers.
pub type AddressFormResult<T> = Result<T, AddressFormError>;

/// Errors that can occur while processing address forms.
#[derive(Debug, Error)]
pub enum AddressFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// A required field is empty after sanitization.
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },
}

/// JSON payload submitted when saving a new address.
#[derive(Debug, Deserialize, Validate)]
pub struct AddAddressForm {
    /// Label chosen by the user, e.g. "Home".
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(length(min = 1))]
    pub full_address: String,
    #[validate(length(min = 1, max = CITY_MAX_LEN))]
    pub city: String,
    #[validate(length(min = 1, max = POSTAL_CODE_MAX_LEN))]
    pub postal_code: String,
    #[validate(length(min = 1, max = PHONE_MAX_LEN))]
    pub phone: String,
    #[serde(default)]
    pub is_default: bool,
}

impl AddAddressForm {
    /// Validates and sanitizes the payload into a domain `NewAddress`.
    pub fn into_new_address(self, user_id: i32) -> AddressFormResult<NewAddress> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(AddressFormError::EmptyField { field: "name" });
        }

        let full_address = self.full_address.trim().to_string();
        if full_address.is_empty() {
            return Err(AddressFormError::EmptyField {
                field: "full_address",
            });
        }

        let city = sanitize_inline_text(&self.city);
        if city.is_empty() {
            return Err(AddressFormError::EmptyField { field: "city" });
        }

        let postal_code = sanitize_inline_text(&self.postal_code);
        let phone = sanitize_inline_text(&self.phone);

        let mut new_address = NewAddress::new(user_id, name, full_address, city, postal_code, phone);

        if self.is_default {
            new_address = new_address.default_address();
        }

        Ok(new_address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> AddAddressForm {
        AddAddressForm {
            name: " Home ".to_string(),
            full_address: " 1 Main St\nApt 2 ".to_string(),
            city: "Springfield".to_string(),
            postal_code: "12345".to_string(),
            phone: "5551234".to_string(),
            is_default: true,
        }
    }

    #[test]
    fn sanitizes_and_flags_default() {
        let new_address = form().into_new_address(7).expect("expected success");

        assert_eq!(new_address.user_id, 7);
        assert_eq!(new_address.name, "Home");
        assert_eq!(new_address.full_address, "1 Main St\nApt 2");
        assert!(new_address.is_default);
    }

    #[test]
    fn rejects_blank_name() {
        let mut blank = form();
        blank.name = "   ".to_string();

        let err = blank.into_new_address(7).expect_err("expected failure");
        assert!(matches!(
            err,
            AddressFormError::EmptyField { field: "name" }
        ));
    }
}
