use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::credit_card::NewCreditCard;
use crate::forms::sanitize_inline_text;

const NAME_MAX_LEN: u64 = 100;
const HOLDER_MAX_LEN: u64 = 100;

/// Card numbers are 12 to 19 digits once separators are stripped.
const CARD_NUMBER_MIN_DIGITS: usize = 12;
const CARD_NUMBER_MAX_DIGITS: usize = 19;

/// Result type returned by the card form helpers.
pub type CardFormResult<T> = Result<T, CardFormError>;

/// Errors that can occur while processing card forms.
#[derive(Debug, Error)]
pub enum CardFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("card name cannot be empty")]
    EmptyName,
    #[error("card number must be {CARD_NUMBER_MIN_DIGITS} to {CARD_NUMBER_MAX_DIGITS} digits")]
    InvalidCardNumber,
    #[error("expiry month must be between 1 and 12")]
    InvalidExpiryMonth,
    #[error("expiry year `{value}` is out of range")]
    InvalidExpiryYear { value: i32 },
    #[error("security code must be 3 or 4 digits")]
    InvalidSecurityCode,
}

/// JSON payload submitted when saving a new payment card. The security
/// code is checked and then discarded; it is never persisted.
#[derive(Debug, Deserialize, Validate)]
pub struct AddCardForm {
    /// Label chosen by the user, e.g. "Personal card".
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    pub card_number: String,
    #[validate(length(min = 1, max = HOLDER_MAX_LEN))]
    pub card_holder: String,
    pub expiry_month: i32,
    pub expiry_year: i32,
    pub cvv: String,
    #[serde(default)]
    pub is_default: bool,
}

impl AddCardForm {
    /// Validates and sanitizes the payload into a domain `NewCreditCard`.
    pub fn into_new_card(self, user_id: i32) -> CardFormResult<NewCreditCard> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(CardFormError::EmptyName);
        }

        let card_number = sanitize_card_number(&self.card_number)?;
        let card_holder = sanitize_inline_text(&self.card_holder);

        if !(1..=12).contains(&self.expiry_month) {
            return Err(CardFormError::InvalidExpiryMonth);
        }

        if !(2000..=2099).contains(&self.expiry_year) {
            return Err(CardFormError::InvalidExpiryYear {
                value: self.expiry_year,
            });
        }

        let cvv = self.cvv.trim();
        if !(cvv.len() == 3 || cvv.len() == 4) || !cvv.chars().all(|c| c.is_ascii_digit()) {
            return Err(CardFormError::InvalidSecurityCode);
        }

        let mut new_card = NewCreditCard::new(
            user_id,
            name,
            card_number,
            card_holder,
            self.expiry_month,
            self.expiry_year,
        );

        if self.is_default {
            new_card = new_card.default_card();
        }

        Ok(new_card)
    }
}

/// Strip spaces and dashes, then require a plausible digit count.
fn sanitize_card_number(value: &str) -> CardFormResult<String> {
    let digits: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();

    if !(CARD_NUMBER_MIN_DIGITS..=CARD_NUMBER_MAX_DIGITS).contains(&digits.len())
        || !digits.chars().all(|c| c.is_ascii_digit())
    {
        return Err(CardFormError::InvalidCardNumber);
    }

    Ok(digits)
}
