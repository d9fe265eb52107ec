use serde::Serialize;

use crate::auth::AuthenticatedUser;
use crate::domain::credit_card::CreditCard;
use crate::forms::cards::AddCardForm;
use crate::repository::{CreditCardReader, CreditCardWriter};
use crate::services::{ServiceError, ServiceResult};

/// View of a saved card as exposed to clients: the number is masked
/// down to its last four digits.
#[derive(Debug, Serialize)]
pub struct CardView {
    pub id: i32,
    pub name: String,
    pub card_number: String,
    pub card_holder: String,
    pub expiry_month: i32,
    pub expiry_year: i32,
    pub is_default: bool,
}

impl From<CreditCard> for CardView {
    fn from(card: CreditCard) -> Self {
        let card_number = card.masked_number();
        Self {
            id: card.id,
            name: card.name,
            card_number,
            card_holder: card.card_holder,
            expiry_month: card.expiry_month,
            expiry_year: card.expiry_year,
            is_default: card.is_default,
        }
    }
}

/// Saved cards belonging to the caller, masked.
pub fn list_cards<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<Vec<CardView>>
where
    R: CreditCardReader + ?Sized,
{
    let cards = repo.list_credit_cards(user.id).map_err(ServiceError::from)?;
    Ok(cards.into_iter().map(CardView::from).collect())
}

/// Save a new card for the caller. Flagging it default unsets the
/// caller's other defaults atomically.
pub fn create_card<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: AddCardForm,
) -> ServiceResult<CardView>
where
    R: CreditCardWriter + ?Sized,
{
    let payload = form
        .into_new_card(user.id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let created = repo
        .create_credit_card(&payload)
        .map_err(ServiceError::from)?;

    Ok(CardView::from(created))
}

/// Delete one of the caller's cards.
pub fn delete_card<R>(repo: &R, user: &AuthenticatedUser, card_id: i32) -> ServiceResult<()>
where
    R: CreditCardReader + CreditCardWriter + ?Sized,
{
    let card = repo
        .get_credit_card_by_id(card_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    if card.user_id != user.id {
        return Err(ServiceError::Unauthorized);
    }

    repo.delete_credit_card(card_id).map_err(ServiceError::from)
}
