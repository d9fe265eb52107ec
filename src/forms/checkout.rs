use serde::Deserialize;

/// JSON payload submitted when placing an order: the saved address and
/// card chosen at checkout. Ownership is verified by the checkout
/// service.
#[derive(Debug, Deserialize)]
pub struct CheckoutPayload {
    pub address_id: i32,
    pub credit_card_id: i32,
}
