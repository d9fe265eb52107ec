use crate::auth::AuthenticatedUser;
use crate::domain::cart::{Cart, CartTotals};
use crate::domain::order::{NewOrder, Order, OrderItem};
use crate::forms::checkout::CheckoutPayload;
use crate::repository::{AddressReader, CreditCardReader, NotificationWriter, OrderWriter};
use crate::services::{ServiceError, ServiceResult, notifications};

/// Place an order from the session cart.
///
/// Validates the cart and the chosen address and card, then hands the
/// lines to the repository, which re-checks stock and decrements it
/// inside a single transaction: either the order, its items and every
/// decrement are committed together, or nothing is. On success the
/// cart is cleared and the admin feed is notified.
pub fn place_order<R>(
    repo: &R,
    user: &AuthenticatedUser,
    cart: &mut Cart,
    payload: CheckoutPayload,
) -> ServiceResult<Order>
where
    R: AddressReader + CreditCardReader + OrderWriter + NotificationWriter + ?Sized,
{
    // Lines clamped to zero by reconciliation are not orderable.
    let items: Vec<OrderItem> = cart
        .lines()
        .filter(|line| line.quantity > 0)
        .map(|line| OrderItem {
            product_id: line.product_id,
            name: line.name.clone(),
            price_cents: line.unit_price_cents,
            quantity: line.quantity,
        })
        .collect();

    if items.is_empty() {
        return Err(ServiceError::EmptyCart);
    }

    let address = repo
        .get_address_by_id(payload.address_id)
        .map_err(ServiceError::from)?
        .filter(|address| address.user_id == user.id)
        .ok_or(ServiceError::InvalidAddress)?;

    let card = repo
        .get_credit_card_by_id(payload.credit_card_id)
        .map_err(ServiceError::from)?
        .filter(|card| card.user_id == user.id)
        .ok_or(ServiceError::InvalidPaymentInstrument)?;

    let subtotal_cents: i64 = items.iter().map(OrderItem::line_total_cents).sum();
    let totals = CartTotals::from_subtotal(subtotal_cents);

    let new_order =
        NewOrder::new(user.id, address.id, card.id, totals.grand_total_cents).with_items(items);

    let order = repo.create_order(&new_order).map_err(ServiceError::from)?;

    cart.clear();
    notifications::notify_order_created(repo, &order);

    Ok(order)
}
