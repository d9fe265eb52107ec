use crate::auth::AuthenticatedUser;
use crate::domain::order::{Order, OrderStatus};
use crate::repository::{NotificationWriter, OrderReader, OrderWriter};
use crate::services::{ServiceError, ServiceResult, notifications};

/// Orders belonging to the caller, newest first.
pub fn list_user_orders<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<Vec<Order>>
where
    R: OrderReader + ?Sized,
{
    repo.list_orders_for_user(user.id).map_err(ServiceError::from)
}

/// A single order, visible to its owner only.
pub fn get_user_order<R>(
    repo: &R,
    user: &AuthenticatedUser,
    order_id: i32,
) -> ServiceResult<Order>
where
    R: OrderReader + ?Sized,
{
    let order = repo
        .get_order_by_id(order_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    if order.user_id != user.id {
        return Err(ServiceError::Unauthorized);
    }

    Ok(order)
}

/// Mark an order as acknowledged by its buyer: the first call flips
/// `pending` to `processing`; any later call is a no-op. Invoked by the
/// confirmation page rather than as a hidden side effect of rendering.
pub fn acknowledge_order<R>(
    repo: &R,
    user: &AuthenticatedUser,
    order_id: i32,
) -> ServiceResult<Order>
where
    R: OrderReader + OrderWriter + NotificationWriter + ?Sized,
{
    let order = get_user_order(repo, user, order_id)?;

    if order.status != OrderStatus::Pending {
        return Ok(order);
    }

    let updated = repo
        .update_order_status(order.id, OrderStatus::Processing)
        .map_err(ServiceError::from)?;

    notifications::notify_order_status_changed(repo, &updated);

    Ok(updated)
}

/// Administrative status change. The target status must be one of the
/// known values and the transition must be legal per the order status
/// transition table.
pub fn set_order_status<R>(
    repo: &R,
    user: &AuthenticatedUser,
    order_id: i32,
    status: &str,
) -> ServiceResult<Order>
where
    R: OrderReader + OrderWriter + NotificationWriter + ?Sized,
{
    if !user.is_admin {
        return Err(ServiceError::Unauthorized);
    }

    let next: OrderStatus = status
        .parse()
        .map_err(|_| ServiceError::InvalidStatus(status.to_string()))?;

    let order = repo
        .get_order_by_id(order_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    if !order.status.can_transition_to(next) {
        return Err(ServiceError::InvalidStatusTransition {
            from: order.status,
            to: next,
        });
    }

    let updated = repo
        .update_order_status(order_id, next)
        .map_err(ServiceError::from)?;

    notifications::notify_order_status_changed(repo, &updated);

    Ok(updated)
}
