use crate::domain::notification::NewNotification;
use crate::domain::order::Order;
use crate::repository::NotificationWriter;

/// Notification writes are fire-and-forget: a failed write is logged
/// and never fails the operation that triggered it.
fn write<R>(repo: &R, notification: NewNotification)
where
    R: NotificationWriter + ?Sized,
{
    if let Err(err) = repo.create_notification(&notification) {
        log::error!("Failed to write notification `{}`: {err}", notification.message);
    }
}

pub fn notify_order_created<R>(repo: &R, order: &Order)
where
    R: NotificationWriter + ?Sized,
{
    write(repo, NewNotification::order_created(order));
}

pub fn notify_order_status_changed<R>(repo: &R, order: &Order)
where
    R: NotificationWriter + ?Sized,
{
    write(repo, NewNotification::order_status_changed(order));
}

pub fn notify_user_registered<R>(repo: &R, username: &str)
where
    R: NotificationWriter + ?Sized,
{
    write(repo, NewNotification::user_registered(username));
}
