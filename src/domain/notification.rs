use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::order::Order;

/// A record written to the admin-facing notification feed.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Notification {
    pub id: i32,
    pub message: String,
    /// Admin page the notification links to.
    pub link: String,
    /// Icon hint for the feed.
    pub icon: String,
    pub icon_color: String,
    pub is_read: bool,
    pub created_at: NaiveDateTime,
}

/// Payload required to write a notification.
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub message: String,
    pub link: String,
    pub icon: String,
    pub icon_color: String,
}

impl NewNotification {
    pub fn new(
        message: impl Into<String>,
        link: impl Into<String>,
        icon: impl Into<String>,
        icon_color: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            link: link.into(),
            icon: icon.into(),
            icon_color: icon_color.into(),
        }
    }

    /// Feed entry for a freshly placed order.
    pub fn order_created(order: &Order) -> Self {
        Self::new(
            format!("New order received: #{}", order.id),
            "/admin/orders",
            "shopping-cart",
            "text-primary",
        )
    }

    /// Feed entry for an order status change.
    pub fn order_status_changed(order: &Order) -> Self {
        Self::new(
            format!("Order #{} is now {}", order.id, order.status),
            "/admin/orders",
            "truck",
            "text-info",
        )
    }

    /// Feed entry for a new account registration.
    pub fn user_registered(username: &str) -> Self {
        Self::new(
            format!("New user registered: {username}"),
            "/admin/users",
            "user-plus",
            "text-success",
        )
    }
}
