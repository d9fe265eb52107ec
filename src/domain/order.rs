use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Lifecycle states of a placed order.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order has been placed but not yet acknowledged by the buyer.
    #[default]
    Pending,
    /// Order has been acknowledged and is being prepared.
    Processing,
    /// Order has been handed to the carrier.
    Shipped,
    /// Order has reached the buyer.
    Delivered,
    /// Order was cancelled before shipping.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Legal transitions: forward through the fulfilment chain, with
    /// cancellation possible until the order ships.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Pending, Processing)
                | (Pending, Cancelled)
                | (Processing, Shipped)
                | (Processing, Cancelled)
                | (Shipped, Delivered)
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(OrderStatus::Pending),
            "processing" => Ok(OrderStatus::Processing),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            _ => Err(()),
        }
    }
}

/// Domain representation of a placed order with its line items.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Order {
    /// Unique identifier of the order.
    pub id: i32,
    /// User who placed the order.
    pub user_id: i32,
    /// Shipping address chosen at checkout.
    pub address_id: i32,
    /// Payment card chosen at checkout.
    pub credit_card_id: i32,
    /// Tax-inclusive total in cents, fixed at creation.
    pub total_cents: i64,
    /// Current lifecycle status.
    pub status: OrderStatus,
    /// Line items snapshotted at checkout.
    pub items: Vec<OrderItem>,
    /// Timestamp for when the order was placed.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last status change.
    pub updated_at: NaiveDateTime,
}

impl Order {
    /// Total number of units across all items.
    pub fn item_count(&self) -> i32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

/// One order line: product, quantity and the unit price paid.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct OrderItem {
    /// Product the line refers to.
    pub product_id: i32,
    /// Product name at the time of purchase.
    pub name: String,
    /// Unit price in cents at the time of purchase, immune to later
    /// catalog price changes.
    pub price_cents: i64,
    /// Units purchased.
    pub quantity: i32,
}

impl OrderItem {
    pub fn line_total_cents(&self) -> i64 {
        self.price_cents * i64::from(self.quantity)
    }
}

/// Payload required to insert a new order with its items.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: i32,
    pub address_id: i32,
    pub credit_card_id: i32,
    /// Tax-inclusive total in cents.
    pub total_cents: i64,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    /// Timestamp captured when the payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewOrder {
    /// Build a new pending order payload with the current timestamp.
    pub fn new(user_id: i32, address_id: i32, credit_card_id: i32, total_cents: i64) -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            user_id,
            address_id,
            credit_card_id,
            total_cents,
            status: OrderStatus::default(),
            items: Vec::new(),
            updated_at: now,
        }
    }

    /// Attach the line items purchased with this order.
    pub fn with_items(mut self, items: Vec<OrderItem>) -> Self {
        self.items = items;
        self
    }
}
