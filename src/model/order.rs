use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Kitchen/service lifecycle of an order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum OrderStatus {
    Waiting,
    Ready,
    Paid,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [OrderStatus::Waiting, OrderStatus::Ready, OrderStatus::Paid];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Waiting => "waiting",
            OrderStatus::Ready => "ready",
            OrderStatus::Paid => "paid",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Waiting => "Waiting",
            OrderStatus::Ready => "Ready",
            OrderStatus::Paid => "Paid",
        }
    }

    /// CSS badge class used by the rendered list view.
    pub fn badge_class(&self) -> &'static str {
        match self {
            OrderStatus::Waiting => "bg-warning",
            OrderStatus::Ready => "bg-info",
            OrderStatus::Paid => "bg-success",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "waiting" => Ok(OrderStatus::Waiting),
            "ready" => Ok(OrderStatus::Ready),
            "paid" => Ok(OrderStatus::Paid),
            _ => Err(()),
        }
    }
}

/// One line of an order. Copied by value from the menu (or typed in by
/// staff) at creation time; never linked back to the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderItem {
    pub name: String,
    pub price: f64,
}

/// Sum of the line prices. Every write path that touches `items` persists
/// this as `total_price`.
pub fn items_total(items: &[OrderItem]) -> f64 {
    items.iter().map(|item| item.price).sum()
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: i64,
    pub table_number: i64,
    pub items: Json<Vec<OrderItem>>,
    pub total_price: f64,
    pub status: OrderStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::from_str(status.as_str()), Ok(status));
        }
        assert_eq!(OrderStatus::from_str("bogus"), Err(()));
    }

    #[test]
    fn test_items_total() {
        let items = vec![
            OrderItem {
                name: "Pizza".into(),
                price: 12.0,
            },
            OrderItem {
                name: "Juice".into(),
                price: 3.5,
            },
        ];
        assert_eq!(items_total(&items), 15.5);
        assert_eq!(items_total(&[]), 0.0);
    }
}
