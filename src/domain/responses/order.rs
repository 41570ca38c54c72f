use crate::model::{Order, OrderItem, OrderStatus};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    pub id: i64,
    pub table_number: i64,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub total_price: f64,
    pub created_at: NaiveDateTime,
}

impl From<Order> for OrderResponse {
    fn from(value: Order) -> Self {
        OrderResponse {
            id: value.id,
            table_number: value.table_number,
            items: value.items.0,
            status: value.status,
            total_price: value.total_price,
            created_at: value.created_at,
        }
    }
}

/// Body of a successful `POST /api/orders/`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedOrderResponse {
    pub id: i64,
}

/// Body of a successful `PATCH /api/orders/{id}/`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusUpdatedResponse {
    pub success: bool,
    pub message: String,
}
