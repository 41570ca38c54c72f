use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RevenueResponse {
    pub revenue: f64,
}

/// Per-status order counts. All three statuses are always present, zero
/// included.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct StatusCounts {
    pub waiting: i64,
    pub ready: i64,
    pub paid: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatisticsResponse {
    pub status_counts: StatusCounts,
    pub total_orders: i64,
    pub average_order_value: f64,
}
