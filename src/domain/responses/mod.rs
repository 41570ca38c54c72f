mod menu;
mod order;
mod pagination;
mod stats;

pub use self::menu::MenuItemResponse;
pub use self::order::{CreatedOrderResponse, OrderResponse, StatusUpdatedResponse};
pub use self::pagination::Pagination;
pub use self::stats::{RevenueResponse, StatisticsResponse, StatusCounts};
