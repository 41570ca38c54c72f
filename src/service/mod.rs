mod menu;
mod order;
mod stats;

pub use self::menu::MenuQueryService;
pub use self::order::{OrderCommandService, OrderCommandServiceDeps, OrderQueryService};
pub use self::stats::StatsService;

/// Page size of the rendered order list.
pub const ORDERS_PAGE_SIZE: i64 = 12;

/// How long the cached read-aggregates (menu, revenue, statistics) may serve
/// a stale snapshot.
pub const CACHE_TTL: std::time::Duration = std::time::Duration::from_secs(300);
