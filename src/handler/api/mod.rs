pub mod menu;
pub mod orders;
pub mod stats;

pub use self::menu::menu_routes;
pub use self::orders::order_routes;
pub use self::stats::stats_routes;
