mod orders;

pub use self::orders::page_routes;
