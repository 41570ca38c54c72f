mod menu_item;
mod order;

pub use self::menu_item::{MenuCategory, MenuItem};
pub use self::order::{Order, OrderItem, OrderStatus, items_total};
