mod menu;
mod order;
mod stats;

pub use self::menu::MenuQueryRepository;
pub use self::order::{OrderCommandRepository, OrderQueryRepository};
pub use self::stats::StatsRepository;
