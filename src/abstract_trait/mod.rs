mod menu;
mod order;
mod stats;

pub use self::menu::{
    DynMenuQueryRepository, DynMenuQueryService, MenuQueryRepositoryTrait, MenuQueryServiceTrait,
};
pub use self::order::{
    DynOrderCommandRepository, DynOrderCommandService, DynOrderQueryRepository,
    DynOrderQueryService, OrderCommandRepositoryTrait, OrderCommandServiceTrait,
    OrderQueryRepositoryTrait, OrderQueryServiceTrait,
};
pub use self::stats::{
    DynStatsRepository, DynStatsService, StatsRepositoryTrait, StatsServiceTrait,
};
