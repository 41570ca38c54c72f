use crate::{
    abstract_trait::{
        DynMenuQueryRepository, DynMenuQueryService, DynOrderCommandRepository,
        DynOrderCommandService, DynOrderQueryRepository, DynOrderQueryService, DynStatsRepository,
        DynStatsService,
    },
    cache::CacheStore,
    config::ConnectionPool,
    repository::{
        MenuQueryRepository, OrderCommandRepository, OrderQueryRepository, StatsRepository,
    },
    service::{
        MenuQueryService, OrderCommandService, OrderCommandServiceDeps, OrderQueryService,
        StatsService,
    },
};
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub order_query_service: DynOrderQueryService,
    pub order_command_service: DynOrderCommandService,
    pub menu_service: DynMenuQueryService,
    pub stats_service: DynStatsService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("order_query_service", &"DynOrderQueryService")
            .field("order_command_service", &"DynOrderCommandService")
            .field("menu_service", &"DynMenuQueryService")
            .field("stats_service", &"DynStatsService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let cache_store = Arc::new(CacheStore::new());

        let order_query_repository =
            Arc::new(OrderQueryRepository::new(pool.clone())) as DynOrderQueryRepository;
        let order_command_repository =
            Arc::new(OrderCommandRepository::new(pool.clone())) as DynOrderCommandRepository;
        let menu_repository =
            Arc::new(MenuQueryRepository::new(pool.clone())) as DynMenuQueryRepository;
        let stats_repository = Arc::new(StatsRepository::new(pool)) as DynStatsRepository;

        let order_query_service =
            Arc::new(OrderQueryService::new(order_query_repository.clone())) as DynOrderQueryService;

        let order_command_service = Arc::new(OrderCommandService::new(OrderCommandServiceDeps {
            query: order_query_repository,
            command: order_command_repository,
            menu: menu_repository.clone(),
        })) as DynOrderCommandService;

        let menu_service = Arc::new(MenuQueryService::new(menu_repository, cache_store.clone()))
            as DynMenuQueryService;

        let stats_service =
            Arc::new(StatsService::new(stats_repository, cache_store)) as DynStatsService;

        Self {
            order_query_service,
            order_command_service,
            menu_service,
            stats_service,
        }
    }
}
