use crate::{
    abstract_trait::{DynMenuQueryRepository, MenuQueryServiceTrait},
    cache::CacheStore,
    domain::responses::MenuItemResponse,
    errors::ServiceError,
    service::CACHE_TTL,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

const MENU_CACHE_KEY: &str = "menu:list";

#[derive(Clone)]
pub struct MenuQueryService {
    query: DynMenuQueryRepository,
    cache_store: Arc<CacheStore>,
}

impl MenuQueryService {
    pub fn new(query: DynMenuQueryRepository, cache_store: Arc<CacheStore>) -> Self {
        Self { query, cache_store }
    }
}

#[async_trait]
impl MenuQueryServiceTrait for MenuQueryService {
    async fn list_catalog(&self) -> Result<Vec<MenuItemResponse>, ServiceError> {
        if let Some(cached) = self
            .cache_store
            .get_from_cache::<Vec<MenuItemResponse>>(MENU_CACHE_KEY)
        {
            return Ok(cached);
        }

        let items = self.query.find_all_by_name().await?;
        let responses: Vec<MenuItemResponse> =
            items.into_iter().map(MenuItemResponse::from).collect();

        info!("Fetched {} menu item(s)", responses.len());
        self.cache_store
            .set_to_cache(MENU_CACHE_KEY, &responses, CACHE_TTL);

        Ok(responses)
    }

    async fn list_available(&self) -> Result<Vec<MenuItemResponse>, ServiceError> {
        let items = self.query.find_available().await?;
        Ok(items.into_iter().map(MenuItemResponse::from).collect())
    }
}
