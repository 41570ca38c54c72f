use crate::{
    abstract_trait::{DynOrderQueryRepository, OrderQueryServiceTrait},
    domain::{
        requests::OrderFilter,
        responses::{OrderResponse, Pagination},
    },
    errors::{RepositoryError, ServiceError},
    service::ORDERS_PAGE_SIZE,
};
use async_trait::async_trait;
use tracing::info;

#[derive(Clone)]
pub struct OrderQueryService {
    query: DynOrderQueryRepository,
}

impl OrderQueryService {
    pub fn new(query: DynOrderQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_all(&self, filter: &OrderFilter) -> Result<Vec<OrderResponse>, ServiceError> {
        info!(
            "Listing orders | table: {:?}, status: {:?}",
            filter.table_number, filter.status
        );

        let orders = self.query.find_all(filter).await?;
        Ok(orders.into_iter().map(OrderResponse::from).collect())
    }

    async fn find_page(
        &self,
        filter: &OrderFilter,
        page: i64,
    ) -> Result<(Vec<OrderResponse>, Pagination), ServiceError> {
        let page = page.max(1);

        let (orders, total) = self.query.find_page(filter, page, ORDERS_PAGE_SIZE).await?;

        let pagination = Pagination::new(page, ORDERS_PAGE_SIZE, total);
        let responses = orders.into_iter().map(OrderResponse::from).collect();

        Ok((responses, pagination))
    }

    async fn find_by_id(&self, id: i64) -> Result<OrderResponse, ServiceError> {
        let order = self
            .query
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(OrderResponse::from(order))
    }
}
