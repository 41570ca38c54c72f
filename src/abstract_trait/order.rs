use crate::domain::requests::{CreateOrderApiRequest, CreateOrderFormRequest, OrderFilter};
use crate::domain::responses::{OrderResponse, Pagination};
use crate::errors::{RepositoryError, ServiceError};
use crate::model::{Order, OrderItem, OrderStatus};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    /// Full filtered listing, ascending by id (the JSON listing order).
    async fn find_all(&self, filter: &OrderFilter) -> Result<Vec<Order>, RepositoryError>;

    /// One page of the filtered listing, descending by id (the page view
    /// order), plus the total row count for the filter.
    async fn find_page(
        &self,
        filter: &OrderFilter,
        page: i64,
        page_size: i64,
    ) -> Result<(Vec<Order>, i64), RepositoryError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, RepositoryError>;
}

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    async fn create_order(
        &self,
        table_number: i64,
        items: &[OrderItem],
        total_price: f64,
        status: OrderStatus,
    ) -> Result<Order, RepositoryError>;

    /// Status-only update; `items` and `total_price` are left untouched.
    async fn update_status(&self, id: i64, status: OrderStatus) -> Result<Order, RepositoryError>;

    async fn delete_order(&self, id: i64) -> Result<(), RepositoryError>;
}

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn find_all(&self, filter: &OrderFilter) -> Result<Vec<OrderResponse>, ServiceError>;

    async fn find_page(
        &self,
        filter: &OrderFilter,
        page: i64,
    ) -> Result<(Vec<OrderResponse>, Pagination), ServiceError>;

    async fn find_by_id(&self, id: i64) -> Result<OrderResponse, ServiceError>;
}

pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandServiceTrait {
    /// JSON path: items taken verbatim, empty list permitted.
    async fn create_from_api(
        &self,
        req: &CreateOrderApiRequest,
    ) -> Result<OrderResponse, ServiceError>;

    /// Form path: three-channel ingestion; fails with field-scoped errors.
    async fn create_from_form(
        &self,
        req: &CreateOrderFormRequest,
    ) -> Result<OrderResponse, ServiceError>;

    /// Applies a candidate status string; rejects values outside the
    /// lifecycle without touching the order.
    async fn update_status(&self, id: i64, candidate: &str)
    -> Result<OrderResponse, ServiceError>;

    async fn delete(&self, id: i64) -> Result<(), ServiceError>;
}

pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;
