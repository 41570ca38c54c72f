use crate::domain::responses::MenuItemResponse;
use crate::errors::{RepositoryError, ServiceError};
use crate::model::MenuItem;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait MenuQueryRepositoryTrait {
    /// Whole catalog ordered by name (the public listing order).
    async fn find_all_by_name(&self) -> Result<Vec<MenuItem>, RepositoryError>;

    /// Available items in catalog order `(category, name)`, for the
    /// creation form's checkbox channel.
    async fn find_available(&self) -> Result<Vec<MenuItem>, RepositoryError>;

    async fn find_available_by_ids(&self, ids: &[i64]) -> Result<Vec<MenuItem>, RepositoryError>;
}

pub type DynMenuQueryRepository = Arc<dyn MenuQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait MenuQueryServiceTrait {
    async fn list_catalog(&self) -> Result<Vec<MenuItemResponse>, ServiceError>;

    async fn list_available(&self) -> Result<Vec<MenuItemResponse>, ServiceError>;
}

pub type DynMenuQueryService = Arc<dyn MenuQueryServiceTrait + Send + Sync>;
