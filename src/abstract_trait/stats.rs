use crate::domain::requests::RevenueQuery;
use crate::domain::responses::{RevenueResponse, StatisticsResponse, StatusCounts};
use crate::errors::{RepositoryError, ServiceError};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::sync::Arc;

#[async_trait]
pub trait StatsRepositoryTrait {
    /// SUM of `total_price` over paid orders inside the optional inclusive
    /// creation-time bounds; 0 when nothing matches.
    async fn paid_revenue(
        &self,
        from: Option<NaiveDateTime>,
        to: Option<NaiveDateTime>,
    ) -> Result<f64, RepositoryError>;

    async fn status_counts(&self) -> Result<StatusCounts, RepositoryError>;

    async fn total_orders(&self) -> Result<i64, RepositoryError>;

    /// Average `total_price` over paid orders; 0 when there are none.
    async fn average_paid_total(&self) -> Result<f64, RepositoryError>;
}

pub type DynStatsRepository = Arc<dyn StatsRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait StatsServiceTrait {
    async fn revenue(&self, query: &RevenueQuery) -> Result<RevenueResponse, ServiceError>;

    async fn statistics(&self) -> Result<StatisticsResponse, ServiceError>;
}

pub type DynStatsService = Arc<dyn StatsServiceTrait + Send + Sync>;
