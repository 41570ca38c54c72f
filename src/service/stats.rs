use crate::{
    abstract_trait::{DynStatsRepository, StatsServiceTrait},
    cache::CacheStore,
    domain::{
        requests::RevenueQuery,
        responses::{RevenueResponse, StatisticsResponse},
    },
    errors::ServiceError,
    service::CACHE_TTL,
};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use std::sync::Arc;
use tracing::info;

const STATISTICS_CACHE_KEY: &str = "statistics";

#[derive(Clone)]
pub struct StatsService {
    stats: DynStatsRepository,
    cache_store: Arc<CacheStore>,
}

impl StatsService {
    pub fn new(stats: DynStatsRepository, cache_store: Arc<CacheStore>) -> Self {
        Self { stats, cache_store }
    }
}

/// Parses a revenue bound: a full timestamp, or a bare date taken as the
/// start (lower bound) or end (upper bound) of that day, keeping both
/// bounds inclusive.
fn parse_bound(value: &str, end_of_day: bool) -> Result<NaiveDateTime, ServiceError> {
    let value = value.trim();

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(timestamp);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        let time = if end_of_day {
            date.and_hms_opt(23, 59, 59)
        } else {
            date.and_hms_opt(0, 0, 0)
        };
        if let Some(timestamp) = time {
            return Ok(timestamp);
        }
    }

    Err(ServiceError::Validation(format!("Invalid date: \"{value}\"")))
}

#[async_trait]
impl StatsServiceTrait for StatsService {
    async fn revenue(&self, query: &RevenueQuery) -> Result<RevenueResponse, ServiceError> {
        let from = query
            .date_from
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(|v| parse_bound(v, false))
            .transpose()?;
        let to = query
            .date_to
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(|v| parse_bound(v, true))
            .transpose()?;

        let cache_key = format!(
            "revenue:from:{}:to:{}",
            from.map(|t| t.to_string()).unwrap_or_default(),
            to.map(|t| t.to_string()).unwrap_or_default()
        );

        if let Some(cached) = self.cache_store.get_from_cache::<RevenueResponse>(&cache_key) {
            return Ok(cached);
        }

        let revenue = self.stats.paid_revenue(from, to).await?;
        let response = RevenueResponse { revenue };

        info!("Computed revenue {:.2} for {:?}..{:?}", revenue, from, to);
        self.cache_store.set_to_cache(&cache_key, &response, CACHE_TTL);

        Ok(response)
    }

    async fn statistics(&self) -> Result<StatisticsResponse, ServiceError> {
        if let Some(cached) = self
            .cache_store
            .get_from_cache::<StatisticsResponse>(STATISTICS_CACHE_KEY)
        {
            return Ok(cached);
        }

        let status_counts = self.stats.status_counts().await?;
        let total_orders = self.stats.total_orders().await?;
        let average_order_value = self.stats.average_paid_total().await?;

        let response = StatisticsResponse {
            status_counts,
            total_orders,
            average_order_value,
        };

        self.cache_store
            .set_to_cache(STATISTICS_CACHE_KEY, &response, CACHE_TTL);

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bound_full_timestamp() {
        let parsed = parse_bound("2026-08-25T12:30:00", false).unwrap();
        assert_eq!(parsed.to_string(), "2026-08-25 12:30:00");
    }

    #[test]
    fn test_parse_bound_bare_date_is_day_inclusive() {
        let from = parse_bound("2026-08-25", false).unwrap();
        let to = parse_bound("2026-08-25", true).unwrap();
        assert_eq!(from.to_string(), "2026-08-25 00:00:00");
        assert_eq!(to.to_string(), "2026-08-25 23:59:59");
    }

    #[test]
    fn test_parse_bound_rejects_garbage() {
        assert!(parse_bound("yesterday", false).is_err());
    }
}
