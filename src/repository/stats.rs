use crate::{
    abstract_trait::StatsRepositoryTrait, config::ConnectionPool,
    domain::responses::StatusCounts, errors::RepositoryError, model::OrderStatus,
};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use tracing::error;

#[derive(Clone)]
pub struct StatsRepository {
    db: ConnectionPool,
}

impl StatsRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StatsRepositoryTrait for StatsRepository {
    async fn paid_revenue(
        &self,
        from: Option<NaiveDateTime>,
        to: Option<NaiveDateTime>,
    ) -> Result<f64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let revenue = sqlx::query_scalar::<_, f64>(
            r#"
            SELECT COALESCE(SUM(total_price), 0.0)
            FROM orders
            WHERE status = 'paid'
              AND (?1 IS NULL OR created_at >= ?1)
              AND (?2 IS NULL OR created_at <= ?2)
            "#,
        )
        .bind(from)
        .bind(to)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("Failed to compute revenue: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(revenue)
    }

    async fn status_counts(&self) -> Result<StatusCounts, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let rows = sqlx::query_as::<_, (OrderStatus, i64)>(
            "SELECT status, COUNT(*) FROM orders GROUP BY status",
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("Failed to count orders by status: {e:?}");
            RepositoryError::from(e)
        })?;

        let mut counts = StatusCounts::default();
        for (status, count) in rows {
            match status {
                OrderStatus::Waiting => counts.waiting = count,
                OrderStatus::Ready => counts.ready = count,
                OrderStatus::Paid => counts.paid = count,
            }
        }

        Ok(counts)
    }

    async fn total_orders(&self) -> Result<i64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM orders")
            .fetch_one(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok(total)
    }

    async fn average_paid_total(&self) -> Result<f64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let average = sqlx::query_scalar::<_, f64>(
            "SELECT COALESCE(AVG(total_price), 0.0) FROM orders WHERE status = 'paid'",
        )
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(average)
    }
}
