use crate::{
    abstract_trait::OrderQueryRepositoryTrait, config::ConnectionPool,
    domain::requests::OrderFilter, errors::RepositoryError, model::Order,
};
use async_trait::async_trait;
use sqlx::FromRow;
use tracing::error;

const ORDER_COLUMNS: &str = "id, table_number, items, total_price, status, created_at, updated_at";

#[derive(FromRow)]
struct CountedOrderRow {
    #[sqlx(flatten)]
    order: Order,
    total_count: i64,
}

#[derive(Clone)]
pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_all(&self, filter: &OrderFilter) -> Result<Vec<Order>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            r#"
            SELECT {ORDER_COLUMNS}
            FROM orders
            WHERE (?1 IS NULL OR table_number = ?1)
              AND (?2 IS NULL OR status = ?2)
            ORDER BY id ASC
            "#
        );

        let orders = sqlx::query_as::<_, Order>(&sql)
            .bind(filter.table_number)
            .bind(filter.status)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("Failed to fetch orders: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(orders)
    }

    async fn find_page(
        &self,
        filter: &OrderFilter,
        page: i64,
        page_size: i64,
    ) -> Result<(Vec<Order>, i64), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let offset = (page - 1).max(0) * page_size;

        let sql = format!(
            r#"
            SELECT {ORDER_COLUMNS}, COUNT(*) OVER() AS total_count
            FROM orders
            WHERE (?1 IS NULL OR table_number = ?1)
              AND (?2 IS NULL OR status = ?2)
            ORDER BY id DESC
            LIMIT ?3 OFFSET ?4
            "#
        );

        let rows = sqlx::query_as::<_, CountedOrderRow>(&sql)
            .bind(filter.table_number)
            .bind(filter.status)
            .bind(page_size)
            .bind(offset)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("Failed to fetch order page: {e:?}");
                RepositoryError::from(e)
            })?;

        let total = rows.first().map(|r| r.total_count).unwrap_or(0);
        let orders = rows.into_iter().map(|r| r.order).collect();

        Ok((orders, total))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = ?1");

        let order = sqlx::query_as::<_, Order>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok(order)
    }
}
