use crate::{
    abstract_trait::OrderCommandRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::{Order, OrderItem, OrderStatus},
};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::types::Json;
use tracing::{error, info};

const ORDER_COLUMNS: &str = "id, table_number, items, total_price, status, created_at, updated_at";

#[derive(Clone)]
pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create_order(
        &self,
        table_number: i64,
        items: &[OrderItem],
        total_price: f64,
        status: OrderStatus,
    ) -> Result<Order, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let now = Utc::now().naive_utc();

        let sql = format!(
            r#"
            INSERT INTO orders (table_number, items, total_price, status, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?5)
            RETURNING {ORDER_COLUMNS}
            "#
        );

        let order = sqlx::query_as::<_, Order>(&sql)
            .bind(table_number)
            .bind(Json(items.to_vec()))
            .bind(total_price)
            .bind(status)
            .bind(now)
            .fetch_one(&mut *conn)
            .await
            .map_err(|err| {
                error!("Failed to create order for table {table_number}: {err:?}");
                RepositoryError::from(err)
            })?;

        info!("Created order #{} for table {}", order.id, order.table_number);
        Ok(order)
    }

    async fn update_status(&self, id: i64, status: OrderStatus) -> Result<Order, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let now = Utc::now().naive_utc();

        let sql = format!(
            r#"
            UPDATE orders
            SET status = ?2,
                updated_at = ?3
            WHERE id = ?1
            RETURNING {ORDER_COLUMNS}
            "#
        );

        let order = sqlx::query_as::<_, Order>(&sql)
            .bind(id)
            .bind(status)
            .bind(now)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|err| {
                error!("Failed to update status of order {id}: {err:?}");
                RepositoryError::from(err)
            })?
            .ok_or(RepositoryError::NotFound)?;

        info!("Order #{} is now {}", order.id, order.status);
        Ok(order)
    }

    async fn delete_order(&self, id: i64) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM orders WHERE id = ?1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("Failed to delete order {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("Deleted order #{id}");
        Ok(())
    }
}
