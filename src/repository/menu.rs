use crate::{
    abstract_trait::MenuQueryRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::MenuItem,
};
use async_trait::async_trait;
use sqlx::QueryBuilder;
use tracing::error;

const MENU_COLUMNS: &str =
    "id, name, price, category, description, is_available, created_at, updated_at";

#[derive(Clone)]
pub struct MenuQueryRepository {
    db: ConnectionPool,
}

impl MenuQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MenuQueryRepositoryTrait for MenuQueryRepository {
    async fn find_all_by_name(&self) -> Result<Vec<MenuItem>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!("SELECT {MENU_COLUMNS} FROM menu_items ORDER BY name ASC");

        let items = sqlx::query_as::<_, MenuItem>(&sql)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("Failed to fetch menu items: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(items)
    }

    async fn find_available(&self) -> Result<Vec<MenuItem>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            "SELECT {MENU_COLUMNS} FROM menu_items WHERE is_available = 1 ORDER BY category ASC, name ASC"
        );

        let items = sqlx::query_as::<_, MenuItem>(&sql)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("Failed to fetch available menu items: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(items)
    }

    async fn find_available_by_ids(&self, ids: &[i64]) -> Result<Vec<MenuItem>, RepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let mut builder = QueryBuilder::new(format!(
            "SELECT {MENU_COLUMNS} FROM menu_items WHERE is_available = 1 AND id IN ("
        ));
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(id);
        }
        builder.push(") ORDER BY category ASC, name ASC");

        let items = builder
            .build_query_as::<MenuItem>()
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("Failed to fetch menu items by ids: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(items)
    }
}
