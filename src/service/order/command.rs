use crate::{
    abstract_trait::{
        DynMenuQueryRepository, DynOrderCommandRepository, DynOrderQueryRepository,
        OrderCommandServiceTrait,
    },
    domain::{
        requests::{CreateOrderApiRequest, CreateOrderFormRequest, OrderFormErrors},
        responses::OrderResponse,
    },
    errors::{RepositoryError, ServiceError},
    ingest,
    model::{OrderItem, OrderStatus, items_total},
};
use async_trait::async_trait;
use std::str::FromStr;
use tracing::info;

pub struct OrderCommandServiceDeps {
    pub query: DynOrderQueryRepository,
    pub command: DynOrderCommandRepository,
    pub menu: DynMenuQueryRepository,
}

#[derive(Clone)]
pub struct OrderCommandService {
    query: DynOrderQueryRepository,
    command: DynOrderCommandRepository,
    menu: DynMenuQueryRepository,
}

impl OrderCommandService {
    pub fn new(deps: OrderCommandServiceDeps) -> Self {
        let OrderCommandServiceDeps {
            query,
            command,
            menu,
        } = deps;
        Self {
            query,
            command,
            menu,
        }
    }

    fn parse_table_number(raw: Option<&str>, errors: &mut OrderFormErrors) -> Option<i64> {
        let raw = raw.map(str::trim).unwrap_or_default();
        if raw.is_empty() {
            errors
                .table_number
                .push("Table number is required".to_string());
            return None;
        }
        match raw.parse::<i64>() {
            Ok(n) if n >= 1 => Some(n),
            _ => {
                errors
                    .table_number
                    .push("Table number must be a positive integer".to_string());
                None
            }
        }
    }

    /// Resolves the checkbox selection against the available catalog. Each
    /// resolved item contributes a by-value copy of its name and price.
    async fn resolve_menu_selection(
        &self,
        selected: &[i64],
        errors: &mut OrderFormErrors,
    ) -> Result<Vec<OrderItem>, ServiceError> {
        let mut ids: Vec<i64> = selected.to_vec();
        ids.sort_unstable();
        ids.dedup();

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let found = self.menu.find_available_by_ids(&ids).await?;

        for id in &ids {
            if !found.iter().any(|item| item.id == *id) {
                errors
                    .menu_items
                    .push(format!("{id} is not an available menu item"));
            }
        }

        Ok(found
            .into_iter()
            .map(|item| OrderItem {
                name: item.name,
                price: item.price,
            })
            .collect())
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create_from_api(
        &self,
        req: &CreateOrderApiRequest,
    ) -> Result<OrderResponse, ServiceError> {
        let total_price = items_total(&req.items);
        let status = req.status.unwrap_or(OrderStatus::Waiting);

        let order = self
            .command
            .create_order(req.table_number, &req.items, total_price, status)
            .await?;

        Ok(OrderResponse::from(order))
    }

    async fn create_from_form(
        &self,
        req: &CreateOrderFormRequest,
    ) -> Result<OrderResponse, ServiceError> {
        let mut errors = OrderFormErrors::default();

        let table_number = Self::parse_table_number(req.table_number.as_deref(), &mut errors);

        let catalog_items = self
            .resolve_menu_selection(&req.menu_items, &mut errors)
            .await?;

        let items = match ingest::merge_channels(&req.items_text, &req.items, catalog_items) {
            Ok(items) => items,
            Err(channel_errors) => {
                errors.items_text = channel_errors.items_text;
                errors.items = channel_errors.items;
                errors.form = channel_errors.form;
                Vec::new()
            }
        };

        if !errors.is_empty() {
            return Err(ServiceError::Form(errors));
        }

        // parse_table_number left an error whenever it returned None, so the
        // unwrap path is unreachable past the check above
        let table_number = table_number.ok_or_else(|| {
            ServiceError::Internal("table number missing after validation".to_string())
        })?;

        let total_price = items_total(&items);

        let order = self
            .command
            .create_order(table_number, &items, total_price, OrderStatus::Waiting)
            .await?;

        info!(
            "Created order #{} with {} item(s), total {:.2}",
            order.id,
            order.items.0.len(),
            order.total_price
        );

        Ok(OrderResponse::from(order))
    }

    async fn update_status(
        &self,
        id: i64,
        candidate: &str,
    ) -> Result<OrderResponse, ServiceError> {
        // existence first: an unknown order is a 404 even when the candidate
        // status is also invalid
        self.query
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let status = OrderStatus::from_str(candidate)
            .map_err(|_| ServiceError::Validation("Invalid status".to_string()))?;

        let order = self.command.update_status(id, status).await?;
        Ok(OrderResponse::from(order))
    }

    async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        self.command.delete_order(id).await?;
        Ok(())
    }
}
