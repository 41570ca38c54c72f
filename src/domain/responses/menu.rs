use crate::model::MenuItem;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public menu listing entry. `category` carries the display label, not the
/// stored code.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MenuItemResponse {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub description: String,
}

impl From<MenuItem> for MenuItemResponse {
    fn from(value: MenuItem) -> Self {
        MenuItemResponse {
            id: value.id,
            name: value.name,
            price: value.price,
            category: value.category.label().to_string(),
            description: value.description,
        }
    }
}
