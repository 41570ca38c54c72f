use crate::model::{OrderItem, OrderStatus};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Filters shared by the JSON listing and the rendered list page.
/// Both are exact matches and combine with AND.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub table_number: Option<i64>,
    pub status: Option<OrderStatus>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct OrderListQuery {
    #[serde(default, deserialize_with = "super::empty_string_as_none")]
    pub table_number: Option<i64>,

    #[serde(default, deserialize_with = "super::empty_string_as_none")]
    pub status: Option<OrderStatus>,
}

impl From<&OrderListQuery> for OrderFilter {
    fn from(query: &OrderListQuery) -> Self {
        OrderFilter {
            table_number: query.table_number,
            status: query.status,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderPageQuery {
    #[serde(default, deserialize_with = "super::empty_string_as_none")]
    pub table_number: Option<i64>,

    #[serde(default, deserialize_with = "super::empty_string_as_none")]
    pub status: Option<OrderStatus>,

    #[serde(default, deserialize_with = "super::empty_string_as_none")]
    pub page: Option<i64>,
}

impl From<&OrderPageQuery> for OrderFilter {
    fn from(query: &OrderPageQuery) -> Self {
        OrderFilter {
            table_number: query.table_number,
            status: query.status,
        }
    }
}

/// JSON creation body. Items are taken verbatim; an empty list is allowed
/// on this path (the form path rejects it).
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrderApiRequest {
    #[validate(range(min = 1, message = "Table number must be a positive integer"))]
    #[schema(example = 5)]
    pub table_number: i64,

    #[serde(default)]
    pub items: Vec<OrderItem>,

    pub status: Option<OrderStatus>,
}

/// PATCH body. The status arrives as a raw string so an unknown value can be
/// answered with a field error instead of a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderStatusRequest {
    #[schema(example = "ready")]
    pub status: String,
}

/// Raw payload of the order creation form. `items` carries the JSON channel
/// (the field keeps its historical name), `items_text` the free-text lines,
/// `menu_items` the checkbox selection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateOrderFormRequest {
    #[serde(default)]
    pub table_number: Option<String>,

    #[serde(default)]
    pub items_text: String,

    #[serde(default)]
    pub items: String,

    #[serde(default)]
    pub menu_items: Vec<i64>,
}

/// Field-scoped errors for the creation form, one bucket per input, plus the
/// form-level bucket for the "no dish specified" case.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrderFormErrors {
    pub table_number: Vec<String>,
    pub items_text: Vec<String>,
    pub items: Vec<String>,
    pub menu_items: Vec<String>,
    pub form: Vec<String>,
}

impl OrderFormErrors {
    pub fn is_empty(&self) -> bool {
        self.table_number.is_empty()
            && self.items_text.is_empty()
            && self.items.is_empty()
            && self.menu_items.is_empty()
            && self.form.is_empty()
    }

    pub fn join_messages(&self) -> String {
        let mut all = Vec::new();
        all.extend(self.table_number.iter().cloned());
        all.extend(self.items_text.iter().cloned());
        all.extend(self.items.iter().cloned());
        all.extend(self.menu_items.iter().cloned());
        all.extend(self.form.iter().cloned());
        all.join("; ")
    }
}
