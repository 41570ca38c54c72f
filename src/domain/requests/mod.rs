mod order;
mod stats;

use serde::{Deserialize, Deserializer};
use std::str::FromStr;

pub use self::order::{
    CreateOrderApiRequest, CreateOrderFormRequest, OrderFilter, OrderFormErrors, OrderListQuery,
    OrderPageQuery, UpdateOrderStatusRequest,
};
pub use self::stats::RevenueQuery;

/// Query-string filters arrive as `""` when the field is submitted blank;
/// treat that the same as the parameter being absent.
pub(crate) fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => T::from_str(raw)
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid value \"{raw}\""))),
    }
}
