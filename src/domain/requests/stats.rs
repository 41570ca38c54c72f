use serde::Deserialize;
use utoipa::IntoParams;

/// Optional inclusive creation-time bounds for the revenue endpoint.
/// Each bound accepts `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS`; a blank value
/// means no bound.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct RevenueQuery {
    #[serde(default, deserialize_with = "super::empty_string_as_none")]
    pub date_from: Option<String>,

    #[serde(default, deserialize_with = "super::empty_string_as_none")]
    pub date_to: Option<String>,
}
