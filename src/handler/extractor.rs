use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::errors::ErrorResponse;

/// JSON extractor that answers every malformed or invalid body with a 400
/// and the flat `{"error": ...}` shape the rest of the API uses.
pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                let body = ErrorResponse {
                    error: rejection.body_text(),
                };
                (StatusCode::BAD_REQUEST, Json(body))
            })?;

        value.validate().map_err(|validation_errors| {
            let body = ErrorResponse {
                error: format_validation_errors(&validation_errors),
            };
            (StatusCode::BAD_REQUEST, Json(body))
        })?;

        Ok(Self(value))
    }
}

fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid {field}"));
            messages.push(message);
        }
    }

    if messages.is_empty() {
        "Validation failed".to_string()
    } else {
        messages.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(serde::Deserialize, Validate)]
    struct Probe {
        #[validate(range(min = 1, message = "Table number must be a positive integer"))]
        table_number: i64,
    }

    #[test]
    fn test_validation_message_is_flattened() {
        let probe = Probe { table_number: 0 };
        let errors = probe.validate().unwrap_err();
        assert_eq!(
            format_validation_errors(&errors),
            "Table number must be a positive integer"
        );
    }
}
