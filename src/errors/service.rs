use crate::domain::requests::OrderFormErrors;
use crate::errors::repository::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    /// Field-scoped failures from the order creation form.
    #[error("Form validation failed")]
    Form(OrderFormErrors),

    /// A single rejected input value (bad status, unparsable date, ...).
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
