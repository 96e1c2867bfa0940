//! Inventory service errors.

use std::num::TryFromIntError;

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InventoryServiceError {
    #[error("stored inventory violates a constraint")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),

    #[error("quantity does not fit in storage")]
    QuantityOutOfRange(#[from] TryFromIntError),
}

impl From<Error> for InventoryServiceError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::CheckViolation | ErrorKind::NotNullViolation) => Self::InvalidData,
            Some(_) | None => Self::Sql(error),
        }
    }
}
