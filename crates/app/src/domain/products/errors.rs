//! Products service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;
use tiffin::variations::VariationError;

use crate::domain::products::{data::VariationSetError, records::VariationUuid};

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product already exists")]
    AlreadyExists,

    #[error("product not found")]
    NotFound,

    #[error("variation {0} not found")]
    VariationNotFound(VariationUuid),

    #[error("variation {0} appears more than once")]
    DuplicateVariation(VariationUuid),

    #[error("at least one stock update is required")]
    EmptyStockUpdate,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error(transparent)]
    Variation(#[from] VariationError),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ProductsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

impl From<VariationSetError> for ProductsServiceError {
    fn from(error: VariationSetError) -> Self {
        match error {
            VariationSetError::Variation(error) => Self::Variation(error),
            VariationSetError::DuplicateUuid(uuid) => Self::DuplicateVariation(uuid),
        }
    }
}
