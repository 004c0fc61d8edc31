//! Auth service errors.

use sqlx::Error;
use thiserror::Error;

use crate::domain::tenants::records::TenantUuid;

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("token not found")]
    NotFound,

    #[error("tenant {0} does not exist")]
    UnknownTenant(TenantUuid),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for AuthServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        Self::Sql(error)
    }
}
