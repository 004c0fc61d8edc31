//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use tracing::{debug, error};

use crate::response::ApiError;

/// Map any error to an [`ApiError`].
pub(crate) trait ResultExt<T> {
    /// Log the error and hide it behind a generic 500.
    fn or_500(self, context: &str) -> Result<T, ApiError>;

    /// Reject the request with `message`.
    fn or_400(self, message: &str) -> Result<T, ApiError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, ApiError> {
        self.map_err(|error| {
            error!("{context}: {error}");

            ApiError::internal()
        })
    }

    fn or_400(self, message: &str) -> Result<T, ApiError> {
        self.map_err(|error| {
            debug!("{message}: {error}");

            ApiError::bad_request(message)
        })
    }
}
