//! Commission Errors

use tracing::error;

use tiffin_app::domain::commissions::CommissionsServiceError;

use crate::response::ApiError;

pub(crate) fn into_api_error(error: CommissionsServiceError) -> ApiError {
    match error {
        CommissionsServiceError::AlreadyExists => {
            ApiError::conflict("Restaurant already has a commission")
        }
        CommissionsServiceError::NotFound => ApiError::not_found("Commission not found"),
        CommissionsServiceError::InvalidReference => {
            ApiError::bad_request("Restaurant does not exist")
        }
        CommissionsServiceError::MissingRequiredData | CommissionsServiceError::InvalidData => {
            ApiError::bad_request("Invalid commission payload")
        }
        CommissionsServiceError::Commission(source) => ApiError::bad_request(source.to_string()),
        CommissionsServiceError::Sql(source) => {
            error!("commission storage error: {source}");

            ApiError::internal()
        }
    }
}
