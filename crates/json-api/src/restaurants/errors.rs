//! Restaurant Errors

use tracing::error;

use tiffin_app::domain::restaurants::RestaurantsServiceError;

use crate::response::ApiError;

pub(crate) fn into_api_error(error: RestaurantsServiceError) -> ApiError {
    match error {
        RestaurantsServiceError::AlreadyExists => ApiError::conflict("Restaurant already exists"),
        RestaurantsServiceError::NotFound => ApiError::not_found("Restaurant not found"),
        RestaurantsServiceError::MissingRequiredData | RestaurantsServiceError::InvalidData => {
            ApiError::bad_request("Invalid restaurant payload")
        }
        RestaurantsServiceError::Sql(source) => {
            error!("restaurant storage error: {source}");

            ApiError::internal()
        }
    }
}
