//! Product Errors

use tracing::error;

use tiffin_app::domain::products::ProductsServiceError;

use crate::response::ApiError;

pub(crate) fn into_api_error(error: ProductsServiceError) -> ApiError {
    match error {
        ProductsServiceError::AlreadyExists => ApiError::conflict("Product already exists"),
        ProductsServiceError::NotFound => ApiError::not_found("Product not found"),
        ProductsServiceError::VariationNotFound(variation) => {
            ApiError::not_found(format!("Variation {variation} not found"))
        }
        ProductsServiceError::DuplicateVariation(variation) => {
            ApiError::bad_request(format!("Variation {variation} appears more than once"))
        }
        ProductsServiceError::EmptyStockUpdate => {
            ApiError::bad_request("At least one stock update is required")
        }
        ProductsServiceError::InvalidReference => {
            ApiError::bad_request("Restaurant does not exist")
        }
        ProductsServiceError::MissingRequiredData | ProductsServiceError::InvalidData => {
            ApiError::bad_request("Invalid product payload")
        }
        ProductsServiceError::Variation(source) => ApiError::bad_request(source.to_string()),
        ProductsServiceError::Sql(source) => {
            error!("product storage error: {source}");

            ApiError::internal()
        }
    }
}
