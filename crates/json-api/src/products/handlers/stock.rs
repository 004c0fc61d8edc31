//! Variation Stock Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tiffin::variations::{StockInput, StockUpdate, VariationStatus};

use crate::{
    extensions::*,
    products::{errors::into_api_error, get::ProductResponse},
    response::{ApiError, ApiResponse},
    state::State,
};

/// Stock Update Request
///
/// A count of zero marks the variation sold out and a restock makes a sold
/// out variation available again, unless `status` says otherwise.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StockUpdateRequest {
    /// New stock count as a number or numeric string
    #[salvo(schema(value_type = String))]
    pub stock: StockInput,

    /// Status to force regardless of the new count
    #[salvo(schema(value_type = Option<String>))]
    pub status: Option<VariationStatus>,
}

impl From<&StockUpdateRequest> for StockUpdate {
    fn from(request: &StockUpdateRequest) -> Self {
        StockUpdate::new(&request.stock, request.status)
    }
}

/// Variation Stock Handler
#[endpoint(
    tags("products"),
    summary = "Update Variation Stock",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Stock updated, product recomputed"),
        (status_code = StatusCode::NOT_FOUND, description = "Product or variation not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    variation: PathParam<Uuid>,
    json: JsonBody<StockUpdateRequest>,
    depot: &mut Depot,
) -> Result<ApiResponse<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_uuid_or_401()?;
    let update = StockUpdate::from(&json.into_inner());

    let product = state
        .app
        .products
        .update_variation_stock(
            tenant,
            product.into_inner().into(),
            variation.into_inner().into(),
            update,
        )
        .await
        .map_err(into_api_error)?;

    Ok(ApiResponse::ok("Stock updated successfully", product.into()))
}
