//! Update Product Handler

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

use tiffin_app::domain::products::data::ProductUpdate;

use crate::{
    extensions::*,
    products::{create::VariationRequest, errors::into_api_error, get::ProductResponse},
    response::{ApiError, ApiResponse},
    state::State,
};

/// Update Product Request
///
/// Replaces the whole variation list. Variations sent with a `uuid` keep it.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProductRequest {
    /// Display name
    pub name: String,

    /// At least one variation
    pub variations: Vec<VariationRequest>,
}

impl From<UpdateProductRequest> for ProductUpdate {
    fn from(request: UpdateProductRequest) -> Self {
        ProductUpdate {
            name: request.name,
            variations: request.variations.into_iter().map(Into::into).collect(),
        }
    }
}

/// Product Update Handler
#[endpoint(
    tags("products"),
    summary = "Update Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid variations"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(product, json, depot),
    fields(
        tenant_uuid = tracing::field::Empty,
        product_uuid = tracing::field::Empty,
        variations = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<ApiResponse<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_uuid_or_401()?;
    let request = json.into_inner();
    let product = product.into_inner();

    let span = tracing::Span::current();

    span.record("tenant_uuid", tracing::field::display(tenant));
    span.record("product_uuid", tracing::field::display(product));
    span.record("variations", request.variations.len());

    let updated = state
        .app
        .products
        .update_product(tenant, product.into(), request.into())
        .await
        .map_err(into_api_error)?;

    tracing::info!(product_uuid = %product, stock = updated.stock, "updated product");

    Ok(ApiResponse::ok("Product updated successfully", updated.into()))
}
