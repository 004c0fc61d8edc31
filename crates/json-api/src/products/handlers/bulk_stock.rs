//! Bulk Stock Update Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tiffin::variations::{StockInput, StockUpdate, VariationStatus};
use tiffin_app::domain::products::data::VariationStockUpdate;

use crate::{
    extensions::*,
    products::{errors::into_api_error, get::ProductResponse},
    response::{ApiError, ApiResponse},
    state::State,
};

/// One entry of a bulk stock update.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StockUpdateEntry {
    /// Product owning the variation
    pub product: Uuid,

    /// Variation to update
    pub variation: Uuid,

    /// New stock count as a number or numeric string
    #[salvo(schema(value_type = String))]
    pub stock: StockInput,

    /// Status to force regardless of the new count
    #[salvo(schema(value_type = Option<String>))]
    pub status: Option<VariationStatus>,
}

impl From<StockUpdateEntry> for VariationStockUpdate {
    fn from(entry: StockUpdateEntry) -> Self {
        VariationStockUpdate {
            product: entry.product.into(),
            variation: entry.variation.into(),
            update: StockUpdate::new(&entry.stock, entry.status),
        }
    }
}

/// Bulk Stock Update Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BulkStockUpdateRequest {
    /// Applied in order, all or nothing
    pub updates: Vec<StockUpdateEntry>,
}

/// Bulk Stock Update Handler
///
/// Returns every touched product once, in first-touched order.
#[endpoint(
    tags("products"),
    summary = "Bulk Update Variation Stock",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "All updates applied"),
        (status_code = StatusCode::NOT_FOUND, description = "A product or variation was not found; nothing applied"),
        (status_code = StatusCode::BAD_REQUEST, description = "Empty or malformed batch; nothing applied"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.bulk_stock_update",
    skip(json, depot),
    fields(tenant_uuid = tracing::field::Empty, updates = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<BulkStockUpdateRequest>,
    depot: &mut Depot,
) -> Result<ApiResponse<Vec<ProductResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_uuid_or_401()?;
    let updates: Vec<VariationStockUpdate> = json
        .into_inner()
        .updates
        .into_iter()
        .map(Into::into)
        .collect();

    let span = tracing::Span::current();

    span.record("tenant_uuid", tracing::field::display(tenant));
    span.record("updates", updates.len());

    let products = state
        .app
        .products
        .bulk_update_stock(tenant, updates)
        .await
        .map_err(into_api_error)?;

    Ok(ApiResponse::ok(
        "Stock updated successfully",
        products.into_iter().map(Into::into).collect(),
    ))
}
