//! Commission Quote Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    oapi::{
        ToSchema,
        extract::{PathParam, QueryParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    commissions::errors::into_api_error,
    extensions::*,
    response::{ApiError, ApiResponse},
    state::State,
};

/// Commission Quote Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct QuoteResponse {
    /// Order subtotal the quote was computed for
    #[salvo(schema(value_type = String))]
    pub subtotal: Decimal,

    /// Commission owed, rounded to two places; zero when disabled
    #[salvo(schema(value_type = String))]
    pub commission: Decimal,
}

/// Commission Quote Handler
///
/// Computes what the commission would take from an order subtotal.
#[endpoint(
    tags("restaurant-commissions"),
    summary = "Quote Restaurant Commission",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Commission quoted"),
        (status_code = StatusCode::NOT_FOUND, description = "Commission not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid subtotal"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    commission: PathParam<Uuid>,
    subtotal: QueryParam<String, true>,
    depot: &mut Depot,
) -> Result<ApiResponse<QuoteResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_uuid_or_401()?;

    let subtotal = subtotal
        .trim()
        .parse::<Decimal>()
        .or_400("subtotal must be a number")?;

    let record = state
        .app
        .commissions
        .get_commission(tenant, commission.into_inner().into())
        .await
        .map_err(into_api_error)?;

    let owed = record
        .config
        .commission_on(subtotal)
        .map_err(|error| ApiError::bad_request(error.to_string()))?;

    Ok(ApiResponse::ok(
        "Commission quoted successfully",
        QuoteResponse {
            subtotal,
            commission: owed,
        },
    ))
}
