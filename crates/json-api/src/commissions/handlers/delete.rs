//! Delete Commission Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    commissions::errors::into_api_error,
    extensions::*,
    response::{ApiError, ApiMessage},
    state::State,
};

/// Delete Commission Handler
///
/// Frees the restaurant to receive a new commission.
#[endpoint(
    tags("restaurant-commissions"),
    summary = "Delete Restaurant Commission",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Commission deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Commission not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    commission: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<ApiMessage, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_uuid_or_401()?;

    state
        .app
        .commissions
        .delete_commission(tenant, commission.into_inner().into())
        .await
        .map_err(into_api_error)?;

    Ok(ApiMessage("Commission deleted successfully".to_string()))
}
