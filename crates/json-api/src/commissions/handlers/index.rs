//! Commission Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    commissions::{errors::into_api_error, get::CommissionResponse},
    extensions::*,
    response::{ApiError, ApiResponse},
    state::State,
};

/// Commission Index Handler
#[endpoint(
    tags("restaurant-commissions"),
    summary = "List Restaurant Commissions",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<ApiResponse<Vec<CommissionResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_uuid_or_401()?;

    let commissions = state
        .app
        .commissions
        .list_commissions(tenant)
        .await
        .map_err(into_api_error)?;

    Ok(ApiResponse::ok(
        "Commissions fetched successfully",
        commissions.into_iter().map(Into::into).collect(),
    ))
}
