//! Create Commission Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tiffin_app::domain::commissions::data::NewCommission;

use crate::{
    commissions::{CommissionRequest, errors::into_api_error, get::CommissionResponse},
    extensions::*,
    response::{ApiError, ApiResponse},
    state::State,
};

/// Create Commission Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateCommissionRequest {
    /// Client generated identifier
    pub uuid: Uuid,

    /// Restaurant the commission applies to
    pub restaurant_id: Uuid,

    /// Type and value
    pub default_commission: CommissionRequest,

    /// Free-text notes
    pub notes: Option<String>,
}

impl From<CreateCommissionRequest> for NewCommission {
    fn from(request: CreateCommissionRequest) -> Self {
        NewCommission {
            uuid: request.uuid.into(),
            restaurant: request.restaurant_id.into(),
            commission: request.default_commission.into(),
            notes: request.notes,
        }
    }
}

/// Create Commission Handler
///
/// A restaurant has at most one commission.
#[endpoint(
    tags("restaurant-commissions"),
    summary = "Create Restaurant Commission",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Commission created"),
        (status_code = StatusCode::CONFLICT, description = "Restaurant already has a commission"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid commission or unknown restaurant"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCommissionRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<ApiResponse<CommissionResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_uuid_or_401()?;

    let commission = state
        .app
        .commissions
        .create_commission(tenant, json.into_inner().into())
        .await
        .map_err(into_api_error)?;

    res.add_header(
        LOCATION,
        format!("/restaurant-commissions/{}", commission.uuid),
        true,
    )
    .or_500("failed to set location header")?;

    Ok(ApiResponse::created(
        "Commission created successfully",
        commission.into(),
    ))
}
