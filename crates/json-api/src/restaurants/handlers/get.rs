//! Get Restaurant Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tiffin_app::domain::restaurants::records::RestaurantRecord;

use crate::{
    extensions::*,
    response::{ApiError, ApiResponse},
    restaurants::errors::into_api_error,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RestaurantResponse {
    /// The unique identifier of the restaurant
    pub uuid: Uuid,

    /// Display name
    pub name: String,

    /// The date and time the restaurant was created
    pub created_at: String,

    /// The date and time the restaurant was last updated
    pub updated_at: String,
}

impl From<RestaurantRecord> for RestaurantResponse {
    fn from(restaurant: RestaurantRecord) -> Self {
        RestaurantResponse {
            uuid: restaurant.uuid.into(),
            name: restaurant.name,
            created_at: restaurant.created_at.to_string(),
            updated_at: restaurant.updated_at.to_string(),
        }
    }
}

/// Get Restaurant Handler
#[endpoint(
    tags("restaurants"),
    summary = "Get Restaurant",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Restaurant found"),
        (status_code = StatusCode::NOT_FOUND, description = "Restaurant not found"),
    ),
)]
pub(crate) async fn handler(
    restaurant: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<ApiResponse<RestaurantResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_uuid_or_401()?;

    let restaurant = state
        .app
        .restaurants
        .get_restaurant(tenant, restaurant.into_inner().into())
        .await
        .map_err(into_api_error)?;

    Ok(ApiResponse::ok(
        "Restaurant fetched successfully",
        restaurant.into(),
    ))
}
