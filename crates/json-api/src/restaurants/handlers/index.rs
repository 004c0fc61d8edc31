//! Restaurant Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    response::{ApiError, ApiResponse},
    restaurants::get::RestaurantResponse,
    state::State,
};

/// Restaurant Index Handler
///
/// Returns every restaurant of the tenant.
#[endpoint(
    tags("restaurants"),
    summary = "List Restaurants",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<ApiResponse<Vec<RestaurantResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_uuid_or_401()?;

    let restaurants = state
        .app
        .restaurants
        .list_restaurants(tenant)
        .await
        .or_500("failed to fetch restaurants")?;

    Ok(ApiResponse::ok(
        "Restaurants fetched successfully",
        restaurants.into_iter().map(Into::into).collect(),
    ))
}
