//! Create Restaurant Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tiffin_app::domain::restaurants::data::NewRestaurant;

use crate::{
    extensions::*,
    response::{ApiError, ApiResponse},
    restaurants::{errors::into_api_error, get::RestaurantResponse},
    state::State,
};

/// Create Restaurant Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateRestaurantRequest {
    /// Client generated identifier
    pub uuid: Uuid,

    /// Display name
    pub name: String,
}

impl From<CreateRestaurantRequest> for NewRestaurant {
    fn from(request: CreateRestaurantRequest) -> Self {
        NewRestaurant {
            uuid: request.uuid.into(),
            name: request.name,
        }
    }
}

/// Create Restaurant Handler
#[endpoint(
    tags("restaurants"),
    summary = "Create Restaurant",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Restaurant created"),
        (status_code = StatusCode::CONFLICT, description = "Restaurant already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateRestaurantRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<ApiResponse<RestaurantResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_uuid_or_401()?;

    let restaurant = state
        .app
        .restaurants
        .create_restaurant(tenant, json.into_inner().into())
        .await
        .map_err(into_api_error)?;

    res.add_header(LOCATION, format!("/restaurants/{}", restaurant.uuid), true)
        .or_500("failed to set location header")?;

    Ok(ApiResponse::created(
        "Restaurant created successfully",
        restaurant.into(),
    ))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use tiffin_app::domain::restaurants::{
        MockRestaurantsService, RestaurantsServiceError, records::RestaurantUuid,
    };

    use crate::{
        response::Envelope,
        test_helpers::{TEST_TENANT_UUID, make_restaurant, restaurants_service},
    };

    use super::*;

    fn make_service(repo: MockRestaurantsService) -> Service {
        restaurants_service(repo, Router::with_path("restaurants").post(handler))
    }

    #[tokio::test]
    async fn test_create_restaurant_success() -> TestResult {
        let uuid = RestaurantUuid::new();

        let mut repo = MockRestaurantsService::new();

        repo.expect_create_restaurant()
            .once()
            .withf(move |tenant, new| {
                *tenant == TEST_TENANT_UUID
                    && *new
                        == NewRestaurant {
                            uuid,
                            name: "Dosa Point".to_string(),
                        }
            })
            .return_once(move |_, _| Ok(make_restaurant(uuid, "Dosa Point")));

        let mut res = TestClient::post("http://example.com/restaurants")
            .json(&json!({ "uuid": uuid.into_uuid(), "name": "Dosa Point" }))
            .send(&make_service(repo))
            .await;

        let body: Envelope<RestaurantResponse> = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/restaurants/{uuid}").as_str()));
        assert_eq!(body.message, "Restaurant created successfully");
        assert_eq!(body.data.map(|r| r.uuid), Some(uuid.into_uuid()));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_restaurant_conflict_returns_409() -> TestResult {
        let mut repo = MockRestaurantsService::new();

        repo.expect_create_restaurant()
            .once()
            .return_once(|_, _| Err(RestaurantsServiceError::AlreadyExists));

        let res = TestClient::post("http://example.com/restaurants")
            .json(&json!({ "uuid": Uuid::now_v7(), "name": "Dosa Point" }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_restaurant_blank_name_returns_400() -> TestResult {
        let mut repo = MockRestaurantsService::new();

        repo.expect_create_restaurant()
            .once()
            .return_once(|_, _| Err(RestaurantsServiceError::InvalidData));

        let res = TestClient::post("http://example.com/restaurants")
            .json(&json!({ "uuid": Uuid::now_v7(), "name": " " }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_restaurant_missing_name_returns_400() -> TestResult {
        let mut repo = MockRestaurantsService::new();

        repo.expect_create_restaurant().never();

        let res = TestClient::post("http://example.com/restaurants")
            .json(&json!({ "uuid": Uuid::now_v7() }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
