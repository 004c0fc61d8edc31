//! Product Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    products::{errors::into_api_error, get::ProductResponse},
    response::{ApiError, ApiResponse},
    state::State,
};

/// Product Index Handler
///
/// Returns the tenant's products, optionally only those of one restaurant.
#[endpoint(
    tags("products"),
    summary = "List Products",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    restaurant: QueryParam<Uuid, false>,
    depot: &mut Depot,
) -> Result<ApiResponse<Vec<ProductResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_uuid_or_401()?;

    let products = state
        .app
        .products
        .list_products(tenant, restaurant.into_inner().map(Into::into))
        .await
        .map_err(into_api_error)?;

    Ok(ApiResponse::ok(
        "Products fetched successfully",
        products.into_iter().map(Into::into).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use tiffin_app::domain::{
        products::{
            MockProductsService,
            records::{ProductUuid, VariationUuid},
        },
        restaurants::records::RestaurantUuid,
    };

    use crate::{
        response::Envelope,
        test_helpers::{TEST_TENANT_UUID, make_product, products_service},
    };

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("products").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_200() -> TestResult {
        let uuid = ProductUuid::new();

        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .withf(|tenant, restaurant| *tenant == TEST_TENANT_UUID && restaurant.is_none())
            .return_once(move |_, _| Ok(vec![make_product(uuid, VariationUuid::new())]));

        let mut res = TestClient::get("http://example.com/products")
            .send(&make_service(repo))
            .await;

        let body: Envelope<Vec<ProductResponse>> = res.take_json().await?;
        let products = body.data.ok_or("missing data")?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(products.len(), 1);
        assert_eq!(products.first().map(|p| p.uuid), Some(uuid.into_uuid()));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_filters_by_restaurant() -> TestResult {
        let restaurant = RestaurantUuid::new();

        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .withf(move |tenant, filter| *tenant == TEST_TENANT_UUID && *filter == Some(restaurant))
            .return_once(|_, _| Ok(vec![]));

        let res = TestClient::get(format!(
            "http://example.com/products?restaurant={restaurant}"
        ))
        .send(&make_service(repo))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
