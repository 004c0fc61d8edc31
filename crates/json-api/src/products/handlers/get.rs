//! Get Product Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tiffin_app::domain::products::records::{ProductRecord, ProductVariation};

use crate::{
    extensions::*,
    products::errors::into_api_error,
    response::{ApiError, ApiResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VariationResponse {
    /// Identifier used to address stock updates
    pub uuid: Uuid,

    /// Variation group label, e.g. "Size"
    pub name: String,

    /// Selected option, e.g. "Large"
    pub value: String,

    /// Full price
    #[salvo(schema(value_type = String))]
    pub price: Decimal,

    /// Discounted price, zero when there is no discount
    #[salvo(schema(value_type = String))]
    pub disc_price: Decimal,

    /// Units in stock
    pub stock: u32,

    /// `Available`, `Sold out` or `Discontinued`
    pub status: String,
}

impl From<ProductVariation> for VariationResponse {
    fn from(variation: ProductVariation) -> Self {
        let ProductVariation { uuid, variation } = variation;

        VariationResponse {
            uuid: uuid.into(),
            status: variation.status.as_str().to_string(),
            name: variation.name,
            value: variation.value,
            price: variation.price,
            disc_price: variation.disc_price,
            stock: variation.stock,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub uuid: Uuid,

    /// Owning restaurant
    pub restaurant: Uuid,

    /// Display name
    pub name: String,

    /// Purchasable variations, in display order
    pub variations: Vec<VariationResponse>,

    /// Price of the first variation
    #[salvo(schema(value_type = String))]
    pub price: Decimal,

    /// Discounted price of the first variation
    #[salvo(schema(value_type = String))]
    pub disc_price: Decimal,

    /// Stock across all variations
    pub stock: u64,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            uuid: product.uuid.into(),
            restaurant: product.restaurant.into(),
            name: product.name,
            variations: product.variations.into_iter().map(Into::into).collect(),
            price: product.price,
            disc_price: product.disc_price,
            stock: product.stock,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

/// Get Product Handler
///
/// Returns a product with its variations.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product found"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<ApiResponse<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_uuid_or_401()?;

    let product = state
        .app
        .products
        .get_product(tenant, product.into_inner().into())
        .await
        .map_err(into_api_error)?;

    Ok(ApiResponse::ok("Product fetched successfully", product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::Value;
    use testresult::TestResult;

    use tiffin_app::domain::products::{
        MockProductsService, ProductsServiceError,
        records::{ProductUuid, VariationUuid},
    };

    use crate::test_helpers::{TEST_TENANT_UUID, make_product, products_service};

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("products/{product}").get(handler))
    }

    #[tokio::test]
    async fn test_get_product_renders_camel_case_fields() -> TestResult {
        let uuid = ProductUuid::new();
        let variation = VariationUuid::new();

        let mut repo = MockProductsService::new();

        repo.expect_get_product()
            .once()
            .withf(move |tenant, p| *tenant == TEST_TENANT_UUID && *p == uuid)
            .return_once(move |_, _| Ok(make_product(uuid, variation)));

        let mut res = TestClient::get(format!("http://example.com/products/{uuid}"))
            .send(&make_service(repo))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["price"], "100");
        assert_eq!(body["data"]["discPrice"], "0");
        assert_eq!(body["data"]["stock"], 3);
        assert_eq!(
            body["data"]["variations"][0]["uuid"],
            variation.into_uuid().to_string()
        );
        assert_eq!(body["data"]["variations"][0]["status"], "Available");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_product_returns_404() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_get_product()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/products/{}", Uuid::now_v7()))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
