//! Create Product Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tiffin::variations::{RawVariation, StockInput, VariationStatus};
use tiffin_app::domain::products::data::{NewProduct, NewVariation};

use crate::{
    extensions::*,
    products::{errors::into_api_error, get::ProductResponse},
    response::{ApiError, ApiResponse},
    state::State,
};

/// Variation as submitted by a seller. Missing fields take their defaults.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VariationRequest {
    /// Existing variation to keep; omitted for new variations
    pub uuid: Option<Uuid>,

    /// Group label, defaults to "Variation"
    pub name: Option<String>,

    /// Option text
    pub value: Option<String>,

    /// Legacy option text, used when `value` is empty
    pub title: Option<String>,

    /// Full price, must be positive
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,

    /// Discounted price, at most `price`
    #[salvo(schema(value_type = Option<f64>))]
    pub disc_price: Option<Decimal>,

    /// Stock count as a number or numeric string
    #[salvo(schema(value_type = Option<String>))]
    pub stock: Option<StockInput>,

    /// `Available`, `Sold out` or `Discontinued`
    #[salvo(schema(value_type = Option<String>))]
    pub status: Option<VariationStatus>,
}

impl From<VariationRequest> for NewVariation {
    fn from(request: VariationRequest) -> Self {
        NewVariation {
            uuid: request.uuid.map(Into::into),
            raw: RawVariation {
                name: request.name,
                value: request.value,
                title: request.title,
                price: request.price,
                disc_price: request.disc_price,
                stock: request.stock,
                status: request.status,
            },
        }
    }
}

/// Create Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
    /// Client generated identifier
    pub uuid: Uuid,

    /// Owning restaurant
    pub restaurant: Uuid,

    /// Display name
    pub name: String,

    /// At least one variation
    pub variations: Vec<VariationRequest>,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        NewProduct {
            uuid: request.uuid.into(),
            restaurant: request.restaurant.into(),
            name: request.name,
            variations: request.variations.into_iter().map(Into::into).collect(),
        }
    }
}

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::CONFLICT, description = "Product already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid variations or unknown restaurant"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<ApiResponse<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_uuid_or_401()?;

    let product = state
        .app
        .products
        .create_product(tenant, json.into_inner().into())
        .await
        .map_err(into_api_error)?;

    res.add_header(LOCATION, format!("/products/{}", product.uuid), true)
        .or_500("failed to set location header")?;

    Ok(ApiResponse::created(
        "Product created successfully",
        product.into(),
    ))
}
