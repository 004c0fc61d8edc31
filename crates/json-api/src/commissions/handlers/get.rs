//! Get Commission Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tiffin_app::domain::commissions::records::CommissionRecord;

use crate::{
    commissions::{CommissionValue, errors::into_api_error},
    extensions::*,
    response::{ApiError, ApiResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CommissionResponse {
    /// The unique identifier of the commission
    pub uuid: Uuid,

    /// Restaurant the commission applies to
    pub restaurant_id: Uuid,

    /// Type and value
    pub default_commission: CommissionValue,

    /// Free-text notes
    pub notes: Option<String>,

    /// Whether the commission is currently charged
    pub status: bool,

    /// The date and time the commission was created
    pub created_at: String,

    /// The date and time the commission was last updated
    pub updated_at: String,
}

impl From<CommissionRecord> for CommissionResponse {
    fn from(commission: CommissionRecord) -> Self {
        let config = &commission.config;

        CommissionResponse {
            uuid: commission.uuid.into(),
            restaurant_id: commission.restaurant.into(),
            default_commission: CommissionValue {
                kind: config.kind().as_str().to_string(),
                value: config.value(),
            },
            notes: config.notes().map(str::to_string),
            status: config.status(),
            created_at: commission.created_at.to_string(),
            updated_at: commission.updated_at.to_string(),
        }
    }
}

/// Get Commission Handler
#[endpoint(
    tags("restaurant-commissions"),
    summary = "Get Restaurant Commission",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Commission found"),
        (status_code = StatusCode::NOT_FOUND, description = "Commission not found"),
    ),
)]
pub(crate) async fn handler(
    commission: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<ApiResponse<CommissionResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_uuid_or_401()?;

    let commission = state
        .app
        .commissions
        .get_commission(tenant, commission.into_inner().into())
        .await
        .map_err(into_api_error)?;

    Ok(ApiResponse::ok(
        "Commission fetched successfully",
        commission.into(),
    ))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::Value;
    use testresult::TestResult;

    use tiffin::commissions::CommissionType;
    use tiffin_app::domain::{
        commissions::{MockCommissionsService, records::CommissionUuid},
        restaurants::records::RestaurantUuid,
    };

    use crate::test_helpers::{TEST_TENANT_UUID, commissions_service, make_commission};

    use super::*;

    #[tokio::test]
    async fn test_get_commission_uses_wire_names() -> TestResult {
        let uuid = CommissionUuid::new();
        let restaurant = RestaurantUuid::new();

        let mut repo = MockCommissionsService::new();

        repo.expect_get_commission()
            .once()
            .withf(move |tenant, c| *tenant == TEST_TENANT_UUID && *c == uuid)
            .return_once(move |_, _| {
                Ok(make_commission(
                    uuid,
                    restaurant,
                    CommissionType::Percentage,
                    Decimal::new(125, 1),
                    true,
                ))
            });

        let mut res = TestClient::get(format!("http://example.com/restaurant-commissions/{uuid}"))
            .send(&commissions_service(
                repo,
                Router::with_path("restaurant-commissions/{commission}").get(handler),
            ))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body["data"]["restaurantId"], restaurant.into_uuid().to_string());
        assert_eq!(body["data"]["defaultCommission"]["type"], "percentage");
        assert_eq!(body["data"]["defaultCommission"]["value"], "12.5");
        assert_eq!(body["data"]["status"], true);

        Ok(())
    }
}
