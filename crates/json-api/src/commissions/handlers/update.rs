//! Update Commission Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tiffin_app::domain::commissions::data::CommissionUpdate;

use crate::{
    commissions::{CommissionRequest, errors::into_api_error, get::CommissionResponse},
    extensions::*,
    response::{ApiError, ApiResponse},
    state::State,
};

/// Update Commission Request
///
/// The enabled flag is only changed through the toggle endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateCommissionRequest {
    /// Type and value
    pub default_commission: CommissionRequest,

    /// Free-text notes
    pub notes: Option<String>,
}

impl From<UpdateCommissionRequest> for CommissionUpdate {
    fn from(request: UpdateCommissionRequest) -> Self {
        CommissionUpdate {
            commission: request.default_commission.into(),
            notes: request.notes,
        }
    }
}

/// Update Commission Handler
#[endpoint(
    tags("restaurant-commissions"),
    summary = "Update Restaurant Commission",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Commission updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Commission not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid commission"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    commission: PathParam<Uuid>,
    json: JsonBody<UpdateCommissionRequest>,
    depot: &mut Depot,
) -> Result<ApiResponse<CommissionResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_uuid_or_401()?;

    let commission = state
        .app
        .commissions
        .update_commission(
            tenant,
            commission.into_inner().into(),
            json.into_inner().into(),
        )
        .await
        .map_err(into_api_error)?;

    Ok(ApiResponse::ok(
        "Commission updated successfully",
        commission.into(),
    ))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use tiffin::commissions::{AmountInput, CommissionError, CommissionType};
    use tiffin_app::domain::{
        commissions::{CommissionsServiceError, MockCommissionsService, records::CommissionUuid},
        restaurants::records::RestaurantUuid,
    };

    use crate::test_helpers::{TEST_TENANT_UUID, commissions_service, make_commission};

    use super::*;

    fn make_service(repo: MockCommissionsService) -> Service {
        commissions_service(
            repo,
            Router::with_path("restaurant-commissions/{commission}").put(handler),
        )
    }

    #[tokio::test]
    async fn test_update_forwards_string_values() -> TestResult {
        let uuid = CommissionUuid::new();

        let mut repo = MockCommissionsService::new();

        repo.expect_update_commission()
            .once()
            .withf(move |tenant, c, update| {
                *tenant == TEST_TENANT_UUID
                    && *c == uuid
                    && update.commission.kind == "amount"
                    && update.commission.value == Some(AmountInput::Decimal(Decimal::from(40)))
                    && update.notes.is_none()
            })
            .return_once(move |_, _, _| {
                Ok(make_commission(
                    uuid,
                    RestaurantUuid::new(),
                    CommissionType::Amount,
                    Decimal::from(40),
                    false,
                ))
            });

        let mut res = TestClient::put(format!("http://example.com/restaurant-commissions/{uuid}"))
            .json(&json!({ "defaultCommission": { "type": "amount", "value": "40" } }))
            .send(&make_service(repo))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body["data"]["status"], false);

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_type_returns_400() -> TestResult {
        let mut repo = MockCommissionsService::new();

        repo.expect_update_commission().once().return_once(|_, _, _| {
            Err(CommissionsServiceError::Commission(
                CommissionError::UnknownCommissionType("flat".to_string()),
            ))
        });

        let res = TestClient::put(format!(
            "http://example.com/restaurant-commissions/{}",
            Uuid::now_v7()
        ))
        .json(&json!({ "defaultCommission": { "type": "flat", "value": 10 } }))
        .send(&make_service(repo))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
