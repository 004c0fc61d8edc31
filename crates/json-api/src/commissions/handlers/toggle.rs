//! Toggle Commission Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    commissions::{errors::into_api_error, get::CommissionResponse},
    extensions::*,
    response::{ApiError, ApiResponse},
    state::State,
};

/// Toggle Commission Handler
///
/// Flips the enabled flag. Type and value are left untouched and are not
/// revalidated.
#[endpoint(
    tags("restaurant-commissions"),
    summary = "Toggle Restaurant Commission Status",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Commission status toggled"),
        (status_code = StatusCode::NOT_FOUND, description = "Commission not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
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
        .toggle_commission(tenant, commission.into_inner().into())
        .await
        .map_err(into_api_error)?;

    let message = if commission.config.status() {
        "Commission enabled"
    } else {
        "Commission disabled"
    };

    Ok(ApiResponse::ok(message, commission.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::Value;
    use testresult::TestResult;

    use tiffin::commissions::CommissionType;
    use tiffin_app::domain::{
        commissions::{CommissionsServiceError, MockCommissionsService, records::CommissionUuid},
        restaurants::records::RestaurantUuid,
    };

    use crate::test_helpers::{TEST_TENANT_UUID, commissions_service, make_commission};

    use super::*;

    fn make_service(repo: MockCommissionsService) -> Service {
        commissions_service(
            repo,
            Router::with_path("restaurant-commissions/{commission}/toggle").patch(handler),
        )
    }

    #[tokio::test]
    async fn test_toggle_reports_new_status() -> TestResult {
        let uuid = CommissionUuid::new();

        let mut repo = MockCommissionsService::new();

        repo.expect_toggle_commission()
            .once()
            .withf(move |tenant, c| *tenant == TEST_TENANT_UUID && *c == uuid)
            .return_once(move |_, _| {
                Ok(make_commission(
                    uuid,
                    RestaurantUuid::new(),
                    CommissionType::Percentage,
                    Decimal::TEN,
                    false,
                ))
            });

        let mut res = TestClient::patch(format!(
            "http://example.com/restaurant-commissions/{uuid}/toggle"
        ))
        .send(&make_service(repo))
        .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body["message"], "Commission disabled");
        assert_eq!(body["data"]["status"], false);

        Ok(())
    }

    #[tokio::test]
    async fn test_toggle_missing_commission_returns_404() -> TestResult {
        let mut repo = MockCommissionsService::new();

        repo.expect_toggle_commission()
            .once()
            .return_once(|_, _| Err(CommissionsServiceError::NotFound));

        let res = TestClient::patch(format!(
            "http://example.com/restaurant-commissions/{}/toggle",
            Uuid::now_v7()
        ))
        .send(&make_service(repo))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
