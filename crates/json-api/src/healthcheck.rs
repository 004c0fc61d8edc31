//! Liveness endpoint.

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*,
    response::{ApiError, ApiResponse},
    state::State,
};

/// Liveness payload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HealthResponse {
    /// Always `ok` while the process is serving
    pub status: String,

    /// Server build version
    pub version: String,

    /// Seconds since startup
    pub uptime_secs: u64,
}

/// Healthcheck handler
///
/// Does not touch the database.
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<ApiResponse<HealthResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    Ok(ApiResponse::ok(
        "Service is healthy",
        HealthResponse {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_secs: state.uptime_secs(),
        },
    ))
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use tiffin_app::auth::MockAuthService;

    use crate::{response::Envelope, test_helpers::state_with_auth};

    use super::*;

    #[tokio::test]
    async fn test_healthcheck_reports_version() -> TestResult {
        let router = Router::new()
            .hoop(inject(state_with_auth(MockAuthService::new())))
            .push(Router::with_path("healthcheck").get(handler));

        let body: Envelope<HealthResponse> = TestClient::get("http://example.com/healthcheck")
            .send(&Service::new(router))
            .await
            .take_json()
            .await?;

        let data = body.data.ok_or("missing data")?;

        assert!(body.success, "expected success flag");
        assert_eq!(data.status, "ok");
        assert_eq!(data.version, env!("CARGO_PKG_VERSION"));

        Ok(())
    }

    #[tokio::test]
    async fn test_healthcheck_without_state_returns_500() -> TestResult {
        let router = Router::with_path("healthcheck").get(handler);

        let res = TestClient::get("http://example.com/healthcheck")
            .send(&Service::new(router))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
