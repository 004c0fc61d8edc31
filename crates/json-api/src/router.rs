//! App Router

use salvo::Router;

use crate::{auth, commissions, products, restaurants};

/// Every tenant scoped route, behind bearer authentication.
pub(crate) fn app_router() -> Router {
    Router::new()
        .hoop(auth::middleware::handler)
        .push(
            Router::with_path("restaurants")
                .get(restaurants::index::handler)
                .post(restaurants::create::handler)
                .push(Router::with_path("{restaurant}").get(restaurants::get::handler)),
        )
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(Router::with_path("bulk-stock-update").patch(products::bulk_stock::handler))
                .push(
                    Router::with_path("{product}")
                        .get(products::get::handler)
                        .put(products::update::handler)
                        .delete(products::delete::handler)
                        .push(
                            Router::with_path("variations/{variation}/stock")
                                .patch(products::stock::handler),
                        ),
                ),
        )
        .push(
            Router::with_path("restaurant-commissions")
                .get(commissions::index::handler)
                .post(commissions::create::handler)
                .push(
                    Router::with_path("{commission}")
                        .get(commissions::get::handler)
                        .put(commissions::update::handler)
                        .delete(commissions::delete::handler)
                        .push(Router::with_path("toggle").patch(commissions::toggle::handler))
                        .push(Router::with_path("quote").get(commissions::quote::handler)),
                ),
        )
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        catcher::Catcher,
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use serde_json::Value;
    use testresult::TestResult;
    use uuid::Uuid;

    use tiffin_app::{
        auth::{AuthServiceError, MockAuthService},
        domain::tenants::records::TenantUuid,
    };

    use crate::{response::envelope_catcher, test_helpers::state_with_auth};

    use super::*;

    fn make_service(auth: MockAuthService) -> Service {
        let router = Router::new()
            .hoop(inject(state_with_auth(auth)))
            .push(app_router());

        Service::new(router).catcher(Catcher::default().hoop(envelope_catcher))
    }

    #[tokio::test]
    async fn test_routes_require_a_bearer_token() -> TestResult {
        for path in ["restaurants", "products", "restaurant-commissions"] {
            let mut auth = MockAuthService::new();

            auth.expect_authenticate_bearer().never();

            let mut res = TestClient::get(format!("http://example.com/{path}"))
                .send(&make_service(auth))
                .await;

            let body: Value = res.take_json().await?;

            assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED), "{path}");
            assert_eq!(body["success"], false);
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_token_is_rejected_before_the_handler() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer()
            .once()
            .return_once(|_| {
                Err(AuthServiceError::UnknownTenant(TenantUuid::from_uuid(
                    Uuid::nil(),
                )))
            });

        let res = TestClient::get("http://example.com/restaurants")
            .add_header("authorization", "Bearer tf_v1_x.y", true)
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }
}
