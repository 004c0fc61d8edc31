//! Auth middleware.

use std::sync::Arc;

use salvo::{http::header::AUTHORIZATION, prelude::*};
use tracing::{debug, error};

use tiffin_app::auth::AuthServiceError;

use crate::{extensions::*, response::ApiError, state::State};

/// Resolve the bearer token to a tenant and store it in the depot.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(token) = extract_bearer_token(req) else {
        res.render(ApiError::unauthorized(
            "Missing or invalid Authorization header",
        ));
        ctrl.skip_rest();

        return;
    };

    let state = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => state,
        Err(error) => {
            res.render(error);
            ctrl.skip_rest();

            return;
        }
    };

    let tenant_uuid = match state.app.auth.authenticate_bearer(token).await {
        Ok(tenant_uuid) => tenant_uuid,
        Err(AuthServiceError::NotFound) => {
            res.render(ApiError::unauthorized("Invalid API token"));
            ctrl.skip_rest();

            return;
        }
        Err(AuthServiceError::UnknownTenant(tenant)) => {
            debug!(%tenant, "api token belongs to a missing tenant");

            res.render(ApiError::unauthorized("Invalid API token"));
            ctrl.skip_rest();

            return;
        }
        Err(AuthServiceError::Sql(source)) => {
            error!("failed to validate api token: {source}");

            res.render(ApiError::internal());
            ctrl.skip_rest();

            return;
        }
    };

    depot.insert_tenant_uuid(tenant_uuid);

    ctrl.call_next(req, depot, res).await;
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}
