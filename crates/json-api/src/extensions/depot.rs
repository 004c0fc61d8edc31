//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::Depot;

use tiffin_app::domain::tenants::records::TenantUuid;

use crate::response::ApiError;

const TENANT_UUID_KEY: &str = "tenant_uuid";

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError>;

    /// Tenant resolved by the auth middleware.
    fn tenant_uuid_or_401(&self) -> Result<TenantUuid, ApiError>;

    fn insert_tenant_uuid(&mut self, tenant: TenantUuid);
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError> {
        self.obtain::<T>().map_err(|_ignored| ApiError::internal())
    }

    fn tenant_uuid_or_401(&self) -> Result<TenantUuid, ApiError> {
        self.get::<TenantUuid>(TENANT_UUID_KEY)
            .copied()
            .map_err(|_ignored| ApiError::unauthorized("Missing or invalid Authorization header"))
    }

    fn insert_tenant_uuid(&mut self, tenant: TenantUuid) {
        self.insert(TENANT_UUID_KEY, tenant);
    }
}
