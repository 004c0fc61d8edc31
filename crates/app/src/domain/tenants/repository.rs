//! Tenants Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{Postgres, Row, Transaction, query};

use crate::domain::tenants::{
    data::NewTenant,
    records::{TenantRecord, TenantUuid},
};

const CREATE_TENANT_SQL: &str = include_str!("sql/create_tenant.sql");

/// The `tenants` table is not row-level secured, so inserts work inside a
/// transaction already scoped to the new tenant.
#[derive(Debug, Clone, Default)]
pub(crate) struct PgTenantsRepository;

impl PgTenantsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn insert_tenant(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        tenant: &NewTenant,
    ) -> Result<TenantRecord, sqlx::Error> {
        let row = query(CREATE_TENANT_SQL)
            .bind(tenant.uuid.into_uuid())
            .bind(&tenant.name)
            .fetch_one(&mut **tx)
            .await?;

        Ok(TenantRecord {
            uuid: TenantUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
