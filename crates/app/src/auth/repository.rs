//! Auth repository.
//!
//! Tokens are looked up before any tenant is known, so these queries run on
//! the pool directly and the `api_tokens` table carries no row-level policy.

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};

use crate::{
    auth::{
        ApiTokenVersion,
        models::{ActiveApiToken, ApiTokenMetadata, ApiTokenUuid, NewApiToken},
    },
    domain::tenants::records::TenantUuid,
};

const CREATE_API_TOKEN_SQL: &str = include_str!("sql/create_api_token.sql");
const FIND_ACTIVE_API_TOKEN_SQL: &str = include_str!("sql/find_active_api_token.sql");
const TOUCH_API_TOKEN_SQL: &str = include_str!("sql/touch_api_token.sql");
const REVOKE_API_TOKEN_SQL: &str = include_str!("sql/revoke_api_token.sql");
const LIST_API_TOKENS_SQL: &str = include_str!("sql/list_api_tokens.sql");

fn decode_version(row: &PgRow) -> sqlx::Result<ApiTokenVersion> {
    ApiTokenVersion::try_from(row.try_get::<i16, _>("version")?).map_err(|e| {
        sqlx::Error::ColumnDecode {
            index: "version".to_string(),
            source: Box::new(e),
        }
    })
}

#[derive(Debug, Clone)]
pub(crate) struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn create_api_token(
        &self,
        token: &NewApiToken,
    ) -> Result<ApiTokenMetadata, sqlx::Error> {
        query_as::<Postgres, ApiTokenMetadata>(CREATE_API_TOKEN_SQL)
            .bind(token.uuid.into_uuid())
            .bind(token.tenant_uuid.into_uuid())
            .bind(token.version.as_i16())
            .bind(&token.token_hash)
            .bind(token.expires_at.map(SqlxTimestamp::from))
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn find_active_api_token(
        &self,
        token: ApiTokenUuid,
    ) -> Result<Option<ActiveApiToken>, sqlx::Error> {
        query_as::<Postgres, ActiveApiToken>(FIND_ACTIVE_API_TOKEN_SQL)
            .bind(token.into_uuid())
            .fetch_optional(&self.pool)
            .await
    }

    pub(crate) async fn touch_api_token(&self, token: ApiTokenUuid) -> Result<(), sqlx::Error> {
        query(TOUCH_API_TOKEN_SQL)
            .bind(token.into_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub(crate) async fn revoke_api_token(
        &self,
        token: ApiTokenUuid,
    ) -> Result<Option<ApiTokenMetadata>, sqlx::Error> {
        query_as::<Postgres, ApiTokenMetadata>(REVOKE_API_TOKEN_SQL)
            .bind(token.into_uuid())
            .fetch_optional(&self.pool)
            .await
    }

    pub(crate) async fn list_api_tokens(
        &self,
        tenant: TenantUuid,
    ) -> Result<Vec<ApiTokenMetadata>, sqlx::Error> {
        query_as::<Postgres, ApiTokenMetadata>(LIST_API_TOKENS_SQL)
            .bind(tenant.into_uuid())
            .fetch_all(&self.pool)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ActiveApiToken {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            tenant_uuid: TenantUuid::from_uuid(row.try_get("tenant_uuid")?),
            version: decode_version(row)?,
            token_hash: row.try_get("token_hash")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for ApiTokenMetadata {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let optional_timestamp = |column: &str| -> sqlx::Result<Option<Timestamp>> {
            Ok(row
                .try_get::<Option<SqlxTimestamp>, _>(column)?
                .map(SqlxTimestamp::to_jiff))
        };

        Ok(Self {
            uuid: ApiTokenUuid::from_uuid(row.try_get("uuid")?),
            tenant_uuid: TenantUuid::from_uuid(row.try_get("tenant_uuid")?),
            version: decode_version(row)?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            last_used_at: optional_timestamp("last_used_at")?,
            expires_at: optional_timestamp("expires_at")?,
            revoked_at: optional_timestamp("revoked_at")?,
        })
    }
}
