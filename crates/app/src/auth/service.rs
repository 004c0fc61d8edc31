//! Auth service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use sqlx::{
    PgPool,
    error::{DatabaseError, ErrorKind},
};
use tracing::{debug, warn};

use crate::{
    auth::{
        ApiTokenMetadata, ApiTokenSecret, ApiTokenUuid, ApiTokenVersion, AuthServiceError,
        IssuedApiToken, format_api_token, hash_api_token,
        models::NewApiToken,
        parse_api_token,
        repository::PgAuthRepository,
        verify_api_token,
    },
    domain::tenants::records::TenantUuid,
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    repository: PgAuthRepository,
}

impl PgAuthService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgAuthRepository::new(pool),
        }
    }

    /// Issue a new API token for the given tenant.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::UnknownTenant`] when the tenant does not
    /// exist, or a storage error.
    pub async fn issue_api_token(
        &self,
        tenant_uuid: TenantUuid,
        expires_at: Option<Timestamp>,
    ) -> Result<IssuedApiToken, AuthServiceError> {
        let token_uuid = ApiTokenUuid::new();
        let version = ApiTokenVersion::V1;
        let token = format_api_token(token_uuid.into_uuid(), version, &ApiTokenSecret::generate());

        let metadata = self
            .repository
            .create_api_token(&NewApiToken {
                uuid: token_uuid,
                tenant_uuid,
                version,
                token_hash: hash_api_token(&token),
                expires_at,
            })
            .await
            .map_err(|error| match error.as_database_error().map(DatabaseError::kind) {
                Some(ErrorKind::ForeignKeyViolation) => AuthServiceError::UnknownTenant(tenant_uuid),
                _ => AuthServiceError::from(error),
            })?;

        Ok(IssuedApiToken { token, metadata })
    }

    /// List all tokens for the given tenant, revoked ones included.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_api_tokens(
        &self,
        tenant_uuid: TenantUuid,
    ) -> Result<Vec<ApiTokenMetadata>, AuthServiceError> {
        Ok(self.repository.list_api_tokens(tenant_uuid).await?)
    }

    /// Revoke a token. Returns `false` if it was unknown or already revoked.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn revoke_api_token(&self, token_uuid: ApiTokenUuid) -> Result<bool, AuthServiceError> {
        let revoked = self.repository.revoke_api_token(token_uuid).await?;

        Ok(revoked.is_some())
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn authenticate_bearer(
        &self,
        bearer_token: &str,
    ) -> Result<TenantUuid, AuthServiceError> {
        let parsed = parse_api_token(bearer_token).map_err(|error| {
            debug!(%error, "rejected malformed bearer token");
            AuthServiceError::NotFound
        })?;

        let token_uuid = ApiTokenUuid::from_uuid(parsed.token_uuid);

        let token = self
            .repository
            .find_active_api_token(token_uuid)
            .await?
            .ok_or(AuthServiceError::NotFound)?;

        if token.version != parsed.version || !verify_api_token(bearer_token, &token.token_hash) {
            return Err(AuthServiceError::NotFound);
        }

        if let Err(error) = self.repository.touch_api_token(token_uuid).await {
            warn!(%error, token = %token_uuid, "failed to record api token use");
        }

        Ok(token.tenant_uuid)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve the tenant that owns an active bearer token.
    async fn authenticate_bearer(&self, bearer_token: &str)
    -> Result<TenantUuid, AuthServiceError>;
}
