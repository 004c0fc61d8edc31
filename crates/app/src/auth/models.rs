//! Auth data models.

use jiff::Timestamp;

use crate::{auth::ApiTokenVersion, domain::tenants::records::TenantUuid, uuids::TypedUuid};

/// API token UUID
pub type ApiTokenUuid = TypedUuid<ApiTokenMetadata>;

/// Stored verifier for a token that can still authenticate.
#[derive(Debug, Clone)]
pub(crate) struct ActiveApiToken {
    pub tenant_uuid: TenantUuid,
    pub version: ApiTokenVersion,

    /// Hex SHA-256 of the full bearer token.
    pub token_hash: String,
}

/// API token metadata persisted in storage.
#[derive(Debug, Clone)]
pub struct ApiTokenMetadata {
    pub uuid: ApiTokenUuid,
    pub tenant_uuid: TenantUuid,
    pub version: ApiTokenVersion,
    pub created_at: Timestamp,
    pub last_used_at: Option<Timestamp>,
    pub expires_at: Option<Timestamp>,
    pub revoked_at: Option<Timestamp>,
}

/// New API token persistence payload.
#[derive(Debug, Clone)]
pub(crate) struct NewApiToken {
    pub uuid: ApiTokenUuid,
    pub tenant_uuid: TenantUuid,
    pub version: ApiTokenVersion,
    pub token_hash: String,
    pub expires_at: Option<Timestamp>,
}

/// A freshly issued token. `token` is the only copy of the raw secret.
#[derive(Debug, Clone)]
pub struct IssuedApiToken {
    pub token: String,
    pub metadata: ApiTokenMetadata,
}
