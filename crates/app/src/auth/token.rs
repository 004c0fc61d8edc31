//! API token format and hashing.
//!
//! Tokens look like `tf_v1_<token uuid>.<64 hex chars of secret>`. The UUID
//! locates the stored row; the whole string is hashed and compared against
//! the stored digest.

use std::{fmt, fmt::Write as _, str::FromStr};

use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};
use thiserror::Error;
use uuid::Uuid;
use zeroize::Zeroize;

/// API token identifier prefix.
pub const API_TOKEN_PREFIX: &str = "tf";

/// Number of secret bytes encoded in a token.
pub const API_TOKEN_SECRET_BYTES: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiTokenVersion {
    V1,
}

impl ApiTokenVersion {
    #[must_use]
    pub const fn as_i16(self) -> i16 {
        match self {
            Self::V1 => 1,
        }
    }

    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::V1 => "v1",
        }
    }
}

impl TryFrom<i16> for ApiTokenVersion {
    type Error = ApiTokenError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::V1),
            _ => Err(ApiTokenError::UnsupportedVersion),
        }
    }
}

impl FromStr for ApiTokenVersion {
    type Err = ApiTokenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "v1" => Ok(Self::V1),
            _ => Err(ApiTokenError::UnsupportedVersion),
        }
    }
}

/// Random token secret, wiped from memory on drop.
pub struct ApiTokenSecret([u8; API_TOKEN_SECRET_BYTES]);

impl ApiTokenSecret {
    /// Draw a new secret from the operating system RNG.
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = [0_u8; API_TOKEN_SECRET_BYTES];

        OsRng.fill_bytes(&mut bytes);

        Self(bytes)
    }

    fn to_hex(&self) -> String {
        self.0.iter().fold(
            String::with_capacity(API_TOKEN_SECRET_BYTES * 2),
            |mut hex, byte| {
                let _ = write!(hex, "{byte:02x}");
                hex
            },
        )
    }
}

impl fmt::Debug for ApiTokenSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiTokenSecret(**redacted**)")
    }
}

impl Drop for ApiTokenSecret {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Identifying parts of a bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedApiToken {
    pub token_uuid: Uuid,
    pub version: ApiTokenVersion,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiTokenError {
    #[error("api token format is invalid")]
    InvalidFormat,

    #[error("api token uses an unsupported version")]
    UnsupportedVersion,

    #[error("api token secret encoding is invalid")]
    InvalidSecretEncoding,
}

#[must_use]
pub fn format_api_token(token_uuid: Uuid, version: ApiTokenVersion, secret: &ApiTokenSecret) -> String {
    format!(
        "{API_TOKEN_PREFIX}_{}_{}.{}",
        version.segment(),
        token_uuid.simple(),
        secret.to_hex()
    )
}

/// Split a bearer token into its identifying parts, checking the secret's shape.
///
/// # Errors
///
/// Returns an error when the prefix, version, UUID or secret segment is malformed.
pub fn parse_api_token(token: &str) -> Result<ParsedApiToken, ApiTokenError> {
    let (head, secret_hex) = token.split_once('.').ok_or(ApiTokenError::InvalidFormat)?;

    let mut segments = head.splitn(3, '_');

    let (Some(prefix), Some(version), Some(token_uuid)) =
        (segments.next(), segments.next(), segments.next())
    else {
        return Err(ApiTokenError::InvalidFormat);
    };

    if prefix != API_TOKEN_PREFIX {
        return Err(ApiTokenError::InvalidFormat);
    }

    let version = ApiTokenVersion::from_str(version)?;
    let token_uuid = Uuid::try_parse(token_uuid).map_err(|_| ApiTokenError::InvalidFormat)?;

    if secret_hex.len() != API_TOKEN_SECRET_BYTES * 2
        || !secret_hex.bytes().all(|byte| byte.is_ascii_hexdigit())
    {
        return Err(ApiTokenError::InvalidSecretEncoding);
    }

    Ok(ParsedApiToken {
        token_uuid,
        version,
    })
}

/// Hex SHA-256 digest stored in place of a token.
#[must_use]
pub fn hash_api_token(token: &str) -> String {
    Sha256::digest(token.as_bytes())
        .iter()
        .fold(String::with_capacity(64), |mut hex, byte| {
            let _ = write!(hex, "{byte:02x}");
            hex
        })
}

/// Compare a presented token against a stored digest without short-circuiting
/// on the first differing byte.
#[must_use]
pub fn verify_api_token(token: &str, stored_hash: &str) -> bool {
    let presented = hash_api_token(token);

    presented.len() == stored_hash.len()
        && presented
            .bytes()
            .zip(stored_hash.bytes())
            .fold(0_u8, |diff, (a, b)| diff | (a ^ b))
            == 0
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn formatted_token_parses_back() -> TestResult {
        let token_uuid = Uuid::now_v7();
        let token = format_api_token(token_uuid, ApiTokenVersion::V1, &ApiTokenSecret::generate());

        let parsed = parse_api_token(&token)?;

        assert_eq!(parsed.token_uuid, token_uuid);
        assert_eq!(parsed.version, ApiTokenVersion::V1);

        Ok(())
    }

    #[test]
    fn parse_rejects_foreign_prefix() {
        let token = format!("lt_v1_{}.{}", Uuid::nil().simple(), "ab".repeat(32));

        assert_eq!(parse_api_token(&token), Err(ApiTokenError::InvalidFormat));
    }

    #[test]
    fn parse_rejects_unknown_version() {
        let token = format!("tf_v9_{}.{}", Uuid::nil().simple(), "ab".repeat(32));

        assert_eq!(parse_api_token(&token), Err(ApiTokenError::UnsupportedVersion));
    }

    #[test]
    fn parse_rejects_short_or_non_hex_secret() {
        let short = format!("tf_v1_{}.abcd", Uuid::nil().simple());
        let non_hex = format!("tf_v1_{}.{}", Uuid::nil().simple(), "zz".repeat(32));

        assert_eq!(parse_api_token(&short), Err(ApiTokenError::InvalidSecretEncoding));
        assert_eq!(parse_api_token(&non_hex), Err(ApiTokenError::InvalidSecretEncoding));
    }

    #[test]
    fn hash_matches_known_digest() {
        assert_eq!(
            hash_api_token("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn verify_accepts_only_the_hashed_token() {
        let token = format_api_token(Uuid::now_v7(), ApiTokenVersion::V1, &ApiTokenSecret::generate());
        let stored = hash_api_token(&token);

        assert!(verify_api_token(&token, &stored));
        assert!(!verify_api_token(&format!("{token}0"), &stored));
        assert!(!verify_api_token(&token, "deadbeef"));
    }

    #[test]
    fn secret_debug_is_redacted() {
        let secret = ApiTokenSecret::generate();

        assert_eq!(format!("{secret:?}"), "ApiTokenSecret(**redacted**)");
    }
}
