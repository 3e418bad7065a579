mod guard;
mod header;
pub(crate) mod jwks;
pub(crate) mod permissions;
pub(crate) mod verifier;

pub(crate) use guard::Authorized;

use crate::state::AppState;
use axum::response::IntoResponse;
use axum::Json;
use http::{HeaderMap, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

/// Claim set produced by a successful verification. Request-scoped; the
/// permissions snapshot is fixed at decode time and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    #[serde(default)]
    pub sub: Option<String>,
    /// Absent when the token was issued without the permissions feature;
    /// distinct from an empty list.
    #[serde(default)]
    pub permissions: Option<Vec<String>>,
    pub exp: i64,
}

impl AccessClaims {
    /// Exact-membership test against the decoded permissions snapshot
    pub fn has_permission(&self, permission: &str) -> Option<bool> {
        self.permissions
            .as_ref()
            .map(|list| list.iter().any(|p| p == permission))
    }
}

/// Failure modes of the authorization pipeline.
///
/// Each carries a machine-readable code, a human description (the
/// `Display` text), and an HTTP status; all three are serialized verbatim
/// at the boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    #[error("Authorization header is expected")]
    MissingHeader,
    #[error("{0}")]
    MalformedHeader(&'static str),
    #[error("Unable to find the appropriate key")]
    KeyNotFound,
    #[error("Token expired")]
    TokenExpired,
    #[error("Incorrect claims, check the audience and issuer")]
    InvalidClaims,
    #[error("Unable to parse authentication token")]
    InvalidToken,
    #[error("Permissions not included in token")]
    PermissionsClaimMissing,
    #[error("Permission not found")]
    PermissionDenied,
}

impl AuthError {
    /// Machine-readable failure code, surfaced in the envelope `message`
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingHeader => "authorization_header_missing",
            Self::MalformedHeader(_) | Self::KeyNotFound | Self::InvalidToken => "invalid_header",
            Self::TokenExpired => "token_expired",
            Self::InvalidClaims | Self::PermissionsClaimMissing => "invalid_claims",
            Self::PermissionDenied => "unauthorized",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingHeader
            | Self::TokenExpired
            | Self::InvalidClaims
            | Self::PermissionsClaimMissing => StatusCode::UNAUTHORIZED,
            Self::MalformedHeader(_) | Self::KeyNotFound | Self::InvalidToken => {
                StatusCode::BAD_REQUEST
            }
            Self::PermissionDenied => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> axum::response::Response {
        let status_code = self.status_code();
        let body = json!({
            "success": false,
            "error": status_code.as_u16(),
            "message": self.code(),
            "description": self.to_string(),
        });
        (status_code, Json(body)).into_response()
    }
}

/// The full authorization pipeline: extract the bearer credential, verify
/// it, and confirm the required permission. Runs before every protected
/// handler body; any failure short-circuits to the uniform envelope.
pub async fn authorize(
    state: &AppState,
    headers: &HeaderMap,
    required_permission: &str,
) -> Result<AccessClaims, AuthError> {
    let token = header::extract_bearer_token(headers)?;
    let claims = state.verifier.verify(token).await?;
    permissions::check_permission(&claims, required_permission)?;
    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_codes_and_statuses() {
        let cases = [
            (
                AuthError::MissingHeader,
                "authorization_header_missing",
                StatusCode::UNAUTHORIZED,
            ),
            (
                AuthError::MalformedHeader("Token not found"),
                "invalid_header",
                StatusCode::BAD_REQUEST,
            ),
            (
                AuthError::KeyNotFound,
                "invalid_header",
                StatusCode::BAD_REQUEST,
            ),
            (
                AuthError::TokenExpired,
                "token_expired",
                StatusCode::UNAUTHORIZED,
            ),
            (
                AuthError::InvalidClaims,
                "invalid_claims",
                StatusCode::UNAUTHORIZED,
            ),
            (
                AuthError::InvalidToken,
                "invalid_header",
                StatusCode::BAD_REQUEST,
            ),
            (
                AuthError::PermissionsClaimMissing,
                "invalid_claims",
                StatusCode::UNAUTHORIZED,
            ),
            (
                AuthError::PermissionDenied,
                "unauthorized",
                StatusCode::FORBIDDEN,
            ),
        ];
        for (error, code, status) in cases {
            assert_eq!(error.code(), code, "code for {error:?}");
            assert_eq!(error.status_code(), status, "status for {error:?}");
        }
    }

    #[test]
    fn test_permissions_snapshot_membership() {
        let claims = AccessClaims {
            sub: Some("auth0|user".to_string()),
            permissions: Some(vec!["read:details".to_string()]),
            exp: 0,
        };
        assert_eq!(claims.has_permission("read:details"), Some(true));
        assert_eq!(claims.has_permission("write:create"), Some(false));

        let without = AccessClaims {
            sub: None,
            permissions: None,
            exp: 0,
        };
        assert_eq!(without.has_permission("read:details"), None);
    }
}
