use super::jwks::KeyResolver;
use super::{AccessClaims, AuthError};
use crate::config::AuthConfig;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use log::debug;

/// Algorithm allow-list. Asymmetric RSA only; anything else is rejected
/// before key resolution to rule out downgrade attacks.
const ALLOWED_ALGORITHMS: &[Algorithm] = &[Algorithm::RS256];

/// Cryptographically validates bearer tokens against the identity
/// provider's published keys and the configured audience and issuer.
pub(crate) struct TokenVerifier {
    resolver: KeyResolver,
    audience: String,
    issuer: String,
}

impl TokenVerifier {
    pub fn new(config: &AuthConfig) -> Result<Self, String> {
        Ok(Self {
            resolver: KeyResolver::new(config)?,
            audience: config.audience.clone(),
            issuer: config.issuer(),
        })
    }

    /// Validates signature, audience, issuer, and expiry, returning the
    /// decoded claim set.
    pub async fn verify(&self, token: &str) -> Result<AccessClaims, AuthError> {
        let header = decode_header(token).map_err(|_| AuthError::InvalidToken)?;
        if !ALLOWED_ALGORITHMS.contains(&header.alg) {
            debug!("Rejected token signed with disallowed algorithm {:?}", header.alg);
            return Err(AuthError::InvalidToken);
        }
        let kid = header
            .kid
            .ok_or(AuthError::MalformedHeader("Token has no key id"))?;

        let jwk = self.resolver.resolve(&kid).await?;
        let key = DecodingKey::from_jwk(&jwk).map_err(|_| AuthError::InvalidToken)?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[&self.audience]);
        validation.set_issuer(&[&self.issuer]);

        let data = decode::<AccessClaims>(token, &key, &validation).map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            ErrorKind::InvalidAudience | ErrorKind::InvalidIssuer => AuthError::InvalidClaims,
            _ => AuthError::InvalidToken,
        })?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::auth::JwksConfig;
    use crate::test_utils::keys;
    use chrono::{Duration, Utc};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const AUDIENCE: &str = "drinks";
    const ISSUER: &str = "https://drinks-test.example.com/";

    async fn verifier_with_mock() -> (TokenVerifier, MockServer) {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/.well-known/jwks.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(keys::test_jwks()))
            .mount(&mock)
            .await;

        let config = AuthConfig {
            domain: "drinks-test.example.com".to_string(),
            audience: AUDIENCE.to_string(),
            jwks: JwksConfig {
                url: Some(format!("{}/.well-known/jwks.json", mock.uri())),
                ttl: 60,
                timeout: 2,
            },
        };
        (TokenVerifier::new(&config).unwrap(), mock)
    }

    fn claims(exp_offset: Duration) -> serde_json::Value {
        json!({
            "iss": ISSUER,
            "aud": AUDIENCE,
            "sub": "auth0|verifier-test",
            "permissions": ["read:details"],
            "exp": (Utc::now() + exp_offset).timestamp(),
        })
    }

    #[tokio::test]
    async fn test_valid_token_yields_permissions() {
        let (verifier, _mock) = verifier_with_mock().await;
        let token = keys::sign_token(&claims(Duration::hours(1)), Some(keys::TEST_KID));

        let decoded = verifier.verify(&token).await.unwrap();
        assert_eq!(decoded.sub.as_deref(), Some("auth0|verifier-test"));
        assert_eq!(
            decoded.permissions,
            Some(vec!["read:details".to_string()])
        );
    }

    #[tokio::test]
    async fn test_expired_token() {
        let (verifier, _mock) = verifier_with_mock().await;
        // well past the default leeway
        let token = keys::sign_token(&claims(Duration::hours(-2)), Some(keys::TEST_KID));

        let result = verifier.verify(&token).await;
        assert_eq!(result.unwrap_err(), AuthError::TokenExpired);
    }

    #[tokio::test]
    async fn test_wrong_audience() {
        let (verifier, _mock) = verifier_with_mock().await;
        let mut body = claims(Duration::hours(1));
        body["aud"] = json!("some-other-api");
        let token = keys::sign_token(&body, Some(keys::TEST_KID));

        let result = verifier.verify(&token).await;
        assert_eq!(result.unwrap_err(), AuthError::InvalidClaims);
    }

    #[tokio::test]
    async fn test_wrong_issuer() {
        let (verifier, _mock) = verifier_with_mock().await;
        let mut body = claims(Duration::hours(1));
        body["iss"] = json!("https://evil.example.com/");
        let token = keys::sign_token(&body, Some(keys::TEST_KID));

        let result = verifier.verify(&token).await;
        assert_eq!(result.unwrap_err(), AuthError::InvalidClaims);
    }

    #[tokio::test]
    async fn test_token_without_kid() {
        let (verifier, _mock) = verifier_with_mock().await;
        let token = keys::sign_token(&claims(Duration::hours(1)), None);

        let result = verifier.verify(&token).await;
        assert!(matches!(result, Err(AuthError::MalformedHeader(_))));
    }

    #[tokio::test]
    async fn test_unknown_kid() {
        let (verifier, _mock) = verifier_with_mock().await;
        let token = keys::sign_token(&claims(Duration::hours(1)), Some("rotated-away"));

        let result = verifier.verify(&token).await;
        assert_eq!(result.unwrap_err(), AuthError::KeyNotFound);
    }

    #[tokio::test]
    async fn test_symmetric_algorithm_rejected() {
        let (verifier, _mock) = verifier_with_mock().await;
        // HS256 token with a kid set; the allow-list must reject it before
        // any key resolution happens.
        let token = keys::sign_hs256_token(&claims(Duration::hours(1)), keys::TEST_KID);

        let result = verifier.verify(&token).await;
        assert_eq!(result.unwrap_err(), AuthError::InvalidToken);
    }

    #[tokio::test]
    async fn test_garbage_token() {
        let (verifier, _mock) = verifier_with_mock().await;
        let result = verifier.verify("not-a-jwt").await;
        assert_eq!(result.unwrap_err(), AuthError::InvalidToken);
    }
}
