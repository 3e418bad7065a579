use super::AuthError;
use crate::config::AuthConfig;
use jsonwebtoken::jwk::{Jwk, JwkSet};
use log::{debug, error};
use moka::future::Cache as MokaCache;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Resolves a token's key identifier to public key material published at
/// the identity provider's JWKS endpoint.
///
/// Resolved keys are held in a TTL-bounded cache; a TTL of 0 disables the
/// cache and fetches the key set on every verification.
pub(crate) struct KeyResolver {
    http: Client,
    jwks_url: Url,
    cache: Option<MokaCache<String, Jwk>>,
}

impl KeyResolver {
    pub fn new(config: &AuthConfig) -> Result<Self, String> {
        let jwks_url = Url::parse(&config.jwks_url())
            .map_err(|e| format!("Invalid JWKS URL {}: {}", config.jwks_url(), e))?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.jwks.timeout))
            .connect_timeout(Duration::from_secs(2))
            .build()
            .map_err(|e| format!("Failed to create JWKS client: {}", e))?;

        let cache = (config.jwks.ttl > 0).then(|| {
            MokaCache::builder()
                .time_to_live(Duration::from_secs(config.jwks.ttl))
                .max_capacity(64)
                .build()
        });

        Ok(Self {
            http,
            jwks_url,
            cache,
        })
    }

    /// Returns the published key matching `kid`, fetching the key set when
    /// it is not cached. Fetch failures (including timeouts) surface as
    /// `KeyNotFound` rather than hanging or passing silently.
    pub async fn resolve(&self, kid: &str) -> Result<Jwk, AuthError> {
        if let Some(cache) = &self.cache {
            if let Some(jwk) = cache.get(kid).await {
                return Ok(jwk);
            }
        }

        let jwks = self.fetch_key_set().await?;

        if let Some(cache) = &self.cache {
            for jwk in &jwks.keys {
                if let Some(key_id) = &jwk.common.key_id {
                    cache.insert(key_id.clone(), jwk.clone()).await;
                }
            }
        }

        jwks.find(kid).cloned().ok_or(AuthError::KeyNotFound)
    }

    async fn fetch_key_set(&self) -> Result<JwkSet, AuthError> {
        debug!("Fetching JWKS from {}", self.jwks_url);
        let response = self
            .http
            .get(self.jwks_url.clone())
            .send()
            .await
            .map_err(|e| {
                error!("Failed to fetch JWKS from {}: {}", self.jwks_url, e);
                AuthError::KeyNotFound
            })?;

        if !response.status().is_success() {
            error!(
                "JWKS endpoint {} returned status {}",
                self.jwks_url,
                response.status()
            );
            return Err(AuthError::KeyNotFound);
        }

        response.json().await.map_err(|e| {
            error!("Failed to parse JWKS document: {}", e);
            AuthError::KeyNotFound
        })
    }
}
