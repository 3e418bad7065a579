use serde::Deserialize;

/// Configuration for bearer-token verification
#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// The identity provider domain, e.g. "my-tenant.us.auth0.com"
    #[serde(default)]
    pub domain: String,

    /// The audience identifier this service accepts (default: "drinks")
    #[serde(default = "default_audience")]
    pub audience: String,

    /// Key-set resolution configuration
    #[serde(default)]
    pub jwks: JwksConfig,
}

/// Configuration for JWKS fetching and caching
#[derive(Debug, Deserialize, Clone)]
pub struct JwksConfig {
    /// Explicit key-set URL; derived from the domain when unset
    #[serde(default)]
    pub url: Option<String>,

    /// Resolved-key cache TTL in seconds; 0 fetches per verification (default: 300)
    #[serde(default = "default_jwks_ttl")]
    pub ttl: u64,

    /// Key-set fetch timeout in seconds (default: 5)
    #[serde(default = "default_jwks_timeout")]
    pub timeout: u64,
}

fn default_audience() -> String {
    "drinks".to_string()
}

fn default_jwks_ttl() -> u64 {
    300
}

fn default_jwks_timeout() -> u64 {
    5
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            domain: String::new(),
            audience: default_audience(),
            jwks: JwksConfig::default(),
        }
    }
}

impl Default for JwksConfig {
    fn default() -> Self {
        Self {
            url: None,
            ttl: default_jwks_ttl(),
            timeout: default_jwks_timeout(),
        }
    }
}

impl AuthConfig {
    /// The expected `iss` claim value
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.domain)
    }

    /// The key-set discovery URL
    pub fn jwks_url(&self) -> String {
        self.jwks
            .url
            .clone()
            .unwrap_or_else(|| format!("https://{}/.well-known/jwks.json", self.domain))
    }
}
