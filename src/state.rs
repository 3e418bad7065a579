use crate::auth::verifier::TokenVerifier;
use crate::config::DrinksConfig;
use crate::store::DrinkStore;
use std::sync::Arc;

/// Shared application state, dependency-injected into the handler layer
/// at construction time.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<DrinksConfig>,
    pub store: DrinkStore,
    pub verifier: Arc<TokenVerifier>,
}

impl AppState {
    pub async fn new(config: DrinksConfig) -> Result<Self, String> {
        let store = DrinkStore::connect(&config.database)
            .await
            .map_err(|e| format!("Failed to connect to store: {}", e))?;
        store
            .ensure_schema()
            .await
            .map_err(|e| format!("Failed to create schema: {}", e))?;

        let verifier = TokenVerifier::new(&config.auth)?;

        Ok(Self {
            config: Arc::new(config),
            store,
            verifier: Arc::new(verifier),
        })
    }
}
