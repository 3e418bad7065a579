use serde::Deserialize;

/// Configuration for the relational backing store
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// Connection string (default: "sqlite:drinks.db")
    #[serde(default = "default_url")]
    pub url: String,

    /// Maximum pool size (default: 5)
    #[serde(default = "default_connections")]
    pub connections: u32,
}

fn default_url() -> String {
    "sqlite:drinks.db".to_string()
}

fn default_connections() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            connections: default_connections(),
        }
    }
}
