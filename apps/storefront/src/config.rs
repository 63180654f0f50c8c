//! Storefront configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults suitable for local development.

use std::env;

/// Storefront configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// HTTP server port.
    pub http_port: u16,

    /// SQLite database file path.
    pub database_path: String,

    /// Store name shown in startup logs and API metadata.
    pub store_name: String,

    /// WhatsApp number orders are handed off to (international format,
    /// digits only).
    pub whatsapp_number: String,

    /// Session key the cart snapshot is persisted under.
    pub cart_session_key: String,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let config = StoreConfig {
            http_port: env::var("HTTP_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("HTTP_PORT".to_string()))?,

            database_path: env::var("DATABASE_PATH").unwrap_or_else(|_| "./kedai.db".to_string()),

            store_name: env::var("STORE_NAME").unwrap_or_else(|_| "Kedai Wonton".to_string()),

            whatsapp_number: env::var("WHATSAPP_NUMBER")
                .unwrap_or_else(|_| "6281250070876".to_string()),

            cart_session_key: env::var("CART_SESSION_KEY")
                .unwrap_or_else(|_| "cart-storage".to_string()),
        };

        if !config
            .whatsapp_number
            .chars()
            .all(|c| c.is_ascii_digit())
        {
            return Err(ConfigError::InvalidValue("WHATSAPP_NUMBER".to_string()));
        }

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
