use crate::core::{AppError, Currency, Result};
use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

/// Dashboard-level settings supplied by the hosting application
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Company currency used to format monetary totals
    pub currency: Currency,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            dashboard: DashboardConfig {
                currency: env::var("COMPANY_CURRENCY")
                    .unwrap_or_else(|_| "USD".to_string())
                    .parse()
                    .map_err(AppError::Configuration)?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

        if !LEVELS.contains(&self.app.log_level.as_str()) {
            return Err(AppError::Configuration(format!(
                "Invalid LOG_LEVEL: {}",
                self.app.log_level
            )));
        }

        Ok(())
    }
}
