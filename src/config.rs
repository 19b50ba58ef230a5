use crate::error::{config::ConfigError, AppError};

const DEFAULT_BASE_URL: &str = "https://api.schiphol.nl/public-flights";
const DEFAULT_PORT: u16 = 3000;

/// Connection details for the upstream Schiphol flight API.
///
/// The `app_id`/`app_key` credential pair is sent with every upstream request
/// alongside the `ResourceVersion: v4` header.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub app_id: String,
    pub app_key: String,
}

pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub upstream: UpstreamConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    value,
                })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            port,
            upstream: UpstreamConfig {
                base_url: std::env::var("SCHIPHOL_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
                app_id: std::env::var("SCHIPHOL_APP_ID")
                    .map_err(|_| ConfigError::MissingEnvVar("SCHIPHOL_APP_ID".to_string()))?,
                app_key: std::env::var("SCHIPHOL_APP_KEY")
                    .map_err(|_| ConfigError::MissingEnvVar("SCHIPHOL_APP_KEY".to_string()))?,
            },
        })
    }
}
