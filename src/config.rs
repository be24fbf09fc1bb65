use crate::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,

    pub identity_api_url: String,
    pub identity_api_key: String,

    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            identity_api_url: std::env::var("IDENTITY_API_URL")
                .map_err(|_| ConfigError::MissingEnvVar("IDENTITY_API_URL".to_string()))?,
            identity_api_key: std::env::var("IDENTITY_API_KEY")
                .map_err(|_| ConfigError::MissingEnvVar("IDENTITY_API_KEY".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
        })
    }
}
