use axum::http::HeaderValue;
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
const WILDCARD_ORIGIN: &str = "*";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a valid port, got {value:?}")]
    InvalidPort { key: &'static str, value: String },
    #[error("{key} must be a valid IP address, got {value:?}")]
    InvalidHost { key: &'static str, value: String },
    #[error("{key} must be a boolean, got {value:?}")]
    InvalidBool { key: &'static str, value: String },
    #[error("CORS_ALLOW_CREDENTIALS=true requires explicit origins")]
    WildcardWithCredentials,
    #[error("invalid CORS origin {0:?}")]
    InvalidOrigin(String),
}

// Runtime settings for the backend API, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub app_name: String,
    pub app_version: String,
    pub host: IpAddr,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub cors_allow_credentials: bool,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let host = match read("BACKEND_HOST") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidHost {
                key: "BACKEND_HOST",
                value,
            })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = match read("BACKEND_PORT") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidPort {
                key: "BACKEND_PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let cors_allow_credentials = match read("CORS_ALLOW_CREDENTIALS") {
            Some(value) => parse_bool(&value).ok_or(ConfigError::InvalidBool {
                key: "CORS_ALLOW_CREDENTIALS",
                value,
            })?,
            None => false,
        };

        let settings = Self {
            app_name: read("APP_NAME").unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string()),
            app_version: read("APP_VERSION")
                .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string()),
            host,
            port,
            cors_origins: parse_cors_origins(read("CORS_ORIGINS").as_deref().unwrap_or("")),
            cors_allow_credentials,
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    // Wildcard origins cannot be combined with credentials.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.cors_allow_credentials && self.cors_origins.iter().any(|o| o == WILDCARD_ORIGIN) {
            return Err(ConfigError::WildcardWithCredentials);
        }
        Ok(())
    }

    pub fn cors_layer(&self) -> Result<CorsLayer, ConfigError> {
        let origin = if self.cors_origins.iter().any(|o| o == WILDCARD_ORIGIN) {
            AllowOrigin::any()
        } else {
            let origins = self
                .cors_origins
                .iter()
                .map(|origin| {
                    HeaderValue::from_str(origin)
                        .map_err(|_| ConfigError::InvalidOrigin(origin.clone()))
                })
                .collect::<Result<Vec<_>, _>>()?;
            AllowOrigin::list(origins)
        };

        Ok(CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(self.cors_allow_credentials))
    }
}

// Origins may be separated by commas or semicolons; empty input keeps the default.
pub fn parse_cors_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split([',', ';'])
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        vec![DEFAULT_CORS_ORIGIN.to_string()]
    } else {
        origins
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
