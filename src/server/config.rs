use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,

    /// Origin allowed by CORS. Any origin is allowed when unset.
    pub client_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let host = std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match std::env::var("PORT") {
            Ok(value) => value.parse::<u16>().map_err(|e| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                reason: e.to_string(),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let client_origin = match std::env::var("CLIENT_ORIGIN") {
            Ok(value) => Some(parse_origin(&value)?),
            Err(_) => None,
        };

        Ok(Self {
            database_url,
            host,
            port,
            client_origin,
        })
    }

    /// Socket address string the HTTP listener binds to.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Validates an origin URL and strips it down to `scheme://host[:port]`.
fn parse_origin(value: &str) -> Result<String, ConfigError> {
    let url = Url::parse(value).map_err(|e| ConfigError::InvalidEnvVar {
        name: "CLIENT_ORIGIN".to_string(),
        reason: e.to_string(),
    })?;

    let origin = url.origin();
    if !origin.is_tuple() {
        return Err(ConfigError::InvalidEnvVar {
            name: "CLIENT_ORIGIN".to_string(),
            reason: format!("'{}' has no host", value),
        });
    }

    Ok(origin.ascii_serialization())
}
