use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    str::FromStr,
};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8080);
const DEFAULT_DATABASE_TIMEOUT_SECS: u64 = 8;
const DEFAULT_SESSION_INACTIVITY_DAYS: i64 = 7;

pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,

    /// Shared secret the SSO gateway presents when binding a user to a session.
    pub sso_gateway_token: String,

    /// Connect and acquire timeout for the database pool.
    pub database_timeout_secs: u64,
    pub session_inactivity_days: i64,

    /// Origins allowed to call the API with credentials. Empty allows any origin without
    /// credentials.
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Reads configuration through `lookup`, which returns the raw value of a variable if set.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let sso_gateway_token = lookup("SSO_GATEWAY_TOKEN")
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("SSO_GATEWAY_TOKEN".to_string()))?;

        let bind_addr = parse_or("BIND_ADDR", lookup("BIND_ADDR"), DEFAULT_BIND_ADDR)?;

        let database_timeout_secs = parse_or(
            "DATABASE_TIMEOUT_SECS",
            lookup("DATABASE_TIMEOUT_SECS"),
            DEFAULT_DATABASE_TIMEOUT_SECS,
        )?;

        let session_inactivity_days = parse_or(
            "SESSION_INACTIVITY_DAYS",
            lookup("SESSION_INACTIVITY_DAYS"),
            DEFAULT_SESSION_INACTIVITY_DAYS,
        )?;
        if session_inactivity_days <= 0 {
            return Err(ConfigError::InvalidEnvVar {
                name: "SESSION_INACTIVITY_DAYS".to_string(),
                value: session_inactivity_days.to_string(),
                reason: "must be positive".to_string(),
            });
        }

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            database_url,
            bind_addr,
            sso_gateway_token,
            database_timeout_secs,
            session_inactivity_days,
            cors_allowed_origins,
        })
    }
}

/// Parses an optional variable, falling back to `default` when unset or blank.
fn parse_or<T>(name: &str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(value) if !value.trim().is_empty() => {
            value
                .trim()
                .parse()
                .map_err(|err: T::Err| ConfigError::InvalidEnvVar {
                    name: name.to_string(),
                    value: value.clone(),
                    reason: err.to_string(),
                })
        }
        _ => Ok(default),
    }
}
