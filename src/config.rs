//! Runtime configuration, read from the environment (and `.env` when present).

use reqwest::Url;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3043";
pub const DEFAULT_LOGIN_URL: &str = "/login";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{key} is not a valid http(s) URL: {value}")]
    InvalidUrl { key: &'static str, value: String },

    #[error("{key} has an invalid value: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// What a view does when the link carries no identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingIdPolicy {
    /// Issue no call and stay in the loading state.
    #[default]
    Wait,
    /// Fail immediately with a "missing identifier" reason.
    Fail,
}

impl FromStr for MissingIdPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wait" => Ok(MissingIdPolicy::Wait),
            "fail" => Ok(MissingIdPolicy::Fail),
            _ => Err(ConfigError::InvalidValue {
                key: "VERIFY_MISSING_ID",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base: Url,
    pub bind_addr: String,
    pub login_url: String,
    pub request_timeout: Duration,
    pub missing_id: MissingIdPolicy,
    pub log4rs_config: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Blank values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_base_raw = get("API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let api_base = parse_http_url("API_BASE", &api_base_raw)?;

        let request_timeout = match get("REQUEST_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "REQUEST_TIMEOUT_SECS",
                        value: raw,
                    })
                }
            },
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        let missing_id = match get("VERIFY_MISSING_ID") {
            Some(raw) => raw.parse()?,
            None => MissingIdPolicy::default(),
        };

        Ok(AppConfig {
            api_base,
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            login_url: get("LOGIN_URL").unwrap_or_else(|| DEFAULT_LOGIN_URL.to_string()),
            request_timeout,
            missing_id,
            log4rs_config: get("LOG4RS_CONFIG").map(PathBuf::from),
        })
    }
}

fn parse_http_url(key: &'static str, value: &str) -> Result<Url, ConfigError> {
    let invalid = || ConfigError::InvalidUrl {
        key,
        value: value.to_string(),
    };
    let url = Url::parse(value.trim()).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(invalid());
    }
    Ok(url)
}
