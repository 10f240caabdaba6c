use dotenv::dotenv;
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// What the client does when a request fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Log the failure and return it to the caller.
    #[default]
    Propagate,
    /// Log the failure and return the operation's empty value.
    Fallback,
}

impl FromStr for ErrorPolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "propagate" => Ok(ErrorPolicy::Propagate),
            "fallback" => Ok(ErrorPolicy::Fallback),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub api_key: Option<String>,
    pub error_policy: ErrorPolicy,
    pub timeout: Duration,
    pub host: String,
    pub port: u16,
    pub market_watch_interval: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            error_policy: ErrorPolicy::Propagate,
            timeout: Duration::from_secs(10),
            host: "0.0.0.0".to_string(),
            port: 3000,
            market_watch_interval: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset or empty keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Config::default();

        let base_url = get("COINGECKO_BASE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or(defaults.base_url);
        let api_key = get("COINGECKO_API_KEY").map(|key| key.trim().to_string());

        let error_policy = match get("COINGECKO_ERROR_POLICY") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                key: "COINGECKO_ERROR_POLICY",
                value,
            })?,
            None => defaults.error_policy,
        };

        let timeout = match get("COINGECKO_TIMEOUT_SECS") {
            Some(value) => match parse_number::<u64>("COINGECKO_TIMEOUT_SECS", value.clone())? {
                0 => {
                    return Err(ConfigError::Invalid {
                        key: "COINGECKO_TIMEOUT_SECS",
                        value,
                    })
                }
                secs => Duration::from_secs(secs),
            },
            None => defaults.timeout,
        };

        let host = get("SERVER_HOST").unwrap_or(defaults.host);
        let port = match get("SERVER_PORT") {
            Some(value) => parse_number("SERVER_PORT", value)?,
            None => defaults.port,
        };

        let market_watch_interval = match get("MARKET_WATCH_INTERVAL_SECS") {
            Some(value) => match parse_number::<u64>("MARKET_WATCH_INTERVAL_SECS", value)? {
                0 => None,
                secs => Some(Duration::from_secs(secs)),
            },
            None => defaults.market_watch_interval,
        };

        Ok(Self {
            base_url,
            api_key,
            error_policy,
            timeout,
            host,
            port,
            market_watch_interval,
        })
    }
}

fn parse_number<T: FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::Invalid { key, value })
}
