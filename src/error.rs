use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoinGeckoError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),
    #[error("Invalid coin id: {0:?}")]
    InvalidCoinId(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

impl From<CoinGeckoError> for std::io::Error {
    fn from(err: CoinGeckoError) -> Self {
        std::io::Error::new(std::io::ErrorKind::Other, err.to_string())
    }
}

impl From<ConfigError> for std::io::Error {
    fn from(err: ConfigError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string())
    }
}
