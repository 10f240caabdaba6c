use crate::config::{Config, ErrorPolicy};
use crate::error::CoinGeckoError;
use crate::models::{CoinDetail, Cryptocurrency, MarketChart, RankedCryptocurrency};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client, RequestBuilder, Url,
};
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

pub const API_KEY_HEADER: &str = "x-cg-demo-api-key";

const MARKETS_QUERY: [(&str, &str); 5] = [
    ("vs_currency", "usd"),
    ("order", "market_cap_desc"),
    ("per_page", "10"),
    ("page", "1"),
    ("sparkline", "false"),
];

const MARKET_CHART_QUERY: [(&str, &str); 2] = [("vs_currency", "usd"), ("days", "1")];

// URL parsing drops `.` and `..` segments even when percent-encoded, and an
// empty id leaves an empty segment, so none of them can address a coin.
fn coin_segment(coin_id: &str) -> Result<&str, CoinGeckoError> {
    match coin_id {
        "" | "." | ".." => Err(CoinGeckoError::InvalidCoinId(coin_id.to_string())),
        _ => Ok(coin_id),
    }
}

#[derive(Clone, Debug)]
pub struct CoinGecko {
    client: Client,
    base_url: Url,
    error_policy: ErrorPolicy,
}

impl CoinGecko {
    pub fn init(config: &Config) -> Result<Self, CoinGeckoError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| CoinGeckoError::InvalidBaseUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(CoinGeckoError::InvalidBaseUrl(config.base_url.clone()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(api_key) = &config.api_key {
            let value = HeaderValue::from_str(api_key)
                .map_err(|e| CoinGeckoError::InvalidHeader(e.to_string()))?;
            headers.insert(API_KEY_HEADER, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url,
            error_policy: config.error_policy,
        })
    }

    pub fn error_policy(&self) -> ErrorPolicy {
        self.error_policy
    }

    // Each segment is percent-encoded on its own, so an id containing `/`
    // stays a single segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub fn markets_request(&self) -> RequestBuilder {
        self.client
            .get(self.endpoint(&["coins", "markets"]))
            .query(&MARKETS_QUERY)
    }

    pub fn market_chart_request(&self, coin_id: &str) -> Result<RequestBuilder, CoinGeckoError> {
        let coin_id = coin_segment(coin_id)?;
        Ok(self
            .client
            .get(self.endpoint(&["coins", coin_id, "market_chart"]))
            .query(&MARKET_CHART_QUERY))
    }

    pub fn coin_request(&self, coin_id: &str) -> Result<RequestBuilder, CoinGeckoError> {
        let coin_id = coin_segment(coin_id)?;
        Ok(self.client.get(self.endpoint(&["coins", coin_id])))
    }

    // Top 10 coins by market cap, priced in USD
    pub async fn fetch_crypto_currencies(&self) -> Result<Vec<Cryptocurrency>, CoinGeckoError> {
        let result = self.send(self.markets_request()).await;
        self.handle_api_call("fetch_crypto_currencies", result, Vec::new)
    }

    pub async fn fetch_ranked_crypto_currencies(
        &self,
    ) -> Result<Vec<RankedCryptocurrency>, CoinGeckoError> {
        let result = self.send(self.markets_request()).await;
        self.handle_api_call("fetch_ranked_crypto_currencies", result, Vec::new)
    }

    // One day of USD price, market cap and volume history
    pub async fn fetch_historical(&self, coin_id: &str) -> Result<MarketChart, CoinGeckoError> {
        let result = match self.market_chart_request(coin_id) {
            Ok(builder) => self.send(builder).await,
            Err(err) => Err(err),
        };
        self.handle_api_call("fetch_historical", result, MarketChart::default)
    }

    pub async fn fetch_crypto_extra_info(
        &self,
        coin_id: &str,
    ) -> Result<Option<CoinDetail>, CoinGeckoError> {
        let result = match self.coin_request(coin_id) {
            Ok(builder) => self.send::<CoinDetail>(builder).await.map(Some),
            Err(err) => Err(err),
        };
        self.handle_api_call("fetch_crypto_extra_info", result, || None)
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, CoinGeckoError> {
        let request = builder.build()?;
        debug!(url = %request.url(), "Sending CoinGecko request");

        let response = self.client.execute(request).await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CoinGeckoError::Status { status, body });
        }

        Ok(response.json::<T>().await?)
    }

    fn handle_api_call<T>(
        &self,
        operation: &str,
        result: Result<T, CoinGeckoError>,
        empty: impl FnOnce() -> T,
    ) -> Result<T, CoinGeckoError> {
        match (result, self.error_policy) {
            (Ok(value), _) => Ok(value),
            (Err(err), ErrorPolicy::Propagate) => {
                error!(operation, error = %err, "API call failed");
                Err(err)
            }
            (Err(err), ErrorPolicy::Fallback) => {
                warn!(operation, error = %err, "API call failed, returning empty result");
                Ok(empty())
            }
        }
    }
}
