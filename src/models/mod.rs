use serde::{Deserialize, Serialize};

use crate::utils::{deserialize_lenient_f64, deserialize_lenient_string};

pub mod coin_detail;
pub mod market_chart;

pub use coin_detail::CoinDetail;
pub use market_chart::MarketChart;

/// One row of `/coins/markets`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Cryptocurrency {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(deserialize_with = "deserialize_lenient_f64")]
    pub current_price: f64,
    #[serde(deserialize_with = "deserialize_lenient_f64")]
    pub price_change_percentage_24h: f64,
    #[serde(deserialize_with = "deserialize_lenient_f64")]
    pub market_cap: f64,
}

/// Wider view of the same `/coins/markets` row, with rank and supply figures.
/// The 24h change is kept as text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RankedCryptocurrency {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(deserialize_with = "deserialize_lenient_f64")]
    pub current_price: f64,
    #[serde(deserialize_with = "deserialize_lenient_f64")]
    pub market_cap: f64,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub circulating_supply: Option<f64>,
    #[serde(default)]
    pub total_supply: Option<f64>,
    #[serde(default)]
    pub max_supply: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub price_change_percentage_24h: String,
}
