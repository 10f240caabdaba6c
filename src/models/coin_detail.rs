use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Response of `/coins/{id}`, reduced to the fields we surface.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CoinDetail {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub description: HashMap<String, String>,
    #[serde(default)]
    pub links: Option<CoinLinks>,
    #[serde(default)]
    pub image: Option<CoinImage>,
    #[serde(default)]
    pub market_data: Option<CoinMarketData>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CoinLinks {
    #[serde(default)]
    pub homepage: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CoinImage {
    pub thumb: String,
    pub small: String,
    pub large: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CoinMarketData {
    #[serde(default)]
    pub current_price: HashMap<String, f64>,
    #[serde(default)]
    pub market_cap: HashMap<String, f64>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
}
