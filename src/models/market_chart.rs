use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::datetime_from_millis;

/// Response of `/coins/{id}/market_chart`. Every series is `[timestamp_ms, value]`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct MarketChart {
    #[serde(default)]
    pub prices: Vec<[f64; 2]>,
    #[serde(default)]
    pub market_caps: Vec<[f64; 2]>,
    #[serde(default)]
    pub total_volumes: Vec<[f64; 2]>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub at: DateTime<Utc>,
    pub value: f64,
}

impl MarketChart {
    /// Price series with parsed timestamps; out-of-range timestamps are skipped.
    pub fn price_points(&self) -> Vec<PricePoint> {
        self.prices
            .iter()
            .filter_map(|[millis, value]| {
                datetime_from_millis(*millis).map(|at| PricePoint { at, value: *value })
            })
            .collect()
    }
}
