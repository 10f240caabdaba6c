use std::time::Duration;

use tracing::{error, info};

use super::{coingecko::CoinGecko, round_to_cents};

pub async fn start_market_watch(coingecko: CoinGecko, period: Duration) {
    let mut interval = tokio::time::interval(period);
    loop {
        interval.tick().await;
        info!("Fetching latest market listing");
        match coingecko.fetch_crypto_currencies().await {
            Ok(coins) if coins.is_empty() => info!("Market listing is empty"),
            Ok(coins) => {
                for coin in coins {
                    info!(
                        "{} ({}): ${} ({}% 24h)",
                        coin.name,
                        coin.symbol.to_uppercase(),
                        round_to_cents(coin.current_price),
                        round_to_cents(coin.price_change_percentage_24h)
                    );
                }
            }
            Err(e) => error!("Error pulling market listing: {}", e),
        }
    }
}
