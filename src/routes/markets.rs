use actix_web::{
    get,
    web::{self, ServiceConfig},
    HttpResponse, Responder,
};
use serde_json::json;
use tracing::debug;

use crate::{error::CoinGeckoError, utils::coingecko::CoinGecko};

fn error_response(err: CoinGeckoError) -> HttpResponse {
    let body = json!({ "error": err.to_string() });
    match err {
        CoinGeckoError::InvalidCoinId(_) => HttpResponse::BadRequest().json(body),
        _ => HttpResponse::BadGateway().json(body),
    }
}

#[get("/markets")]
pub async fn markets(coingecko: web::Data<CoinGecko>) -> impl Responder {
    match coingecko.fetch_crypto_currencies().await {
        Ok(coins) => HttpResponse::Ok().json(coins),
        Err(err) => error_response(err),
    }
}

#[get("/markets/ranked")]
pub async fn ranked_markets(coingecko: web::Data<CoinGecko>) -> impl Responder {
    match coingecko.fetch_ranked_crypto_currencies().await {
        Ok(coins) => HttpResponse::Ok().json(coins),
        Err(err) => error_response(err),
    }
}

#[get("/coins/{id}/market_chart")]
pub async fn market_chart(
    coingecko: web::Data<CoinGecko>,
    path: web::Path<String>,
) -> impl Responder {
    let coin_id = path.into_inner();
    match coingecko.fetch_historical(&coin_id).await {
        Ok(chart) => HttpResponse::Ok().json(chart),
        Err(err) => error_response(err),
    }
}

#[get("/coins/{id}/market_chart/points")]
pub async fn market_chart_points(
    coingecko: web::Data<CoinGecko>,
    path: web::Path<String>,
) -> impl Responder {
    let coin_id = path.into_inner();
    match coingecko.fetch_historical(&coin_id).await {
        Ok(chart) => {
            let points = chart.price_points();
            debug!("{} price points for {}", points.len(), coin_id);
            HttpResponse::Ok().json(points)
        }
        Err(err) => error_response(err),
    }
}

#[get("/coins/{id}")]
pub async fn coin_detail(
    coingecko: web::Data<CoinGecko>,
    path: web::Path<String>,
) -> impl Responder {
    let coin_id = path.into_inner();
    match coingecko.fetch_crypto_extra_info(&coin_id).await {
        Ok(Some(detail)) => HttpResponse::Ok().json(detail),
        Ok(None) => HttpResponse::NotFound()
            .json(json!({ "error": format!("No detail available for {}", coin_id) })),
        Err(err) => error_response(err),
    }
}

pub fn init(config: &mut ServiceConfig) {
    config
        .service(markets)
        .service(ranked_markets)
        .service(market_chart)
        .service(market_chart_points)
        .service(coin_detail);
}
