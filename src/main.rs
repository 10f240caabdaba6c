mod config;
mod error;
mod models;
mod routes;
mod utils;
use actix_cors::Cors;
use actix_web::{get, middleware::Logger, web::Data, App, HttpResponse, HttpServer, Responder};
use config::Config;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use utils::{coingecko::CoinGecko, cron::start_market_watch};

#[get("/")]
async fn home() -> impl Responder {
    HttpResponse::Ok().body("Coin Market Watch")
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coin_market_watch=info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| {
        error!("Error loading configuration: {}", e);
        e
    })?;
    let coingecko = CoinGecko::init(&config).map_err(|e| {
        error!("Error building CoinGecko client: {}", e);
        e
    })?;
    info!(
        "CoinGecko client ready: base_url={} policy={:?}",
        config.base_url,
        coingecko.error_policy()
    );

    if let Some(period) = config.market_watch_interval {
        let coingecko_clone = coingecko.clone();
        tokio::spawn(async move { start_market_watch(coingecko_clone, period).await });
    }

    let coingecko_data = Data::new(coingecko);
    info!("Listening on {}:{}", config.host, config.port);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(coingecko_data.clone())
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .service(home)
            .configure(routes::markets::init)
    })
    .bind((config.host.as_str(), config.port))?
    .run();

    server.await?;

    Ok(())
}
