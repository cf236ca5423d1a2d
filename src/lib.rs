pub mod client;
pub mod config;
pub mod db;
pub mod errors;
pub mod http;
pub mod middleware;
pub mod models;
pub mod state;

use axum::{Router, http::StatusCode, middleware as axum_middleware};
use config::Config;
use db::PgBetRecords;
use errors::AppError;
use middleware::{
    IpRateLimiter, RATE_LIMITER_PRUNE_INTERVAL, cors_layer, create_rate_limiter,
    rate_limit_middleware, spawn_rate_limiter_pruning,
};
use sqlx::postgres::PgPoolOptions;
use state::AppState;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;

/// HTTP routes, 404 fallback included, wrapped in rate limiting, CORS and request tracing.
pub fn build_app(
    state: AppState,
    config: &Config,
    rate_limiter: IpRateLimiter,
) -> Result<Router, AppError> {
    Ok(Router::new()
        .merge(http::create_http_routes(state))
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .layer(axum_middleware::from_fn(move |req, next| {
            rate_limit_middleware(rate_limiter.clone(), req, next)
        }))
        .layer(cors_layer(&config.allowed_origins)?)
        .layer(TraceLayer::new_for_http()))
}

pub async fn start_server() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    let postgres = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to connect to Postgres: {}", e)))?;

    let rate_limiter = create_rate_limiter(config.rate_limit_per_minute)?;
    spawn_rate_limiter_pruning(rate_limiter.clone(), RATE_LIMITER_PRUNE_INTERVAL);

    let state = AppState::new(PgBetRecords::new(postgres));
    let app = build_app(state, &config, rate_limiter)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(
        "Leaderboard server running at http://127.0.0.1:{}/leaderboard",
        config.port
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
