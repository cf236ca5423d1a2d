use axum::{
    extract::{ConnectInfo, Request},
    http::{HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::Response,
};
use governor::{Quota, RateLimiter, clock::DefaultClock, state::keyed::DefaultKeyedStateStore};
use std::{net::SocketAddr, num::NonZeroU32, sync::Arc, time::Duration};
use tower_http::cors::CorsLayer;

use crate::errors::AppError;

pub type IpRateLimiter = Arc<RateLimiter<String, DefaultKeyedStateStore<String>, DefaultClock>>;

pub fn create_rate_limiter(per_minute: u32) -> Result<IpRateLimiter, AppError> {
    let per_minute = NonZeroU32::new(per_minute)
        .ok_or_else(|| AppError::EnvError("RATE_LIMIT_PER_MINUTE must be greater than 0".into()))?;
    Ok(Arc::new(RateLimiter::keyed(Quota::per_minute(per_minute))))
}

pub const RATE_LIMITER_PRUNE_INTERVAL: Duration = Duration::from_secs(60);

/// Drops per-IP state that has fully replenished. Returns the number of IPs still tracked.
pub fn prune_rate_limiter(rate_limiter: &IpRateLimiter) -> usize {
    rate_limiter.retain_recent();
    rate_limiter.shrink_to_fit();
    rate_limiter.len()
}

pub fn spawn_rate_limiter_pruning(
    rate_limiter: IpRateLimiter,
    every: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        // first tick completes immediately
        interval.tick().await;
        loop {
            interval.tick().await;
            let tracked = prune_rate_limiter(&rate_limiter);
            tracing::debug!("Rate limiter pruned, {} IPs tracked", tracked);
        }
    })
}

// IP-based rate limiting middleware function
pub async fn rate_limit_middleware(
    rate_limiter: IpRateLimiter,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let client_ip =
        if let Some(ConnectInfo(addr)) = request.extensions().get::<ConnectInfo<SocketAddr>>() {
            addr.ip().to_string()
        } else {
            "unknown".to_string()
        };

    match rate_limiter.check_key(&client_ip) {
        Ok(_) => Ok(next.run(request).await),
        Err(_) => {
            tracing::warn!("Rate limit exceeded for IP: {}", client_ip);
            Err(StatusCode::TOO_MANY_REQUESTS)
        }
    }
}

// Read-only API, so only GET (and preflight) is allowed cross-origin
pub fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer, AppError> {
    let origins = allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| AppError::EnvError(format!("Invalid allowed origin: {}", origin)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!("CORS allowed origins: {:?}", origins);

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600)))
}
