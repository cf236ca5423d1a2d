mod common;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use common::{MemoryRecords, sample_rows};
use coolbet_leaderboard::{
    build_app,
    config::Config,
    errors::ErrorBody,
    middleware::create_rate_limiter,
    http::create_http_routes,
    models::{Country, LeaderboardEntry},
    state::AppState,
};
use tower::ServiceExt;

fn app(records: MemoryRecords) -> Router {
    create_http_routes(AppState::new(records))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn get_entries(app: Router, uri: &str) -> Vec<LeaderboardEntry> {
    let (status, body) = get(app, uri).await;
    assert_eq!(status, StatusCode::OK, "unexpected status for {}", uri);
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_customers_returns_unfiltered_top_ten() {
    let entries = get_entries(app(MemoryRecords::new(sample_rows())), "/customers").await;

    assert_eq!(entries.len(), 10);
    assert_eq!(entries[0].name, "Player 14");
}

#[tokio::test]
async fn test_leaderboard_without_country_matches_customers() {
    let customers = get_entries(app(MemoryRecords::new(sample_rows())), "/customers").await;
    let leaderboard = get_entries(app(MemoryRecords::new(sample_rows())), "/leaderboard").await;
    let all = get_entries(
        app(MemoryRecords::new(sample_rows())),
        "/leaderboard?country=ALL",
    )
    .await;

    assert_eq!(customers, leaderboard);
    assert_eq!(customers, all);
}

#[tokio::test]
async fn test_leaderboard_with_repeated_country_params() {
    let entries = get_entries(
        app(MemoryRecords::new(sample_rows())),
        "/leaderboard?country=Estonia&country=Finland",
    )
    .await;

    assert_eq!(entries.len(), 6);
    assert!(
        entries
            .iter()
            .all(|e| matches!(e.country, Country::Estonia | Country::Finland))
    );
    assert!(entries.windows(2).all(|w| w[0].profit >= w[1].profit));
}

#[tokio::test]
async fn test_leaderboard_with_single_country() {
    let entries = get_entries(
        app(MemoryRecords::new(sample_rows())),
        "/leaderboard?country=Norway",
    )
    .await;

    assert_eq!(entries.len(), 3);
    assert!(entries.iter().all(|e| e.country == Country::Norway));
}

#[tokio::test]
async fn test_unknown_country_returns_empty_list() {
    let entries = get_entries(
        app(MemoryRecords::new(sample_rows())),
        "/leaderboard?country=Atlantis",
    )
    .await;

    assert!(entries.is_empty());
}

#[tokio::test]
async fn test_store_failure_returns_500_with_error_body() {
    let (status, body) = get(app(MemoryRecords::failing()), "/leaderboard?country=Chile").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error: ErrorBody = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error, "Failed to fetch leaderboard data");

    let (status, body) = get(app(MemoryRecords::failing()), "/customers").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error: ErrorBody = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error, "Failed to fetch customers");
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(app(MemoryRecords::new(Vec::new())), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
}

#[tokio::test]
async fn test_unknown_route_is_rate_limited() {
    let config = Config {
        database_url: "postgres://unused".into(),
        port: 0,
        allowed_origins: vec!["http://localhost:5173".into()],
        rate_limit_per_minute: 1,
        db_max_connections: 1,
    };
    let app = build_app(
        AppState::new(MemoryRecords::new(sample_rows())),
        &config,
        create_rate_limiter(config.rate_limit_per_minute).unwrap(),
    )
    .unwrap();

    let (status, body) = get(app.clone(), "/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, b"404 Not Found");

    let (status, _) = get(app, "/missing").await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
}
