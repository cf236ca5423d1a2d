use axum::{Router, routing::get};

use crate::{
    http::handlers::{get_customers_handler, get_leaderboard_handler, health_handler},
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route("/customers", get(get_customers_handler))
        .route("/leaderboard", get(get_leaderboard_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}
