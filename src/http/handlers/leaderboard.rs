use axum::{extract::State, http::StatusCode, response::Json};
use axum_extra::extract::Query;
use serde::Deserialize;

use crate::{
    db::get_leaderboard,
    errors::ErrorBody,
    models::{CountryFilter, LeaderboardEntry},
    state::AppState,
};

type HandlerResult<T> = Result<Json<T>, (StatusCode, Json<ErrorBody>)>;

#[derive(Debug, Default, Deserialize)]
pub struct LeaderboardQuery {
    #[serde(default)]
    pub country: Vec<String>,
}

pub async fn get_customers_handler(
    State(state): State<AppState>,
) -> HandlerResult<Vec<LeaderboardEntry>> {
    let leaderboard = get_leaderboard(state.records.as_ref(), &CountryFilter::All)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get customers: {}", e);
            e.to_response("Failed to fetch customers")
        })?;

    Ok(Json(leaderboard))
}

pub async fn get_leaderboard_handler(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> HandlerResult<Vec<LeaderboardEntry>> {
    let filter = CountryFilter::from_params(&query.country);

    let leaderboard = get_leaderboard(state.records.as_ref(), &filter)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get leaderboard: {}", e);
            e.to_response("Failed to fetch leaderboard data")
        })?;

    Ok(Json(leaderboard))
}

pub async fn health_handler() -> &'static str {
    "ok"
}
