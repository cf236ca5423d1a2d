use reqwest::Url;

use crate::{
    errors::AppError,
    models::{CountryFilter, LeaderboardEntry},
};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

#[derive(Debug, Clone)]
pub struct LeaderboardClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for LeaderboardClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl LeaderboardClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// `/leaderboard` with one `country` pair per selected country, bare when unfiltered.
    pub fn leaderboard_url(&self, filter: &CountryFilter) -> Result<Url, AppError> {
        let mut url = Url::parse(&format!("{}/leaderboard", self.base_url))
            .map_err(|e| AppError::BadRequest(format!("Invalid leaderboard url: {}", e)))?;

        if let Some(countries) = filter.countries() {
            let mut pairs = url.query_pairs_mut();
            for country in countries {
                pairs.append_pair("country", country.as_str());
            }
        }

        Ok(url)
    }

    pub async fn fetch_leaderboard(
        &self,
        filter: &CountryFilter,
    ) -> Result<Vec<LeaderboardEntry>, AppError> {
        if filter.is_empty() {
            return Ok(Vec::new());
        }
        let url = self.leaderboard_url(filter)?;
        self.get_entries(url).await
    }

    pub async fn fetch_customers(&self) -> Result<Vec<LeaderboardEntry>, AppError> {
        let url = Url::parse(&format!("{}/customers", self.base_url))
            .map_err(|e| AppError::BadRequest(format!("Invalid customers url: {}", e)))?;
        self.get_entries(url).await
    }

    async fn get_entries(&self, url: Url) -> Result<Vec<LeaderboardEntry>, AppError> {
        tracing::debug!("Fetching from URL: {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::UpstreamError(format!(
                "HTTP error! Status: {}",
                status
            )));
        }

        Ok(response.json::<Vec<LeaderboardEntry>>().await?)
    }
}
