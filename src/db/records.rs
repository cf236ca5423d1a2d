use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::{BetStatus, Country, CountryFilter, CustomerBet, SettledBet},
};

/// Read-only access to customers joined with their completed bets.
#[async_trait]
pub trait BetRecords: Send + Sync {
    /// One row per customer/completed-bet pair, plus a bet-less row for every
    /// customer without completed bets. Only customers passing `filter` are returned.
    async fn completed_bets(&self, filter: &CountryFilter) -> Result<Vec<CustomerBet>, AppError>;
}

#[derive(Clone)]
pub struct PgBetRecords {
    postgres: PgPool,
}

impl PgBetRecords {
    pub fn new(postgres: PgPool) -> Self {
        Self { postgres }
    }
}

#[derive(Debug, FromRow)]
struct CustomerBetRow {
    customer_id: Uuid,
    first_name: String,
    last_name: String,
    country: String,
    stake: Option<Decimal>,
    odds: Option<Decimal>,
    status: Option<String>,
}

impl TryFrom<CustomerBetRow> for CustomerBet {
    type Error = String;

    fn try_from(row: CustomerBetRow) -> Result<Self, Self::Error> {
        let country = row.country.parse::<Country>()?;

        let bet = match (row.status, row.stake, row.odds) {
            (Some(status), Some(stake), Some(odds)) => Some(SettledBet {
                stake,
                odds,
                status: status.parse::<BetStatus>()?,
            }),
            (None, _, _) => None,
            (Some(status), _, _) => {
                return Err(format!("Bet with status {} is missing stake or odds", status));
            }
        };

        Ok(CustomerBet {
            customer_id: row.customer_id,
            first_name: row.first_name,
            last_name: row.last_name,
            country,
            bet,
        })
    }
}

#[async_trait]
impl BetRecords for PgBetRecords {
    async fn completed_bets(&self, filter: &CountryFilter) -> Result<Vec<CustomerBet>, AppError> {
        let countries: Option<Vec<String>> = filter
            .countries()
            .map(|set| set.iter().map(|c| c.to_string()).collect());

        let rows = sqlx::query_as::<_, CustomerBetRow>(
            "SELECT customer.id AS customer_id,
                customer.first_name,
                customer.last_name,
                customer.country::text AS country,
                bet.stake::numeric AS stake,
                bet.odds::numeric AS odds,
                bet.status::text AS status
			FROM customer
			LEFT JOIN bet
				ON bet.customer_id = customer.id
				AND bet.status IN ('WON', 'LOST')
			WHERE $1::text[] IS NULL OR customer.country::text = ANY($1)",
        )
        .bind(countries)
        .fetch_all(&self.postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to fetch customer bets: {}", e)))?;

        let bets = rows
            .into_iter()
            .filter_map(|row| {
                let customer_id = row.customer_id;
                match CustomerBet::try_from(row) {
                    Ok(bet) => Some(bet),
                    Err(e) => {
                        tracing::warn!("Skipping row for customer {}: {}", customer_id, e);
                        None
                    }
                }
            })
            .collect();

        Ok(bets)
    }
}
