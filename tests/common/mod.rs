#![allow(dead_code)]

use async_trait::async_trait;
use coolbet_leaderboard::{
    db::BetRecords,
    errors::AppError,
    models::{BetStatus, Country, CountryFilter, CustomerBet, SettledBet},
};
use rust_decimal::Decimal;
use uuid::Uuid;

pub struct MemoryRecords {
    rows: Vec<CustomerBet>,
    fail: bool,
}

impl MemoryRecords {
    pub fn new(rows: Vec<CustomerBet>) -> Self {
        Self { rows, fail: false }
    }

    pub fn failing() -> Self {
        Self {
            rows: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl BetRecords for MemoryRecords {
    async fn completed_bets(&self, filter: &CountryFilter) -> Result<Vec<CustomerBet>, AppError> {
        if self.fail {
            return Err(AppError::DatabaseError("connection refused".into()));
        }
        Ok(self
            .rows
            .iter()
            .filter(|row| filter.matches(row.country))
            .cloned()
            .collect())
    }
}

pub fn customer_id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

pub fn no_bets(id: u128, name: &str, country: Country) -> CustomerBet {
    let (first, last) = name.split_once(' ').unwrap_or((name, ""));
    CustomerBet {
        customer_id: customer_id(id),
        first_name: first.to_string(),
        last_name: last.to_string(),
        country,
        bet: None,
    }
}

pub fn dec(amount: &str) -> Decimal {
    amount.parse().unwrap()
}

pub fn won(id: u128, name: &str, country: Country, stake: &str, odds: &str) -> CustomerBet {
    with_bet(id, name, country, dec(stake), dec(odds), BetStatus::Won)
}

pub fn lost(id: u128, name: &str, country: Country, stake: &str) -> CustomerBet {
    with_bet(id, name, country, dec(stake), dec("2"), BetStatus::Lost)
}

fn with_bet(
    id: u128,
    name: &str,
    country: Country,
    stake: Decimal,
    odds: Decimal,
    status: BetStatus,
) -> CustomerBet {
    CustomerBet {
        bet: Some(SettledBet {
            stake,
            odds,
            status,
        }),
        ..no_bets(id, name, country)
    }
}

/// Fifteen profitable customers spread over every country plus a few that
/// never make the board.
pub fn sample_rows() -> Vec<CustomerBet> {
    let mut rows = Vec::new();
    for i in 0..15u128 {
        let country = Country::ALL[(i % 5) as usize];
        let name = format!("Player {}", i);
        rows.push(won(i + 1, &name, country, &(10 + i).to_string(), "2"));
        rows.push(lost(i + 1, &name, country, "1"));
    }
    rows.push(no_bets(100, "Idle Customer", Country::Finland));
    rows.push(lost(101, "Unlucky Customer", Country::Estonia, "50"));
    rows
}
