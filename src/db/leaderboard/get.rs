use rust_decimal::Decimal;
use std::collections::HashMap;
use uuid::Uuid;

use crate::{
    db::BetRecords,
    errors::AppError,
    models::{BetStatus, Country, CountryFilter, CustomerBet, LeaderboardEntry, SettledBet},
};

pub const LEADERBOARD_SIZE: usize = 10;

pub async fn get_leaderboard(
    records: &dyn BetRecords,
    filter: &CountryFilter,
) -> Result<Vec<LeaderboardEntry>, AppError> {
    if filter.is_empty() {
        return Ok(Vec::new());
    }

    let rows = records.completed_bets(filter).await?;
    let leaderboard = rank_customers(rows, filter);

    tracing::debug!(
        "Computed leaderboard with {} entries for {:?}",
        leaderboard.len(),
        filter
    );

    Ok(leaderboard)
}

struct Tally {
    name: String,
    country: Country,
    won: u64,
    lost: u64,
    winnings: Decimal,
    losses: Decimal,
}

impl Tally {
    fn record(&mut self, bet: &SettledBet) {
        match bet.status {
            BetStatus::Won => self.won += 1,
            BetStatus::Lost => self.lost += 1,
            BetStatus::Pending => return,
        }
        self.winnings += bet.winnings();
        self.losses += bet.loss();
    }

    fn into_entry(self, id: Uuid) -> LeaderboardEntry {
        let total_bets = self.won + self.lost;
        LeaderboardEntry {
            id,
            name: self.name,
            country: self.country,
            total_bets,
            win_percentage: win_percentage(self.won, total_bets),
            profit: self.winnings - self.losses,
        }
    }
}

/// Share of won bets rounded half up, 0 when nothing was completed.
pub fn win_percentage(won: u64, completed: u64) -> u64 {
    if completed == 0 {
        return 0;
    }
    (200 * won + completed) / (2 * completed)
}

/// Groups joined rows per customer, keeps customers in profit and returns the
/// top [`LEADERBOARD_SIZE`] by profit. Equal profits are ordered by name, then id.
pub fn rank_customers<I>(rows: I, filter: &CountryFilter) -> Vec<LeaderboardEntry>
where
    I: IntoIterator<Item = CustomerBet>,
{
    let mut tallies: HashMap<Uuid, Tally> = HashMap::new();

    for row in rows {
        if !filter.matches(row.country) {
            continue;
        }

        let tally = tallies.entry(row.customer_id).or_insert_with(|| Tally {
            name: row.display_name(),
            country: row.country,
            won: 0,
            lost: 0,
            winnings: Decimal::ZERO,
            losses: Decimal::ZERO,
        });

        if let Some(bet) = &row.bet {
            tally.record(bet);
        }
    }

    let mut leaderboard: Vec<LeaderboardEntry> = tallies
        .into_iter()
        .map(|(id, tally)| tally.into_entry(id))
        .filter(|entry| entry.profit > Decimal::ZERO)
        .collect();

    leaderboard.sort_by(|a, b| {
        b.profit
            .cmp(&a.profit)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.id.cmp(&b.id))
    });
    leaderboard.truncate(LEADERBOARD_SIZE);

    leaderboard
}
