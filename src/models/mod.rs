pub mod customer;
pub mod leaderboard;

pub use customer::{BetStatus, Country, CustomerBet, SettledBet};
pub use leaderboard::{CountryFilter, LeaderboardEntry};
