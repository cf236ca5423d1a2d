pub mod leaderboard;
pub mod records;

pub use leaderboard::get::{LEADERBOARD_SIZE, get_leaderboard, rank_customers};
pub use records::{BetRecords, PgBetRecords};
