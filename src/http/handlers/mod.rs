pub mod leaderboard;

pub use leaderboard::{get_customers_handler, get_leaderboard_handler, health_handler};
