pub mod fetch;
pub mod reconciler;
pub mod selection;
pub mod view;

pub use fetch::LeaderboardClient;
pub use reconciler::{FetchTicket, Reconciler};
pub use selection::{Selection, Toggle};
