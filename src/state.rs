use std::sync::Arc;

use crate::db::BetRecords;

#[derive(Clone)]
pub struct AppState {
    pub records: SharedRecords,
}

impl AppState {
    pub fn new(records: impl BetRecords + 'static) -> Self {
        Self {
            records: Arc::new(records),
        }
    }
}

pub type SharedRecords = Arc<dyn BetRecords>;
