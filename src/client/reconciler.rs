use crate::{
    client::{
        fetch::LeaderboardClient,
        selection::{Selection, Toggle},
    },
    errors::AppError,
    models::{Country, CountryFilter, LeaderboardEntry},
};

/// A leaderboard request issued by the reconciler. Only the response for the
/// most recently issued ticket is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub filter: CountryFilter,
}

/// Client-side leaderboard state: the country selection, the displayed rows
/// and the loading flag.
#[derive(Debug)]
pub struct Reconciler {
    selection: Selection,
    rows: Vec<LeaderboardEntry>,
    available: Vec<Country>,
    loading: bool,
    issued: u64,
}

impl Default for Reconciler {
    fn default() -> Self {
        Self::new()
    }
}

impl Reconciler {
    pub fn new() -> Self {
        Self {
            selection: Selection::All,
            rows: Vec::new(),
            available: Country::ALL.to_vec(),
            loading: true,
            issued: 0,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn rows(&self) -> &[LeaderboardEntry] {
        &self.rows
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn available_countries(&self) -> &[Country] {
        &self.available
    }

    /// `ALL` followed by every available country, with its selected state.
    pub fn buttons(&self) -> Vec<(Toggle, bool)> {
        std::iter::once(Toggle::All)
            .chain(self.available.iter().copied().map(Toggle::Country))
            .map(|toggle| (toggle, self.selection.is_selected(toggle)))
            .collect()
    }

    /// Returns a ticket to fetch when the selection changed.
    pub fn toggle(&mut self, target: Toggle, should_select: bool) -> Option<FetchTicket> {
        if self.selection.toggle(target, should_select) {
            Some(self.issue())
        } else {
            None
        }
    }

    /// A button press flips the button's current state.
    pub fn click(&mut self, target: Toggle) -> Option<FetchTicket> {
        let should_select = !self.selection.is_selected(target);
        self.toggle(target, should_select)
    }

    fn issue(&mut self) -> FetchTicket {
        self.issued += 1;
        self.loading = true;
        FetchTicket {
            seq: self.issued,
            filter: self.selection.to_filter(),
        }
    }

    /// Applies a response. Stale responses are discarded and `false` is returned.
    /// A failed fetch empties the table.
    pub fn apply(&mut self, seq: u64, result: Result<Vec<LeaderboardEntry>, AppError>) -> bool {
        if seq != self.issued {
            tracing::debug!(
                "Discarding stale leaderboard response {} (latest {})",
                seq,
                self.issued
            );
            return false;
        }

        self.rows = result.unwrap_or_else(|e| {
            tracing::error!("Error fetching leaderboard: {}", e);
            Vec::new()
        });
        self.loading = false;
        true
    }

    /// Initial unfiltered load. The country buttons are taken from the
    /// countries present on the unfiltered board.
    pub async fn load(&mut self, client: &LeaderboardClient) {
        self.selection = Selection::All;
        let ticket = self.issue();
        let result = client.fetch_customers().await;

        if let Ok(rows) = &result {
            let mut countries: Vec<Country> = Vec::new();
            for row in rows {
                if !countries.contains(&row.country) {
                    countries.push(row.country);
                }
            }
            if !countries.is_empty() {
                self.available = countries;
            }
        }

        self.apply(ticket.seq, result);
    }

    pub async fn refresh(&mut self, client: &LeaderboardClient, ticket: FetchTicket) -> bool {
        let result = client.fetch_leaderboard(&ticket.filter).await;
        self.apply(ticket.seq, result)
    }

    pub async fn toggle_and_refresh(
        &mut self,
        client: &LeaderboardClient,
        target: Toggle,
        should_select: bool,
    ) -> bool {
        match self.toggle(target, should_select) {
            Some(ticket) => self.refresh(client, ticket).await,
            None => false,
        }
    }
}
