use rust_decimal::{Decimal, RoundingStrategy};

use crate::{client::selection::Toggle, models::LeaderboardEntry};

pub const CURRENCY: &str = "€";

pub fn round_profit(profit: Decimal) -> Decimal {
    profit.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

pub fn format_profit(profit: Decimal) -> String {
    format!("{:.2} {}", round_profit(profit), CURRENCY)
}

/// Header line followed by one line per entry.
pub fn render_rows(rows: &[LeaderboardEntry]) -> Vec<String> {
    let mut lines = vec![format!(
        "{:<24} {:<10} {:>10} {:>6} {:>14}",
        "Name", "Country", "Total Bets", "Win %", "Profit"
    )];

    lines.extend(rows.iter().map(|row| {
        format!(
            "{:<24} {:<10} {:>10} {:>6} {:>14}",
            row.name,
            row.country.as_str(),
            row.total_bets,
            row.win_percentage,
            format_profit(row.profit)
        )
    }));

    lines
}

/// Country buttons on one line, selected ones in brackets.
pub fn render_buttons(buttons: &[(Toggle, bool)]) -> String {
    buttons
        .iter()
        .map(|(toggle, selected)| {
            if *selected {
                format!("[{}]", toggle)
            } else {
                toggle.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
