use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::models::customer::Country;

/// Filter value meaning "no country restriction".
pub const ALL_COUNTRIES: &str = "ALL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub id: Uuid,
    pub name: String,
    pub country: Country,
    pub total_bets: u64,
    pub win_percentage: u64,
    #[serde(with = "rust_decimal::serde::float")]
    pub profit: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CountryFilter {
    #[default]
    All,
    /// Restrict to these countries. Empty means nothing matches.
    Only(BTreeSet<Country>),
}

impl CountryFilter {
    /// Builds a filter from raw `country` query values.
    ///
    /// No values, blank values only, or any `ALL` value yield [`CountryFilter::All`].
    /// Unrecognised values are dropped, so a request made only of unknown
    /// countries matches no customer at all.
    pub fn from_params<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values: Vec<String> = values
            .into_iter()
            .map(|v| v.as_ref().trim().to_string())
            .filter(|v| !v.is_empty())
            .collect();

        if values.is_empty()
            || values
                .iter()
                .any(|v| v.eq_ignore_ascii_case(ALL_COUNTRIES))
        {
            return CountryFilter::All;
        }

        let countries = values
            .iter()
            .filter_map(|raw| match raw.parse::<Country>() {
                Ok(country) => Some(country),
                Err(e) => {
                    tracing::warn!("Ignoring country filter value: {}", e);
                    None
                }
            })
            .collect();

        CountryFilter::Only(countries)
    }

    pub fn matches(&self, country: Country) -> bool {
        match self {
            CountryFilter::All => true,
            CountryFilter::Only(countries) => countries.contains(&country),
        }
    }

    /// True when no customer can ever pass this filter.
    pub fn is_empty(&self) -> bool {
        matches!(self, CountryFilter::Only(countries) if countries.is_empty())
    }

    /// Countries to restrict to, `None` when unrestricted.
    pub fn countries(&self) -> Option<&BTreeSet<Country>> {
        match self {
            CountryFilter::All => None,
            CountryFilter::Only(countries) => Some(countries),
        }
    }
}

impl FromIterator<Country> for CountryFilter {
    fn from_iter<T: IntoIterator<Item = Country>>(iter: T) -> Self {
        CountryFilter::Only(iter.into_iter().collect())
    }
}
