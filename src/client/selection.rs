use std::{collections::BTreeSet, fmt, str::FromStr};

use crate::models::{Country, CountryFilter, leaderboard::ALL_COUNTRIES};

/// A country button: either the `ALL` sentinel or one country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    All,
    Country(Country),
}

impl fmt::Display for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Toggle::All => f.write_str(ALL_COUNTRIES),
            Toggle::Country(country) => write!(f, "{}", country),
        }
    }
}

impl FromStr for Toggle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL_COUNTRIES) {
            Ok(Toggle::All)
        } else {
            s.parse().map(Toggle::Country)
        }
    }
}

impl From<Country> for Toggle {
    fn from(country: Country) -> Self {
        Toggle::Country(country)
    }
}

/// Selected countries. `Subset` is never empty and never holds `ALL`;
/// [`Selection::toggle`] falls back to `All` instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Subset(BTreeSet<Country>),
}

impl Selection {
    /// Applies one button press. Returns whether the selection changed.
    pub fn toggle(&mut self, target: Toggle, should_select: bool) -> bool {
        let next = match (target, should_select) {
            (Toggle::All, _) => Selection::All,
            (Toggle::Country(country), true) => {
                let mut countries = self.countries().cloned().unwrap_or_default();
                countries.insert(country);
                Selection::Subset(countries)
            }
            (Toggle::Country(country), false) => {
                let mut countries = self.countries().cloned().unwrap_or_default();
                countries.remove(&country);
                if countries.is_empty() {
                    Selection::All
                } else {
                    Selection::Subset(countries)
                }
            }
        };

        let changed = next != *self;
        *self = next;
        changed
    }

    pub fn is_selected(&self, target: Toggle) -> bool {
        match (self, target) {
            (Selection::All, Toggle::All) => true,
            (Selection::Subset(countries), Toggle::Country(country)) => countries.contains(&country),
            _ => false,
        }
    }

    pub fn countries(&self) -> Option<&BTreeSet<Country>> {
        match self {
            Selection::All => None,
            Selection::Subset(countries) => Some(countries),
        }
    }

    pub fn to_filter(&self) -> CountryFilter {
        match self {
            Selection::Subset(countries) if !countries.is_empty() => {
                CountryFilter::Only(countries.clone())
            }
            _ => CountryFilter::All,
        }
    }
}
