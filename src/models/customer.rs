use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Country {
    Estonia,
    Finland,
    Norway,
    Chile,
    Canada,
}

impl Country {
    pub const ALL: [Country; 5] = [
        Country::Estonia,
        Country::Finland,
        Country::Norway,
        Country::Chile,
        Country::Canada,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Estonia => "Estonia",
            Country::Finland => "Finland",
            Country::Norway => "Norway",
            Country::Chile => "Chile",
            Country::Canada => "Canada",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Country {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "estonia" => Ok(Country::Estonia),
            "finland" => Ok(Country::Finland),
            "norway" => Ok(Country::Norway),
            "chile" => Ok(Country::Chile),
            "canada" => Ok(Country::Canada),
            other => Err(format!("Unknown Country: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BetStatus {
    Pending,
    Won,
    Lost,
}

impl FromStr for BetStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(BetStatus::Pending),
            "WON" => Ok(BetStatus::Won),
            "LOST" => Ok(BetStatus::Lost),
            other => Err(format!("Unknown BetStatus: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettledBet {
    pub stake: Decimal,
    pub odds: Decimal,
    pub status: BetStatus,
}

impl SettledBet {
    /// Amount won on top of the stake. Zero unless the bet was won.
    pub fn winnings(&self) -> Decimal {
        match self.status {
            BetStatus::Won => self.stake * self.odds - self.stake,
            _ => Decimal::ZERO,
        }
    }

    /// Stake forfeited. Zero unless the bet was lost.
    pub fn loss(&self) -> Decimal {
        match self.status {
            BetStatus::Lost => self.stake,
            _ => Decimal::ZERO,
        }
    }
}

/// One row of the customer/bet left join. `bet` is `None` for customers
/// without any completed bet.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerBet {
    pub customer_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub country: Country,
    pub bet: Option<SettledBet>,
}

impl CustomerBet {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
