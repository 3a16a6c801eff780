use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::team::TeamBase;

/// Scoring system a league awards fantasy points with.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoringType {
    #[serde(rename = "PPR")]
    Ppr,
    #[serde(rename = "Half-PPR")]
    HalfPpr,
    #[serde(rename = "Standard")]
    Standard,
}

impl fmt::Display for ScoringType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ScoringType::Ppr => "PPR",
            ScoringType::HalfPpr => "Half-PPR",
            ScoringType::Standard => "Standard",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct League {
    pub league_id: i64,
    pub league_name: String,
    pub scoring_type: ScoringType,
    pub last_changed_date: NaiveDate,
    #[serde(default)]
    pub teams: Vec<TeamBase>,
}
