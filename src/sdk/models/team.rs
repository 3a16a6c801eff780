use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::player::PlayerBase;

/// Team summary as nested inside a league.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TeamBase {
    pub league_id: i64,
    pub team_id: i64,
    pub team_name: String,
    pub last_changed_date: NaiveDate,
}

/// Team with its roster.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Team {
    pub league_id: i64,
    pub team_id: i64,
    pub team_name: String,
    pub last_changed_date: NaiveDate,
    #[serde(default)]
    pub players: Vec<PlayerBase>,
}

/// Roster membership row. Only ever delivered through bulk export.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TeamPlayer {
    pub team_id: i64,
    pub player_id: i64,
    pub last_changed_date: NaiveDate,
}

impl From<&Team> for TeamBase {
    fn from(team: &Team) -> Self {
        TeamBase {
            league_id: team.league_id,
            team_id: team.team_id,
            team_name: team.team_name.clone(),
            last_changed_date: team.last_changed_date,
        }
    }
}
