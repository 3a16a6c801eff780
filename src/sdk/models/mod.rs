pub mod common;
pub mod league;
pub mod performance;
pub mod player;
pub mod team;

pub use common::{Counts, HealthCheck};
pub use league::{League, ScoringType};
pub use performance::Performance;
pub use player::{Player, PlayerBase};
pub use team::{Team, TeamBase, TeamPlayer};

use chrono::NaiveDate;
use serde::de::DeserializeOwned;

use crate::constants::paths;

/// A record type served by a JSON list endpoint.
pub trait ApiResource: DeserializeOwned + Send + 'static {
    /// Collection path, e.g. `/v0/leagues`
    const COLLECTION_PATH: &'static str;
    /// Human readable name used in logs
    const NAME: &'static str;

    /// Stable identifier of the record
    fn id(&self) -> i64;

    /// Incremental sync watermark
    fn last_changed_date(&self) -> NaiveDate;
}

/// A resource that can also be fetched individually at `{COLLECTION_PATH}/{id}`.
pub trait Retrievable: ApiResource {}

impl ApiResource for League {
    const COLLECTION_PATH: &'static str = paths::LEAGUES;
    const NAME: &'static str = "league";

    fn id(&self) -> i64 {
        self.league_id
    }

    fn last_changed_date(&self) -> NaiveDate {
        self.last_changed_date
    }
}

impl ApiResource for Team {
    const COLLECTION_PATH: &'static str = paths::TEAMS;
    const NAME: &'static str = "team";

    fn id(&self) -> i64 {
        self.team_id
    }

    fn last_changed_date(&self) -> NaiveDate {
        self.last_changed_date
    }
}

impl ApiResource for Player {
    const COLLECTION_PATH: &'static str = paths::PLAYERS;
    const NAME: &'static str = "player";

    fn id(&self) -> i64 {
        self.player_id
    }

    fn last_changed_date(&self) -> NaiveDate {
        self.last_changed_date
    }
}

impl ApiResource for Performance {
    const COLLECTION_PATH: &'static str = paths::PERFORMANCES;
    const NAME: &'static str = "performance";

    fn id(&self) -> i64 {
        self.performance_id
    }

    fn last_changed_date(&self) -> NaiveDate {
        self.last_changed_date
    }
}

impl Retrievable for League {}
impl Retrievable for Team {}
impl Retrievable for Player {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_paths() {
        assert_eq!(League::COLLECTION_PATH, "/v0/leagues");
        assert_eq!(Team::COLLECTION_PATH, "/v0/teams");
        assert_eq!(Player::COLLECTION_PATH, "/v0/players");
        assert_eq!(Performance::COLLECTION_PATH, "/v0/performances/");
    }

    #[test]
    fn test_resource_ids() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let performance = Performance {
            performance_id: 42,
            week_number: "202301".to_string(),
            fantasy_points: 1.5,
            player_id: 7,
            last_changed_date: date,
        };
        assert_eq!(performance.id(), 42);
        assert_eq!(ApiResource::last_changed_date(&performance), date);
    }
}
