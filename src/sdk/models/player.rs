use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::performance::Performance;

/// Player summary as nested inside a team roster.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PlayerBase {
    pub player_id: i64,
    pub gsis_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub last_changed_date: NaiveDate,
}

/// Player with weekly performances.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Player {
    pub player_id: i64,
    pub gsis_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub last_changed_date: NaiveDate,
    #[serde(default)]
    pub performances: Vec<Performance>,
}

impl Player {
    /// "First Last" as shown in CLI output
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_player_deserialization() {
        let payload = json!({
            "player_id": 2009,
            "gsis_id": "00-0039150",
            "first_name": "Bryce",
            "last_name": "Young",
            "position": "QB",
            "last_changed_date": "2024-04-01",
            "performances": [
                {
                    "performance_id": 17306,
                    "week_number": "202301",
                    "fantasy_points": 12.34,
                    "player_id": 2009,
                    "last_changed_date": "2024-04-01"
                }
            ]
        });

        let player: Player = serde_json::from_value(payload).unwrap();
        assert_eq!(player.player_id, 2009);
        assert_eq!(player.gsis_id.as_deref(), Some("00-0039150"));
        assert_eq!(player.full_name(), "Bryce Young");
        assert_eq!(player.performances.len(), 1);
        assert_eq!(player.performances[0].week_number, "202301");
    }

    #[test]
    fn test_player_with_null_gsis_id() {
        let payload = json!({
            "player_id": 1001,
            "gsis_id": null,
            "first_name": "Test",
            "last_name": "Player",
            "position": "K",
            "last_changed_date": "2024-04-01"
        });

        let player: Player = serde_json::from_value(payload).unwrap();
        assert!(player.gsis_id.is_none());
        assert!(player.performances.is_empty());
    }

    #[test]
    fn test_player_with_special_characters() {
        let player = Player {
            player_id: 54321,
            gsis_id: None,
            first_name: "Ja'Marr".to_string(),
            last_name: "Chase".to_string(),
            position: "WR".to_string(),
            last_changed_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            performances: vec![],
        };

        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, player);
    }

    #[test]
    fn test_player_invalid_date_is_rejected() {
        let payload = json!({
            "player_id": 1001,
            "gsis_id": null,
            "first_name": "Test",
            "last_name": "Player",
            "position": "K",
            "last_changed_date": "04/01/2024"
        });

        assert!(serde_json::from_value::<Player>(payload).is_err());
    }
}
