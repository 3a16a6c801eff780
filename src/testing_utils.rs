use serde_json::{Value, json};

use crate::sdk::api::BulkResource;

/// UTF-8 byte-order mark some bulk exports start with
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Test utilities for creating mock API payloads
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// League payload without embedded teams
    pub fn league_json(league_id: i64, league_name: &str) -> Value {
        json!({
            "league_id": league_id,
            "league_name": league_name,
            "scoring_type": "PPR",
            "last_changed_date": "2024-04-18",
            "teams": []
        })
    }

    /// League payload with `team_count` embedded teams
    pub fn league_with_teams_json(league_id: i64, team_count: usize) -> Value {
        let teams: Vec<Value> = (0..team_count)
            .map(|i| {
                json!({
                    "league_id": league_id,
                    "team_id": 1000 + i as i64,
                    "team_name": format!("Team {}", i + 1),
                    "last_changed_date": "2024-04-18"
                })
            })
            .collect();
        json!({
            "league_id": league_id,
            "league_name": "Pigskin Prodigal Fantasy League",
            "scoring_type": "PPR",
            "last_changed_date": "2024-04-18",
            "teams": teams
        })
    }

    pub fn team_json(team_id: i64, league_id: i64, team_name: &str) -> Value {
        json!({
            "league_id": league_id,
            "team_id": team_id,
            "team_name": team_name,
            "last_changed_date": "2024-04-18",
            "players": []
        })
    }

    /// Player payload without performances
    pub fn player_json(player_id: i64, first_name: &str, last_name: &str, changed: &str) -> Value {
        json!({
            "player_id": player_id,
            "gsis_id": format!("00-00{player_id}"),
            "first_name": first_name,
            "last_name": last_name,
            "position": "QB",
            "last_changed_date": changed,
            "performances": []
        })
    }

    /// Bryce Young with `performance_count` weekly performances
    pub fn player_with_performances_json(player_id: i64, performance_count: usize) -> Value {
        let performances: Vec<Value> = (0..performance_count)
            .map(|i| {
                Self::performance_json(3000 + i as i64, player_id, "2024-04-01")
            })
            .collect();
        json!({
            "player_id": player_id,
            "gsis_id": "00-0039150",
            "first_name": "Bryce",
            "last_name": "Young",
            "position": "QB",
            "last_changed_date": "2024-04-18",
            "performances": performances
        })
    }

    pub fn performance_json(performance_id: i64, player_id: i64, changed: &str) -> Value {
        json!({
            "performance_id": performance_id,
            "week_number": "202301",
            "fantasy_points": 20.64,
            "player_id": player_id,
            "last_changed_date": changed
        })
    }

    /// A page of players with consecutive ids starting at `first_id`
    pub fn players_page_json(first_id: i64, count: usize) -> Value {
        let players: Vec<Value> = (0..count)
            .map(|i| {
                let id = first_id + i as i64;
                Self::player_json(id, "Player", &format!("Number{id}"), "2024-04-18")
            })
            .collect();
        Value::Array(players)
    }

    /// Bulk CSV export with the resource's header and `rows` data rows
    pub fn bulk_csv(resource: BulkResource, rows: usize, with_bom: bool) -> Vec<u8> {
        let mut text = resource.csv_header().join(",");
        text.push('\n');
        for i in 0..rows {
            text.push_str(&Self::csv_row(resource, i as i64));
            text.push('\n');
        }

        let mut bytes = Vec::with_capacity(text.len() + UTF8_BOM.len());
        if with_bom {
            bytes.extend_from_slice(UTF8_BOM);
        }
        bytes.extend_from_slice(text.as_bytes());
        bytes
    }

    fn csv_row(resource: BulkResource, i: i64) -> String {
        match resource {
            BulkResource::Players => {
                format!("{},00-00{i},Player,Number{i},WR,2024-04-18", 1001 + i)
            }
            BulkResource::Leagues => format!("{},League {i},PPR,2024-04-18", 5001 + i),
            BulkResource::Performances => {
                format!("{},202301,{}.5,{},2024-04-18", 3001 + i, 10 + i, 1001 + i)
            }
            BulkResource::Teams => format!("{},Team {i},5001,2024-04-18", 1 + i),
            BulkResource::TeamPlayer => format!("{},{},2024-04-18", 1 + i % 8, 1001 + i),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdk::models::{League, Player};

    #[test]
    fn test_fixtures_decode_into_models() {
        let league: League =
            serde_json::from_value(TestDataBuilder::league_with_teams_json(5002, 8)).unwrap();
        assert_eq!(league.teams.len(), 8);

        let player: Player =
            serde_json::from_value(TestDataBuilder::player_with_performances_json(2009, 2))
                .unwrap();
        assert_eq!(player.performances.len(), 2);
    }

    #[test]
    fn test_bulk_csv_shape() {
        let csv = TestDataBuilder::bulk_csv(BulkResource::Teams, 3, true);
        assert!(csv.starts_with(UTF8_BOM));
        let text = String::from_utf8(csv[UTF8_BOM.len()..].to_vec()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "team_id,team_name,league_id,last_changed_date");
    }
}
