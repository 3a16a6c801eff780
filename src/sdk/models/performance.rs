use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fantasy points scored by a player in one week.
///
/// `week_number` is kept as the server's string form (`"202301"` is season
/// 2023, week 1).
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Performance {
    pub performance_id: i64,
    pub week_number: String,
    pub fantasy_points: f64,
    pub player_id: i64,
    pub last_changed_date: NaiveDate,
}
