use serde::{Deserialize, Serialize};

/// Body of `GET /`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct HealthCheck {
    pub message: String,
}

/// Body of `GET /v0/counts`.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub league_count: u64,
    pub team_count: u64,
    pub player_count: u64,
}
