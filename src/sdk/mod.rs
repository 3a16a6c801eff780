//! SportsWorldCentral SDK: typed models, the async client and a blocking facade

pub mod api;
pub mod blocking;
pub mod models;

pub use api::{BulkFileFormat, BulkResource, ListParams, RetryPolicy, SwcClient};
pub use models::{
    ApiResource, Counts, HealthCheck, League, Performance, Player, PlayerBase, Retrievable,
    ScoringType, Team, TeamBase, TeamPlayer,
};
