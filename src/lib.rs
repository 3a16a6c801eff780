//! SportsWorldCentral fantasy football API client library
//!
//! Typed access to the SportsWorldCentral (SWC) API: list and fetch
//! leagues, teams, players and weekly performances, and download bulk
//! exports. Transient failures are retried with exponential backoff.
//!
//! # Examples
//!
//! ```rust,no_run
//! use swc_client::config::SwcConfig;
//! use swc_client::error::AppError;
//! use swc_client::sdk::api::{BulkResource, ListParams, SwcClient, write_bulk_file};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let client = SwcClient::new(SwcConfig::new("http://0.0.0.0:8000"))?;
//!
//!     // One page of players named Bryce
//!     let players = client
//!         .list_players(&ListParams::new().limit(10).first_name("Bryce"))
//!         .await?;
//!     for player in &players {
//!         println!("{} ({})", player.full_name(), player.position);
//!     }
//!
//!     // Bulk export, written to disk unchanged
//!     let csv = client.get_bulk_file(BulkResource::Players).await?;
//!     write_bulk_file("players_file.csv", &csv).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! Non-async callers can use [`sdk::blocking::SwcClient`], which exposes the
//! same operations as blocking calls.

pub mod config;
pub mod constants;
pub mod error;
pub mod sdk;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::{Config, SwcConfig};
pub use error::AppError;
pub use sdk::api::{BulkFileFormat, BulkResource, ListParams, RetryPolicy, SwcClient};
pub use sdk::models::{Counts, HealthCheck, League, Performance, Player, Team, TeamPlayer};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
