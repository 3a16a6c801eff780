//! Blocking facade over the asynchronous client.
//!
//! Each call drives the async client to completion on a private
//! current-thread runtime. Do not call these methods from inside an async
//! context; use [`crate::sdk::api::SwcClient`] there instead.

use bytes::Bytes;
use std::future::Future;
use tokio::runtime::{Builder, Runtime};

use crate::config::SwcConfig;
use crate::error::AppError;
use crate::sdk::api::{self, BulkFileFormat, BulkResource, ListParams, RetryPolicy};
use crate::sdk::models::{
    ApiResource, Counts, HealthCheck, League, Performance, Player, Retrievable, Team,
};

/// Synchronous SportsWorldCentral client.
#[derive(Debug)]
pub struct SwcClient {
    inner: api::SwcClient,
    runtime: Runtime,
}

impl SwcClient {
    pub fn new(config: SwcConfig) -> Result<Self, AppError> {
        let inner = api::SwcClient::new(config)?;
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(SwcClient { inner, runtime })
    }

    pub fn from_env() -> Result<Self, AppError> {
        SwcClient::new(SwcConfig::from_env()?)
    }

    pub fn config(&self) -> &SwcConfig {
        self.inner.config()
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.inner.retry_policy()
    }

    /// The wrapped async client, e.g. to hand to async code later.
    pub fn as_async(&self) -> &api::SwcClient {
        &self.inner
    }

    fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    pub fn health_check(&self) -> Result<HealthCheck, AppError> {
        self.block_on(self.inner.health_check())
    }

    pub fn get_counts(&self) -> Result<Counts, AppError> {
        self.block_on(self.inner.get_counts())
    }

    pub fn list<R: ApiResource>(&self, params: &ListParams) -> Result<Vec<R>, AppError> {
        self.block_on(self.inner.list(params))
    }

    pub fn get_by_id<R: Retrievable>(&self, id: i64) -> Result<R, AppError> {
        self.block_on(self.inner.get_by_id(id))
    }

    pub fn list_leagues(&self, params: &ListParams) -> Result<Vec<League>, AppError> {
        self.list(params)
    }

    pub fn list_teams(&self, params: &ListParams) -> Result<Vec<Team>, AppError> {
        self.list(params)
    }

    pub fn list_players(&self, params: &ListParams) -> Result<Vec<Player>, AppError> {
        self.list(params)
    }

    pub fn list_performances(&self, params: &ListParams) -> Result<Vec<Performance>, AppError> {
        self.list(params)
    }

    pub fn get_league_by_id(&self, league_id: i64) -> Result<League, AppError> {
        self.get_by_id(league_id)
    }

    pub fn get_team_by_id(&self, team_id: i64) -> Result<Team, AppError> {
        self.get_by_id(team_id)
    }

    pub fn get_player_by_id(&self, player_id: i64) -> Result<Player, AppError> {
        self.get_by_id(player_id)
    }

    pub fn get_bulk_file(&self, resource: BulkResource) -> Result<Bytes, AppError> {
        self.block_on(self.inner.get_bulk_file(resource))
    }

    pub fn get_bulk_file_as(
        &self,
        resource: BulkResource,
        format: BulkFileFormat,
    ) -> Result<Bytes, AppError> {
        self.block_on(self.inner.get_bulk_file_as(resource, format))
    }

    pub fn get_bulk_player_file(&self) -> Result<Bytes, AppError> {
        self.get_bulk_file(BulkResource::Players)
    }

    pub fn get_bulk_league_file(&self) -> Result<Bytes, AppError> {
        self.get_bulk_file(BulkResource::Leagues)
    }

    pub fn get_bulk_performance_file(&self) -> Result<Bytes, AppError> {
        self.get_bulk_file(BulkResource::Performances)
    }

    pub fn get_bulk_team_file(&self) -> Result<Bytes, AppError> {
        self.get_bulk_file(BulkResource::Teams)
    }

    pub fn get_bulk_team_player_file(&self) -> Result<Bytes, AppError> {
        self.get_bulk_file(BulkResource::TeamPlayer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocking_client_rejects_invalid_config() {
        let result = SwcClient::new(SwcConfig::new("ftp://example.com"));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_blocking_client_exposes_policy() {
        let client = SwcClient::new(SwcConfig::new("http://localhost:8000").with_max_retries(5))
            .unwrap();
        assert_eq!(client.retry_policy().max_attempts(), 6);
        assert_eq!(client.config().base_url, "http://localhost:8000");
    }
}
