//! The asynchronous SportsWorldCentral client

use bytes::Bytes;
use reqwest::Client;
use tracing::{debug, info, instrument};

use crate::config::SwcConfig;
use crate::error::AppError;
use crate::sdk::models::{
    ApiResource, Counts, HealthCheck, League, Performance, Player, Retrievable, Team,
};

use super::bulk::{BulkFileFormat, BulkResource};
use super::fetch_utils::{fetch, fetch_bytes};
use super::http_client::create_http_client_with_timeout;
use super::params::ListParams;
use super::retry::RetryPolicy;
use super::urls::{
    build_bulk_url, build_collection_url, build_counts_url, build_health_check_url,
    build_item_url,
};

/// Client for the SportsWorldCentral fantasy football API.
///
/// Cloning is cheap: the underlying connection pool is shared. The
/// configuration is fixed at construction time.
#[derive(Debug, Clone)]
pub struct SwcClient {
    config: SwcConfig,
    http: Client,
    retry: RetryPolicy,
}

impl SwcClient {
    /// Builds a client after validating `config`.
    ///
    /// An invalid configuration is rejected here, before any network activity.
    pub fn new(config: SwcConfig) -> Result<Self, AppError> {
        config.validate()?;
        let http = create_http_client_with_timeout(config.http_timeout_seconds)?;
        let retry = RetryPolicy::from_config(&config);
        info!(
            "Created SWC client for {} (backoff: {}, max retries: {})",
            config.base_url, config.backoff, config.max_retries
        );
        Ok(SwcClient {
            config,
            http,
            retry,
        })
    }

    /// Builds a client from defaults plus `SWC_*` environment overrides.
    pub fn from_env() -> Result<Self, AppError> {
        SwcClient::new(SwcConfig::from_env()?)
    }

    pub fn config(&self) -> &SwcConfig {
        &self.config
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// Checks that the API is reachable.
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> Result<HealthCheck, AppError> {
        let url = build_health_check_url(&self.config.base_url);
        fetch(&self.http, &url, &[], self.retry).await
    }

    /// Record counts for leagues, teams and players.
    #[instrument(skip(self))]
    pub async fn get_counts(&self) -> Result<Counts, AppError> {
        let url = build_counts_url(&self.config.base_url);
        fetch(&self.http, &url, &[], self.retry).await
    }

    /// Lists one page of any resource. Exactly one request is made; an empty
    /// page is a success.
    #[instrument(skip(self), fields(resource = R::NAME))]
    pub async fn list<R: ApiResource>(&self, params: &ListParams) -> Result<Vec<R>, AppError> {
        let url = build_collection_url(&self.config.base_url, R::COLLECTION_PATH);
        let query = params.to_query_pairs();
        let records: Vec<R> = fetch(&self.http, &url, &query, self.retry).await?;
        debug!(
            "Listed {} {} record(s) (skip {}, limit {})",
            records.len(),
            R::NAME,
            params.skip,
            params.limit
        );
        Ok(records)
    }

    /// Fetches a single record; a missing id is [`AppError::NotFound`].
    #[instrument(skip(self), fields(resource = R::NAME))]
    pub async fn get_by_id<R: Retrievable>(&self, id: i64) -> Result<R, AppError> {
        let url = build_item_url(&self.config.base_url, R::COLLECTION_PATH, id);
        fetch(&self.http, &url, &[], self.retry).await
    }

    pub async fn list_leagues(&self, params: &ListParams) -> Result<Vec<League>, AppError> {
        self.list(params).await
    }

    pub async fn list_teams(&self, params: &ListParams) -> Result<Vec<Team>, AppError> {
        self.list(params).await
    }

    pub async fn list_players(&self, params: &ListParams) -> Result<Vec<Player>, AppError> {
        self.list(params).await
    }

    pub async fn list_performances(
        &self,
        params: &ListParams,
    ) -> Result<Vec<Performance>, AppError> {
        self.list(params).await
    }

    /// League with its embedded teams.
    pub async fn get_league_by_id(&self, league_id: i64) -> Result<League, AppError> {
        self.get_by_id(league_id).await
    }

    pub async fn get_team_by_id(&self, team_id: i64) -> Result<Team, AppError> {
        self.get_by_id(team_id).await
    }

    /// Player with their embedded performances.
    pub async fn get_player_by_id(&self, player_id: i64) -> Result<Player, AppError> {
        self.get_by_id(player_id).await
    }

    /// Downloads a bulk export in the configured format. The bytes are
    /// returned exactly as served, including any byte-order mark.
    pub async fn get_bulk_file(&self, resource: BulkResource) -> Result<Bytes, AppError> {
        self.get_bulk_file_as(resource, self.config.bulk_file_format)
            .await
    }

    /// Downloads a bulk export in an explicit format.
    #[instrument(skip(self))]
    pub async fn get_bulk_file_as(
        &self,
        resource: BulkResource,
        format: BulkFileFormat,
    ) -> Result<Bytes, AppError> {
        let url = build_bulk_url(&self.config.base_url, resource);
        let query = [(
            "file_format".to_string(),
            format.as_query_value().to_string(),
        )];
        let contents = fetch_bytes(&self.http, &url, &query, self.retry).await?;
        info!(
            "Downloaded {} bulk file ({}, {} bytes)",
            resource,
            format,
            contents.len()
        );
        Ok(contents)
    }

    pub async fn get_bulk_player_file(&self) -> Result<Bytes, AppError> {
        self.get_bulk_file(BulkResource::Players).await
    }

    pub async fn get_bulk_league_file(&self) -> Result<Bytes, AppError> {
        self.get_bulk_file(BulkResource::Leagues).await
    }

    pub async fn get_bulk_performance_file(&self) -> Result<Bytes, AppError> {
        self.get_bulk_file(BulkResource::Performances).await
    }

    pub async fn get_bulk_team_file(&self) -> Result<Bytes, AppError> {
        self.get_bulk_file(BulkResource::Teams).await
    }

    pub async fn get_bulk_team_player_file(&self) -> Result<Bytes, AppError> {
        self.get_bulk_file(BulkResource::TeamPlayer).await
    }
}
