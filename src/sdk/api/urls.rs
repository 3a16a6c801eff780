//! URL building utilities for API endpoints

use crate::constants::paths;

use super::bulk::BulkResource;

/// Strips trailing slashes so paths can be appended verbatim.
///
/// # Example
/// ```
/// use swc_client::sdk::api::normalize_base_url;
///
/// assert_eq!(normalize_base_url("http://0.0.0.0:8000/"), "http://0.0.0.0:8000");
/// ```
pub fn normalize_base_url(base_url: &str) -> &str {
    base_url.trim_end_matches('/')
}

/// Builds the health check URL (`GET /`).
pub fn build_health_check_url(base_url: &str) -> String {
    format!("{}{}", normalize_base_url(base_url), paths::HEALTH_CHECK)
}

/// Builds a collection URL such as `{base}/v0/leagues`.
///
/// # Example
/// ```
/// use swc_client::sdk::api::build_collection_url;
///
/// let url = build_collection_url("http://0.0.0.0:8000", "/v0/leagues");
/// assert_eq!(url, "http://0.0.0.0:8000/v0/leagues");
/// ```
pub fn build_collection_url(base_url: &str, collection_path: &str) -> String {
    format!("{}{collection_path}", normalize_base_url(base_url))
}

/// Builds a single-record URL such as `{base}/v0/players/2009`.
///
/// # Example
/// ```
/// use swc_client::sdk::api::build_item_url;
///
/// let url = build_item_url("http://0.0.0.0:8000/", "/v0/players", 2009);
/// assert_eq!(url, "http://0.0.0.0:8000/v0/players/2009");
/// ```
pub fn build_item_url(base_url: &str, collection_path: &str, id: i64) -> String {
    format!(
        "{}{}/{id}",
        normalize_base_url(base_url),
        collection_path.trim_end_matches('/')
    )
}

/// Builds the bulk export URL for a resource; the format goes in the query.
///
/// # Example
/// ```
/// use swc_client::sdk::api::{BulkResource, build_bulk_url};
///
/// let url = build_bulk_url("http://0.0.0.0:8000", BulkResource::TeamPlayer);
/// assert_eq!(url, "http://0.0.0.0:8000/v0/bulk/team_player_data");
/// ```
pub fn build_bulk_url(base_url: &str, resource: BulkResource) -> String {
    format!(
        "{}{}/{}",
        normalize_base_url(base_url),
        paths::BULK,
        resource.endpoint_name()
    )
}

/// Builds the record counts URL (`GET /v0/counts`).
pub fn build_counts_url(base_url: &str) -> String {
    format!("{}{}", normalize_base_url(base_url), paths::COUNTS)
}
