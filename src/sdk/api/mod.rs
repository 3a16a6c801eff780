//! Resilient request layer and the asynchronous client

pub mod bulk;
mod core;
mod fetch_utils;
pub mod http_client;
pub mod params;
pub mod retry;
pub mod urls;

pub use bulk::{BulkFileFormat, BulkResource, write_bulk_file};
pub use self::core::SwcClient;
pub use http_client::create_http_client_with_timeout;
pub use params::ListParams;
pub use retry::RetryPolicy;
pub use urls::{
    build_bulk_url, build_collection_url, build_counts_url, build_health_check_url,
    build_item_url, normalize_base_url,
};
