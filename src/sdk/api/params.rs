//! Query parameters shared by every list endpoint

use chrono::NaiveDate;

use crate::constants::pagination::{DEFAULT_LIMIT, DEFAULT_SKIP};

/// Pagination, incremental-sync and filter parameters for a list call.
///
/// Filters are forwarded to the server as query constraints; the client never
/// filters results itself and issues exactly one request per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub skip: u32,
    pub limit: u32,
    pub minimum_last_changed_date: Option<NaiveDate>,
    pub filters: Vec<(String, String)>,
}

impl Default for ListParams {
    fn default() -> Self {
        ListParams {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
            minimum_last_changed_date: None,
            filters: Vec::new(),
        }
    }
}

impl ListParams {
    pub fn new() -> Self {
        ListParams::default()
    }

    pub fn skip(mut self, skip: u32) -> Self {
        self.skip = skip;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Only records with `last_changed_date >= date`.
    pub fn changed_since(mut self, date: NaiveDate) -> Self {
        self.minimum_last_changed_date = Some(date);
        self
    }

    /// Adds an arbitrary server-side filter.
    pub fn filter(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.filters.push((key.into(), value.to_string()));
        self
    }

    /// Leagues: exact league name
    pub fn league_name(self, name: impl Into<String>) -> Self {
        self.filter("league_name", name.into())
    }

    /// Teams: exact team name
    pub fn team_name(self, name: impl Into<String>) -> Self {
        self.filter("team_name", name.into())
    }

    /// Teams: owning league
    pub fn league_id(self, league_id: i64) -> Self {
        self.filter("league_id", league_id)
    }

    /// Players: first name
    pub fn first_name(self, name: impl Into<String>) -> Self {
        self.filter("first_name", name.into())
    }

    /// Players: last name
    pub fn last_name(self, name: impl Into<String>) -> Self {
        self.filter("last_name", name.into())
    }

    /// Parameters for the page following one that returned `returned` records.
    pub fn next_page(&self, returned: usize) -> Self {
        let returned = u32::try_from(returned).unwrap_or(u32::MAX);
        ListParams {
            skip: self.skip.saturating_add(returned),
            ..self.clone()
        }
    }

    /// Query string pairs in a stable order.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("skip".to_string(), self.skip.to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ];
        if let Some(date) = self.minimum_last_changed_date {
            pairs.push((
                "minimum_last_changed_date".to_string(),
                date.format("%Y-%m-%d").to_string(),
            ));
        }
        pairs.extend(self.filters.iter().cloned());
        pairs
    }
}
