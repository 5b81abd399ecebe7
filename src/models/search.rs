use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use super::ticket::TicketStatus;

/// Parameter names the search endpoint accepts; anything else is dropped
/// before the request is sent.
const ALLOWED: [&str; 8] = [
    "endTime",
    "limit",
    "page",
    "search",
    "sort_by",
    "sort_order",
    "startTime",
    "status",
];

/// Filters for the `/search` endpoint.
///
/// Only the fixed allow-list of parameter names is ever transmitted. Build a
/// set with the typed methods, or screen an arbitrary map through
/// [`SearchFilters::from_map`] — screening copies the permitted entries and
/// leaves the caller's map untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    params: BTreeMap<String, String>,
}

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy the allow-listed entries out of `map`, dropping the rest.
    pub fn from_map<K, V, I>(map: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let params = map
            .into_iter()
            .filter(|(key, _)| ALLOWED.contains(&key.as_ref()))
            .map(|(key, value)| (key.as_ref().to_string(), value.into()))
            .collect();
        Self { params }
    }

    pub fn status(mut self, status: TicketStatus) -> Self {
        self.params
            .insert("status".to_string(), (status as u8).to_string());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.params.insert("limit".to_string(), limit.to_string());
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.params.insert("page".to_string(), page.to_string());
        self
    }

    /// Free-text term matched against ticket contents.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.params.insert("search".to_string(), term.into());
        self
    }

    pub fn sort_by(mut self, field: impl Into<String>) -> Self {
        self.params.insert("sort_by".to_string(), field.into());
        self
    }

    pub fn sort_order(mut self, order: impl Into<String>) -> Self {
        self.params.insert("sort_order".to_string(), order.into());
        self
    }

    /// Lower bound of the time window, sent as Unix seconds.
    pub fn start_time(mut self, time: DateTime<Utc>) -> Self {
        self.params
            .insert("startTime".to_string(), time.timestamp().to_string());
        self
    }

    /// Upper bound of the time window, sent as Unix seconds.
    pub fn end_time(mut self, time: DateTime<Utc>) -> Self {
        self.params
            .insert("endTime".to_string(), time.timestamp().to_string());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub(crate) fn as_params(&self) -> &BTreeMap<String, String> {
        &self.params
    }
}
