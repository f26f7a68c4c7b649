use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted visitor counter document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorRecord {
    /// Documents written without a count are read as zero.
    #[serde(default)]
    pub count: u64,
    #[serde(rename = "lastUpdated", default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl VisitorRecord {
    /// The record that follows `previous`; a missing document starts the count at one.
    #[must_use]
    pub fn next(previous: Option<&Self>, now: DateTime<Utc>) -> Self {
        let count = previous.map_or(0, |p| p.count).saturating_add(1);
        Self { count, last_updated: Some(now) }
    }
}

/// Body returned by a successful visitor count update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitorCountResponse {
    pub count: u64,
    pub message: String,
}
