use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{BadgeError, BadgeResult};

/// The five counters a badge shows, in stat-bar order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    /// Commit contributions.
    Commits,
    /// Pull requests opened.
    PullRequests,
    /// Issues opened.
    Issues,
    /// Reviews submitted.
    Reviews,
    /// Stars received.
    Stars,
}

impl StatKind {
    /// All kinds in stat-bar order.
    pub const ALL: [StatKind; 5] = [
        StatKind::Commits,
        StatKind::PullRequests,
        StatKind::Issues,
        StatKind::Reviews,
        StatKind::Stars,
    ];

    /// Upper-case label drawn under the value.
    pub fn label(self) -> &'static str {
        match self {
            StatKind::Commits => "COMMITS",
            StatKind::PullRequests => "PRS",
            StatKind::Issues => "ISSUES",
            StatKind::Reviews => "REVIEWS",
            StatKind::Stars => "STARS",
        }
    }
}

/// Display name plus the five counters rendered on one badge.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatRecord {
    /// Name drawn upper-cased on the left; empty omits it.
    pub display_name: String,
    /// Commit contributions.
    pub commits: u64,
    /// Pull requests opened.
    pub pull_requests: u64,
    /// Issues opened.
    pub issues: u64,
    /// Reviews submitted.
    pub reviews: u64,
    /// Stars received.
    pub stars: u64,
}

impl StatRecord {
    /// Counter for `kind`.
    pub fn get(&self, kind: StatKind) -> u64 {
        match kind {
            StatKind::Commits => self.commits,
            StatKind::PullRequests => self.pull_requests,
            StatKind::Issues => self.issues,
            StatKind::Reviews => self.reviews,
            StatKind::Stars => self.stars,
        }
    }

    /// Counters paired with their kinds, in stat-bar order.
    pub fn counters(&self) -> [(StatKind, u64); 5] {
        StatKind::ALL.map(|k| (k, self.get(k)))
    }

    /// Sum of all five counters.
    pub fn aggregate_score(&self) -> u64 {
        self.counters()
            .iter()
            .fold(0u64, |acc, (_, v)| acc.saturating_add(*v))
    }
}

/// On-disk statistics document produced by the stats fetcher.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsFile {
    /// Calendar year the counters cover.
    #[serde(default)]
    pub year: i32,
    /// RFC 3339 timestamp of the last refresh.
    #[serde(default)]
    pub updated_at: String,
    /// Commit contributions.
    pub commits: u64,
    /// Pull requests opened.
    pub pull_requests: u64,
    /// Issues opened.
    pub issues: u64,
    /// Reviews submitted.
    pub reviews: u64,
    /// Stars received across owned repositories.
    pub stars_received: u64,
}

impl StatsFile {
    /// Parse a stats document from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> BadgeResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| BadgeError::serde(format!("parse stats JSON: {e}")))
    }

    /// Parse a stats document from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> BadgeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            BadgeError::validation(format!("open stats JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Pair the counters with a display name.
    pub fn into_record(self, display_name: impl Into<String>) -> StatRecord {
        StatRecord {
            display_name: display_name.into(),
            commits: self.commits,
            pull_requests: self.pull_requests,
            issues: self.issues,
            reviews: self.reviews,
            stars: self.stars_received,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stats/record.rs"]
mod tests;
