use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const SCHEMA_VERSION: u32 = 1;

/// Per-author accumulator. All fields only ever grow during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub commits: u64,
    pub additions: u64,
    pub deletions: u64,
}

impl UserStats {
    pub fn record(&mut self, diff: &DiffStat) {
        self.commits += 1;
        self.additions += diff.lines_added;
        self.deletions += diff.lines_removed;
    }

    pub fn merge(&mut self, other: &UserStats) {
        self.commits += other.commits;
        self.additions += other.additions;
        self.deletions += other.deletions;
    }
}

/// Line totals for one commit, summed across its touched files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStat {
    pub lines_added: u64,
    pub lines_removed: u64,
}

/// The fields of a commit the pipeline actually inspects. Built from the API
/// payload, filtered, then discarded once folded into stats.
#[derive(Debug, Clone)]
pub struct CommitRecord {
    pub id: String,
    pub author: String,
    pub timestamp: DateTime<Utc>,
    pub parent_count: usize,
}

pub type RepoStats = HashMap<String, UserStats>;
pub type GlobalStats = HashMap<String, UserStats>;

/// Immutable result of one repository task. Every selected repository yields
/// exactly one report, so an aborted traversal still shows up with whatever
/// was counted before the failure.
#[derive(Debug, Clone)]
pub struct RepoReport {
    pub repo: String,
    pub users: RepoStats,
    pub branches: HashMap<String, RepoStats>,
}

impl RepoReport {
    pub fn new(repo: impl Into<String>) -> Self {
        Self {
            repo: repo.into(),
            users: HashMap::new(),
            branches: HashMap::new(),
        }
    }

    pub fn record(&mut self, branch: Option<&str>, author: &str, diff: &DiffStat) {
        self.users.entry(author.to_string()).or_default().record(diff);
        if let Some(branch) = branch {
            self.branches
                .entry(branch.to_string())
                .or_default()
                .entry(author.to_string())
                .or_default()
                .record(diff);
        }
    }
}

/// Inclusive time window on both ends.
#[derive(Debug, Clone)]
pub struct DateRange {
    pub since: Option<DateTime<Utc>>,
    pub until: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn new() -> Self {
        Self { since: None, until: None }
    }

    /// Window covering the last `days` days, anchored at now.
    pub fn trailing(days: u32) -> Self {
        let now = Utc::now();
        Self {
            since: Some(now - Duration::days(i64::from(days))),
            until: Some(now),
        }
    }

    pub fn with_since(mut self, since: DateTime<Utc>) -> Self {
        self.since = Some(since);
        self
    }

    pub fn with_until(mut self, until: DateTime<Utc>) -> Self {
        self.until = Some(until);
        self
    }

    pub fn contains(&self, timestamp: &DateTime<Utc>) -> bool {
        if let Some(since) = self.since {
            if timestamp < &since {
                return false;
            }
        }
        if let Some(until) = self.until {
            if timestamp > &until {
                return false;
            }
        }
        true
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRow {
    pub repo: String,
    pub user: String,
    pub commits: u64,
    pub additions: u64,
    pub deletions: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchRow {
    pub repo: String,
    pub branch: String,
    pub user: String,
    pub commits: u64,
    pub additions: u64,
    pub deletions: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalRow {
    pub user: String,
    pub commits: u64,
    pub additions: u64,
    pub deletions: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub workspace: String,
    pub window_days: u32,
    pub since: Option<DateTime<Utc>>,
    pub until: Option<DateTime<Utc>>,
    /// Every repository that was attempted, including those with no commits
    /// in the window.
    pub repositories: Vec<String>,
    pub repos: Vec<RepoRow>,
    pub branches: Vec<BranchRow>,
    pub totals: Vec<TotalRow>,
}
