use crate::error::{Result, WstatError};
use crate::model::CommitRecord;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One page of a cursor-paginated list response. `next` is absent on the
/// last page.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub values: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepoSummary {
    pub slug: String,
    #[serde(default)]
    pub updated_on: Option<String>,
}

impl RepoSummary {
    pub fn updated_at(&self) -> Result<DateTime<Utc>> {
        let raw = self
            .updated_on
            .as_deref()
            .ok_or_else(|| WstatError::Parse(format!("repository '{}' has no updated_on", self.slug)))?;
        parse_instant(raw)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BranchRef {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiCommit {
    pub hash: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub author: ApiAuthor,
    #[serde(default)]
    pub parents: Vec<CommitParent>,
}

impl ApiCommit {
    /// Reduce the payload to the fields the pipeline filters on. Fails on a
    /// malformed date or a commit with no usable identity.
    pub fn record(&self) -> Result<CommitRecord> {
        let raw_date = self
            .date
            .as_deref()
            .ok_or_else(|| WstatError::Parse(format!("commit {} has no date", self.hash)))?;
        Ok(CommitRecord {
            id: self.hash.clone(),
            author: self.author.key()?,
            timestamp: parse_instant(raw_date)?,
            parent_count: self.parents.len(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiAuthor {
    #[serde(default)]
    pub raw: String,
    #[serde(default)]
    pub user: Option<ApiUser>,
}

impl ApiAuthor {
    /// Display name when the commit maps to a workspace user, otherwise the
    /// raw `Name <email>` identity string.
    pub fn key(&self) -> Result<String> {
        if let Some(name) = self.user.as_ref().and_then(|u| u.display_name.as_deref()) {
            if !name.is_empty() {
                return Ok(name.to_string());
            }
        }
        if self.raw.is_empty() {
            return Err(WstatError::Parse("commit author has no identity".to_string()));
        }
        Ok(self.raw.clone())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiUser {
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitParent {
    pub hash: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiffstatEntry {
    #[serde(default)]
    pub lines_added: u64,
    #[serde(default)]
    pub lines_removed: u64,
}

/// Timestamps arrive as ISO-8601 with a timezone suffix
/// (e.g. `2026-08-20T12:34:56+00:00`); compare as absolute instants.
pub fn parse_instant(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| WstatError::Parse(format!("timestamp '{raw}': {e}")))
}
