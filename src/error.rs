use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WstatError>;

/// The endpoint family a failed fetch belongs to. Failures are contained at
/// this scope: a bad page aborts only the enclosing traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchScope {
    Repos,
    Branches,
    Commits,
    Diffstat,
}

impl fmt::Display for FetchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FetchScope::Repos => "repository listing",
            FetchScope::Branches => "branch listing",
            FetchScope::Commits => "commit listing",
            FetchScope::Diffstat => "diffstat",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum WstatError {
    #[error("authentication failed: {0}")]
    Auth(String),
    #[error("{scope} fetch failed for {id} (HTTP {status})")]
    Fetch {
        scope: FetchScope,
        id: String,
        status: u16,
    },
    #[error("{scope} request failed for {id}: {message}")]
    Transport {
        scope: FetchScope,
        id: String,
        message: String,
    },
    #[error("parse error: {0}")]
    Parse(String),
}
