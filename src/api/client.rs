use crate::api::types::{ApiCommit, BranchRef, DiffstatEntry, Page, RepoSummary};
use crate::error::{FetchScope, Result, WstatError};
use base64::Engine as _;
use serde::de::DeserializeOwned;
use std::time::Duration;

const API_ROOT: &str = "https://api.bitbucket.org/2.0";
const REPO_PAGELEN: u32 = 50;

/// The four endpoint families the pipeline consumes. Implemented by the real
/// Bitbucket client and by in-memory fakes in tests.
pub trait WorkspaceApi {
    fn repos_url(&self) -> String;
    fn branches_url(&self, repo: &str) -> String;
    fn commits_url(&self, repo: &str, branch: Option<&str>) -> String;
    fn diffstat_url(&self, repo: &str, commit: &str) -> String;

    fn repo_page(&self, url: &str) -> Result<Page<RepoSummary>>;
    fn branch_page(&self, url: &str) -> Result<Page<BranchRef>>;
    fn commit_page(&self, url: &str) -> Result<Page<ApiCommit>>;
    fn diffstat_page(&self, url: &str) -> Result<Page<DiffstatEntry>>;
}

/// Sync HTTP via ureq — no async runtime needed.
pub struct BitbucketClient {
    agent: ureq::Agent,
    auth_header: String,
    workspace: String,
}

fn make_agent() -> ureq::Agent {
    ureq::config::Config::builder()
        .http_status_as_error(false)
        .timeout_global(Some(Duration::from_secs(30)))
        .build()
        .new_agent()
}

impl BitbucketClient {
    pub fn new(workspace: &str, username: &str, app_password: &str) -> Self {
        let token =
            base64::engine::general_purpose::STANDARD.encode(format!("{username}:{app_password}"));
        Self {
            agent: make_agent(),
            auth_header: format!("Basic {token}"),
            workspace: workspace.to_string(),
        }
    }

    fn get_page<T: DeserializeOwned>(&self, url: &str, scope: FetchScope) -> Result<Page<T>> {
        let response = self
            .agent
            .get(url)
            .header("Authorization", &self.auth_header)
            .call()
            .map_err(|e| WstatError::Transport {
                scope,
                id: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        if status >= 400 {
            return Err(WstatError::Fetch {
                scope,
                id: url.to_string(),
                status,
            });
        }

        response
            .into_body()
            .read_json()
            .map_err(|e| WstatError::Parse(format!("{scope} payload for {url}: {e}")))
    }
}

impl WorkspaceApi for BitbucketClient {
    fn repos_url(&self) -> String {
        format!("{API_ROOT}/repositories/{}?pagelen={REPO_PAGELEN}", self.workspace)
    }

    fn branches_url(&self, repo: &str) -> String {
        format!("{API_ROOT}/repositories/{}/{repo}/refs/branches", self.workspace)
    }

    fn commits_url(&self, repo: &str, branch: Option<&str>) -> String {
        match branch {
            Some(branch) => format!("{API_ROOT}/repositories/{}/{repo}/commits/{branch}", self.workspace),
            None => format!("{API_ROOT}/repositories/{}/{repo}/commits", self.workspace),
        }
    }

    fn diffstat_url(&self, repo: &str, commit: &str) -> String {
        format!("{API_ROOT}/repositories/{}/{repo}/diffstat/{commit}", self.workspace)
    }

    fn repo_page(&self, url: &str) -> Result<Page<RepoSummary>> {
        self.get_page(url, FetchScope::Repos)
    }

    fn branch_page(&self, url: &str) -> Result<Page<BranchRef>> {
        self.get_page(url, FetchScope::Branches)
    }

    fn commit_page(&self, url: &str) -> Result<Page<ApiCommit>> {
        self.get_page(url, FetchScope::Commits)
    }

    fn diffstat_page(&self, url: &str) -> Result<Page<DiffstatEntry>> {
        self.get_page(url, FetchScope::Diffstat)
    }
}
