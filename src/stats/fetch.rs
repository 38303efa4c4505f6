use crate::api::{Paginator, WorkspaceApi};
use crate::error::{Result, WstatError};
use crate::model::{DateRange, DiffStat, RepoReport};
use std::collections::HashSet;
use tracing::{debug, warn};

/// List the workspace and keep repositories updated within the window
/// (boundary inclusive). Any failure here is fatal: without a repository
/// set there is nothing to aggregate. A 401/403 means the credentials were
/// rejected outright.
pub fn select_recent_repos<C: WorkspaceApi>(api: &C, range: &DateRange) -> Result<Vec<String>> {
    let mut repos = Vec::new();
    for page in Paginator::new(api.repos_url(), |url| api.repo_page(url)) {
        let batch = page.map_err(|e| match e {
            WstatError::Fetch { status: status @ (401 | 403), .. } => {
                WstatError::Auth(format!("workspace listing rejected with HTTP {status}"))
            }
            other => other,
        })?;
        for repo in batch {
            match repo.updated_at() {
                Ok(updated) if range.contains(&updated) => repos.push(repo.slug),
                Ok(_) => {}
                Err(e) => {
                    warn!(repo = %repo.slug, "skipping repository with malformed updated_on: {e}");
                }
            }
        }
    }
    Ok(repos)
}

/// All branch names of one repository, in API order.
pub fn list_branches<C: WorkspaceApi>(api: &C, repo: &str) -> Result<Vec<String>> {
    let mut branches = Vec::new();
    for page in Paginator::new(api.branches_url(repo), |url| api.branch_page(url)) {
        branches.extend(page?.into_iter().map(|b| b.name));
    }
    Ok(branches)
}

/// Walk one repository's commit history and fold per-author stats. Never
/// fails: any fetch problem aborts the enclosing branch (or the repository's
/// single history stream) with a warning, and whatever was counted so far is
/// returned. Branches are walked sequentially so the seen-set stays a plain
/// `HashSet`.
pub fn process_repo<C: WorkspaceApi>(
    api: &C,
    range: &DateRange,
    repo: &str,
    branch_mode: bool,
) -> RepoReport {
    debug!(repo, branch_mode, "processing repository");
    let mut report = RepoReport::new(repo);
    let mut seen: HashSet<String> = HashSet::new();

    if branch_mode {
        match list_branches(api, repo) {
            Ok(branches) => {
                for branch in branches {
                    walk_commits(api, range, repo, Some(&branch), &mut seen, &mut report);
                }
            }
            Err(e) => warn!(repo, "branch listing failed, repository skipped: {e}"),
        }
    } else {
        walk_commits(api, range, repo, None, &mut seen, &mut report);
    }

    report
}

fn walk_commits<C: WorkspaceApi>(
    api: &C,
    range: &DateRange,
    repo: &str,
    branch: Option<&str>,
    seen: &mut HashSet<String>,
    report: &mut RepoReport,
) {
    let start = api.commits_url(repo, branch);
    for page in Paginator::new(start, |url| api.commit_page(url)) {
        let commits = match page {
            Ok(commits) => commits,
            Err(e) => {
                warn!(repo, branch = branch.unwrap_or("<default>"), "commit page fetch failed, aborting traversal: {e}");
                return;
            }
        };

        for commit in commits {
            // A commit reachable from several branches is examined once.
            // Marking is eager: merge and out-of-window commits are recorded
            // too, so a later branch never refetches their diffstat.
            if !seen.insert(commit.hash.clone()) {
                continue;
            }

            let record = match commit.record() {
                Ok(record) => record,
                Err(e) => {
                    warn!(repo, hash = %commit.hash, "skipping malformed commit payload: {e}");
                    continue;
                }
            };

            // Merge commits don't represent authored work.
            if record.parent_count > 1 {
                continue;
            }
            if !range.contains(&record.timestamp) {
                continue;
            }

            let diff = fetch_diffstat(api, repo, &record.id);
            report.record(branch, &record.author, &diff);
        }
    }
}

/// Sum added/removed lines across the commit's diffstat pages. On failure
/// the lines count as zero; the commit itself stays counted — attribution is
/// more reliable than line detail.
fn fetch_diffstat<C: WorkspaceApi>(api: &C, repo: &str, commit: &str) -> DiffStat {
    let mut total = DiffStat::default();
    for page in Paginator::new(api.diffstat_url(repo, commit), |url| api.diffstat_page(url)) {
        match page {
            Ok(files) => {
                for file in files {
                    total.lines_added += file.lines_added;
                    total.lines_removed += file.lines_removed;
                }
            }
            Err(e) => {
                warn!(repo, commit, "diffstat fetch failed, counting zero lines: {e}");
                return DiffStat::default();
            }
        }
    }
    total
}
