use crate::model::{
    ActivityOutput, BranchRow, DateRange, GlobalStats, RepoReport, RepoRow, TotalRow, SCHEMA_VERSION,
};
use chrono::Utc;
use std::cmp::Ordering;

/// Additive fold of per-repository stats into workspace-wide totals. Order
/// of the reports never changes the result.
pub fn merge_reports(reports: &[RepoReport]) -> GlobalStats {
    let mut global = GlobalStats::new();
    for report in reports {
        for (author, stats) in &report.users {
            global.entry(author.clone()).or_default().merge(stats);
        }
    }
    global
}

/// Assemble the three result sets, each sorted by descending commit count
/// within its grouping (author name breaks ties, for stable output).
pub fn build_output(
    workspace: &str,
    window_days: u32,
    range: &DateRange,
    reports: &[RepoReport],
) -> ActivityOutput {
    let mut repositories: Vec<String> = reports.iter().map(|r| r.repo.clone()).collect();
    repositories.sort();

    let mut repos = Vec::new();
    for report in reports {
        for (user, stats) in &report.users {
            repos.push(RepoRow {
                repo: report.repo.clone(),
                user: user.clone(),
                commits: stats.commits,
                additions: stats.additions,
                deletions: stats.deletions,
            });
        }
    }
    repos.sort_by(|a, b| {
        a.repo
            .cmp(&b.repo)
            .then_with(|| b.commits.cmp(&a.commits))
            .then_with(|| a.user.cmp(&b.user))
    });

    let mut branches = Vec::new();
    for report in reports {
        for (branch, users) in &report.branches {
            for (user, stats) in users {
                branches.push(BranchRow {
                    repo: report.repo.clone(),
                    branch: branch.clone(),
                    user: user.clone(),
                    commits: stats.commits,
                    additions: stats.additions,
                    deletions: stats.deletions,
                });
            }
        }
    }
    branches.sort_by(|a, b| {
        a.repo
            .cmp(&b.repo)
            .then_with(|| a.branch.cmp(&b.branch))
            .then_with(|| b.commits.cmp(&a.commits))
            .then_with(|| a.user.cmp(&b.user))
    });

    let global = merge_reports(reports);
    let mut totals: Vec<TotalRow> = global
        .into_iter()
        .map(|(user, stats)| TotalRow {
            user,
            commits: stats.commits,
            additions: stats.additions,
            deletions: stats.deletions,
        })
        .collect();
    totals.sort_by(|a, b| match b.commits.cmp(&a.commits) {
        Ordering::Equal => a.user.cmp(&b.user),
        other => other,
    });

    ActivityOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        workspace: workspace.to_string(),
        window_days,
        since: range.since,
        until: range.until,
        repositories,
        repos,
        branches,
        totals,
    }
}
