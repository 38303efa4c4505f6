use crate::api::WorkspaceApi;
use crate::model::{DateRange, RepoReport};
use crate::stats::fetch::process_repo;
use crossbeam_channel::bounded;
use indicatif::ProgressBar;
use std::thread;

/// Run one task per repository on a bounded worker pool and collect the
/// reports as they complete. Workers share nothing but the read-only client
/// and window; each report is an owned value handed back over the result
/// channel, so completion order is arbitrary and merging stays serial on the
/// draining side.
pub fn run_pool<C: WorkspaceApi + Sync>(
    api: &C,
    range: &DateRange,
    repos: &[String],
    workers: usize,
    branch_mode: bool,
    progress: Option<&ProgressBar>,
) -> Vec<RepoReport> {
    if repos.is_empty() {
        return Vec::new();
    }
    let workers = workers.max(1).min(repos.len());

    let (job_tx, job_rx) = bounded::<String>(repos.len());
    let (report_tx, report_rx) = bounded::<RepoReport>(workers);

    for repo in repos {
        // Cannot fail: the channel holds all jobs and nothing receives yet.
        let _ = job_tx.send(repo.clone());
    }
    drop(job_tx);

    thread::scope(|scope| {
        for _ in 0..workers {
            let job_rx = job_rx.clone();
            let report_tx = report_tx.clone();
            scope.spawn(move || {
                while let Ok(repo) = job_rx.recv() {
                    let report = process_repo(api, range, &repo, branch_mode);
                    if report_tx.send(report).is_err() {
                        break;
                    }
                }
            });
        }
        drop(report_tx);
        drop(job_rx);

        let mut reports = Vec::with_capacity(repos.len());
        for report in report_rx.iter() {
            if let Some(pb) = progress {
                pb.inc(1);
            }
            reports.push(report);
        }
        reports
    })
}
