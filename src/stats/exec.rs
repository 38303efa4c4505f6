use crate::api::BitbucketClient;
use crate::cli::Cli;
use crate::model::DateRange;
use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use super::{build_output, output_json, output_ndjson, output_table, run_pool, select_recent_repos};

/// One full run: select repositories, fan out per-repo tasks, fold, render.
/// Per-repository failures are logged and tolerated; only a failure to list
/// the workspace itself (including rejected credentials) is fatal.
pub fn exec(cli: Cli) -> anyhow::Result<()> {
    let range = DateRange::trailing(cli.days);
    let client = BitbucketClient::new(&cli.workspace, &cli.username, &cli.app_password);

    info!(days = cli.days, workspace = %cli.workspace, "fetching recently updated repositories");
    let repos =
        select_recent_repos(&client, &range).context("Failed to list workspace repositories")?;
    info!(count = repos.len(), "repositories selected");

    let quiet = cli.json || cli.ndjson;
    let pb = (!quiet).then(|| {
        let pb = ProgressBar::new(repos.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        pb.set_message("Processing repositories...");
        pb
    });

    let reports = run_pool(
        &client,
        &range,
        &repos,
        cli.workers,
        cli.branches,
        pb.as_ref(),
    );
    if let Some(pb) = &pb {
        pb.finish_and_clear();
    }

    let summary = build_output(&cli.workspace, cli.days, &range, &reports);

    if cli.json {
        output_json(&summary)?;
    } else if cli.ndjson {
        output_ndjson(&summary)?;
    } else {
        output_table(&summary)?;
    }

    Ok(())
}
