use crate::model::ActivityOutput;
use anyhow::Result;
use console::style;

pub fn output_json(summary: &ActivityOutput) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

pub fn output_ndjson(summary: &ActivityOutput) -> Result<()> {
    for row in &summary.repos {
        println!("{}", serde_json::to_string(row)?);
    }
    for row in &summary.branches {
        println!("{}", serde_json::to_string(row)?);
    }
    for row in &summary.totals {
        println!("{}", serde_json::to_string(row)?);
    }
    Ok(())
}

pub fn output_table(summary: &ActivityOutput) -> Result<()> {
    println!(
        "{}",
        style(format!(
            "Repo Commit Summary (last {} days)",
            summary.window_days
        ))
        .bold()
    );
    println!("{}", "─".repeat(60));

    for repo in &summary.repositories {
        println!("\n{}", style(repo).cyan().bold());

        let rows: Vec<_> = summary.repos.iter().filter(|r| &r.repo == repo).collect();
        if rows.is_empty() {
            println!("  no commits in window");
            continue;
        }
        for row in rows {
            println!(
                "  {}: {} commits, {} / {}",
                row.user,
                row.commits,
                style(format!("+{}", row.additions)).green(),
                style(format!("-{}", row.deletions)).red()
            );
        }

        let mut current_branch: Option<&str> = None;
        for row in summary.branches.iter().filter(|r| &r.repo == repo) {
            if current_branch != Some(row.branch.as_str()) {
                println!("  {}", style(format!("[{}]", row.branch)).dim());
                current_branch = Some(row.branch.as_str());
            }
            println!(
                "    {}: {} commits, +{} / -{}",
                row.user, row.commits, row.additions, row.deletions
            );
        }
    }

    println!("\n{}", style("Overall Totals").bold());
    println!("{}", "─".repeat(60));
    if summary.totals.is_empty() {
        println!("no commits in window");
    }
    for row in &summary.totals {
        println!(
            "{}: {} commits, {} / {}",
            row.user,
            row.commits,
            style(format!("+{}", row.additions)).green(),
            style(format!("-{}", row.deletions)).red()
        );
    }

    Ok(())
}
