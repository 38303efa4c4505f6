use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "wstat")]
#[command(about = "Workspace commit activity summary for Bitbucket Cloud")]
#[command(version)]
pub struct Cli {
    #[arg(long, env = "WSTAT_WORKSPACE", help = "Bitbucket workspace ID")]
    pub workspace: String,

    #[arg(long, env = "WSTAT_USERNAME", help = "Bitbucket username")]
    pub username: String,

    #[arg(
        long,
        env = "WSTAT_APP_PASSWORD",
        hide_env_values = true,
        help = "App password scoped to repository read access"
    )]
    pub app_password: String,

    #[arg(long, default_value_t = 30, help = "Trailing window in days")]
    pub days: u32,

    #[arg(long, default_value_t = 5, help = "Number of concurrent repository workers")]
    pub workers: usize,

    #[arg(long, help = "Break stats down per branch")]
    pub branches: bool,

    #[arg(long, help = "Output as JSON")]
    pub json: bool,

    #[arg(long, help = "Output as NDJSON")]
    pub ndjson: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        crate::stats::exec(self)
    }
}
