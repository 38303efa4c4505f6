pub mod aggregate;
pub mod exec;
pub mod fetch;
pub mod output;
pub mod pool;

pub use aggregate::{build_output, merge_reports};
pub use exec::exec;
pub use fetch::{list_branches, process_repo, select_recent_repos};
pub use output::{output_json, output_ndjson, output_table};
pub use pool::run_pool;
