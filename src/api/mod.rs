pub mod client;
pub mod page;
pub mod types;

pub use client::{BitbucketClient, WorkspaceApi};
pub use page::Paginator;
pub use types::{ApiAuthor, ApiCommit, ApiUser, BranchRef, CommitParent, DiffstatEntry, Page, RepoSummary};
