pub mod auth;
pub mod github;
pub mod github_status;
mod http;

pub use github::{DEFAULT_HOST, GitHubSource};
