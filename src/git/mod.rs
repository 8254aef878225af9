//! Git operations: staged file listing and diff collection.

pub mod executor;
pub mod staged;

pub use executor::{GitExecutor, SystemGitExecutor, check_git_installed, discover_workdir};
pub use staged::{MAX_DIFF_CHARS, MINIFIED_MARKER, collect_diff, is_excluded, truncate_chars};
