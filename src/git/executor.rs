//! Running the system `git` binary.
//!
//! Commands are spawned with `tokio::process::Command` and awaited one at a
//! time, inheriting the user's git config. Arguments are passed directly to
//! git, never through a shell, so no shell quoting applies to them.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use git2::Repository;
use tokio::process::Command;

use crate::error::GitError;

/// Trait for executing git commands.
///
/// This abstraction allows mocking the git subprocess in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GitExecutor: Send + Sync {
    /// Run `git <args>` and return its stdout.
    async fn run(&self, args: &[String]) -> Result<String, GitError>;
}

/// Executor that runs the real `git` binary inside a working directory.
#[derive(Debug, Clone)]
pub struct SystemGitExecutor {
    workdir: PathBuf,
}

impl SystemGitExecutor {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }
}

#[async_trait]
impl GitExecutor for SystemGitExecutor {
    async fn run(&self, args: &[String]) -> Result<String, GitError> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(GitError::SpawnFailed)?;

        if !output.status.success() {
            return Err(GitError::NonZeroExit {
                args: args.join(" "),
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

/// Check if git is installed and accessible.
///
/// Uses the `which` crate for cross-platform executable detection.
pub async fn check_git_installed() -> Result<(), GitError> {
    if which::which("git").is_err() {
        return Err(GitError::NotInstalled);
    }

    let version_check = Command::new("git")
        .arg("--version")
        .output()
        .await
        .map_err(GitError::SpawnFailed)?;

    if !version_check.status.success() {
        return Err(GitError::NotInstalled);
    }

    Ok(())
}

/// Find the working directory of the repository containing `path`.
///
/// Searches parent directories like git itself does, so the tool can be run
/// from anywhere inside a repository.
pub fn discover_workdir(path: &Path) -> Result<PathBuf, GitError> {
    let repo = Repository::discover(path).map_err(GitError::NotARepository)?;
    repo.workdir()
        .map(Path::to_path_buf)
        .ok_or(GitError::BareRepository)
}
