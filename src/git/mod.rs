use anyhow::{Context, Result};
use git2::Repository;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::process::exit_code;
use crate::traits::GitOperations;

/// Git access for real checkouts: clones through the `git` binary so that
/// the user's SSH agent, credential helpers and progress output all apply.
pub struct GitCli;

impl GitCli {
    /// Runs `git clone <url> <dest>` with inherited stdio.
    ///
    /// # Errors
    /// Returns an error only if the `git` binary cannot be started; a failed
    /// clone is reported through the exit code.
    pub fn clone_repo(url: &str, dest: &Path) -> Result<i32> {
        let status = Command::new("git")
            .arg("clone")
            .arg(url)
            .arg(dest)
            .status()
            .context("Failed to execute git clone")?;

        Ok(exit_code(status))
    }

    /// Finds the metadata directory of the checkout at `project_dir`.
    ///
    /// Worktrees and submodules keep it outside `.git/`, so ask libgit2 first
    /// and fall back to `<project_dir>/.git`.
    #[must_use]
    pub fn metadata_dir(project_dir: &Path) -> PathBuf {
        match Repository::open(project_dir) {
            Ok(repo) => repo.path().to_path_buf(),
            Err(e) => {
                tracing::debug!(dir = %project_dir.display(), error = %e, "not a git checkout");
                project_dir.join(".git")
            }
        }
    }
}

impl GitOperations for GitCli {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<i32> {
        GitCli::clone_repo(url, dest)
    }

    fn metadata_dir(&self, project_dir: &Path) -> PathBuf {
        GitCli::metadata_dir(project_dir)
    }
}
