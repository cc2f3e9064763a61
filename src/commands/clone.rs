use anyhow::{Context, Result};

use crate::config::Config;
use crate::git::GitCli;
use crate::output::status;
use crate::storage::RemoteUrl;
use crate::traits::GitOperations;

/// Clone `url` into `<root>/<host>/<owner>/<name>`
///
/// # Errors
/// Returns an error if:
/// - The URL cannot be parsed (nothing is created on disk)
/// - Parent directories cannot be created
/// - The `git` binary cannot be started
pub fn clone_project(config: &Config, url: &str) -> Result<i32> {
    clone_project_with_git(config, &GitCli, url)
}

/// Test version that accepts a mock git implementation
///
/// # Errors
/// See [`clone_project`].
pub fn clone_project_with_git(config: &Config, git: &dyn GitOperations, url: &str) -> Result<i32> {
    let remote = RemoteUrl::parse(url)?;
    let project_path = config.storage.project_path(&remote);

    status(format!("Creating {}", project_path.display()));

    if let Some(parent) = project_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create parent directory: {}", parent.display()))?;
    }

    let code = git.clone_repo(url, &project_path)?;
    if code != 0 {
        tracing::debug!(code, %url, "git clone failed");
    }

    Ok(code)
}
