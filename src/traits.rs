use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::session::SessionEnvironment;

/// Trait for Git operations to enable mocking in tests
pub trait GitOperations {
    /// Clones `url` into `dest`, returning git's exit code.
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<i32>;
    /// The version-control metadata directory for a checkout.
    fn metadata_dir(&self, project_dir: &Path) -> PathBuf;
}

/// Starts an interactive shell and waits for it
pub trait ShellLauncher {
    fn launch(&self, cwd: &Path, env: &SessionEnvironment) -> Result<i32>;
}

/// A repository hosting service that can create new repositories
pub trait RepositoryHost {
    /// Creates `name` under the authenticated account.
    fn create_repository(&self, name: &str) -> Result<()>;
}
