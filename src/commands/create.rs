use anyhow::Result;

use crate::commands::clone::clone_project_with_git;
use crate::config::Config;
use crate::git::GitCli;
use crate::hosting::GitHubClient;
use crate::output::status;
use crate::storage::RemoteUrl;
use crate::traits::{GitOperations, RepositoryHost};

/// Create `name` on the repository host, then clone it into the project root
///
/// # Errors
/// Returns an error if:
/// - `G_GITHUB_USER` or `G_GITHUB_TOKEN` is missing (checked before anything else)
/// - The name is not a valid repository name
/// - The host rejects the request or cannot be reached (no clone is attempted)
/// - The clone cannot be started
pub fn create_project(config: &Config, name: &str) -> Result<i32> {
    let (user, token) = config.credentials.require()?;
    validate_name(name)?;

    let host = GitHubClient::new(&config.settings.hosting.api_url, token)?;
    create_project_with(config, &host, &GitCli, user, name)
}

/// Test version that accepts mock host and git implementations
///
/// # Errors
/// See [`create_project`].
pub fn create_project_with(
    config: &Config,
    host: &dyn RepositoryHost,
    git: &dyn GitOperations,
    user: &str,
    name: &str,
) -> Result<i32> {
    validate_name(name)?;

    status(format!("Creating repository {}/{}", user, name));
    host.create_repository(name)?;

    let url = RemoteUrl::ssh(&config.settings.hosting.host, user, name);
    clone_project_with_git(config, git, &url)
}

fn validate_name(name: &str) -> Result<()> {
    let name = name.trim();
    if name.is_empty() || name.contains('/') || name == "." || name == ".." {
        anyhow::bail!("Invalid repository name: '{}'", name);
    }
    Ok(())
}
