use anyhow::Result;

use crate::config::Config;
use crate::git::GitCli;
use crate::output::status;
use crate::session::{InteractiveShell, Launcher};
use crate::storage::{MatchMode, ProjectQuery};
use crate::traits::{GitOperations, ShellLauncher};

/// Open a shell in the project matching `query`
///
/// No match and several matches are both reported and exit 0; only a
/// unique match launches.
///
/// # Errors
/// Returns an error if:
/// - The query is malformed
/// - The project root cannot be searched
/// - The session cannot be prepared or the shell cannot be started
pub fn open_shell(config: &Config, query: &str) -> Result<i32> {
    let shell = InteractiveShell::from_settings(&config.settings.session);
    open_shell_with(config, &GitCli, &shell, query)
}

/// Test version that accepts mock git and shell implementations
///
/// # Errors
/// See [`open_shell`].
pub fn open_shell_with(
    config: &Config,
    git: &dyn GitOperations,
    shell: &dyn ShellLauncher,
    query: &str,
) -> Result<i32> {
    let query = ProjectQuery::parse(query)?;
    let matches = config.storage.find_projects(&query, MatchMode::Fuzzy)?;

    match matches.as_slice() {
        [] => {
            status(format!(
                "No Matches Found in {}",
                config.storage.get_root_dir().display()
            ));
            Ok(0)
        }
        [project] => Launcher { config, git, shell }.launch(project),
        _ => {
            status("Multiple Matches:");
            for project in &matches {
                println!("{}", project);
            }
            Ok(0)
        }
    }
}
