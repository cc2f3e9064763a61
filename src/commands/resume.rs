use anyhow::Result;
use chrono::{DateTime, Local};
use colored::Colorize;

use crate::config::Config;
use crate::git::GitCli;
use crate::output::status;
use crate::selection::{RealSelectionProvider, SelectionProvider, parse_choice};
use crate::session::{InteractiveShell, Launcher};
use crate::storage::RecentEntry;
use crate::traits::{GitOperations, ShellLauncher};

/// Offer the most recently used projects and open a shell in the chosen one
///
/// # Errors
/// Returns an error if:
/// - The recent projects store is corrupt or unreadable
/// - Reading the choice fails
/// - The chosen session cannot be started
pub fn resume_project(config: &Config) -> Result<i32> {
    let shell = InteractiveShell::from_settings(&config.settings.session);
    resume_project_with(config, &GitCli, &shell, &RealSelectionProvider)
}

/// Test version that accepts mock git, shell and selection implementations
///
/// # Errors
/// See [`resume_project`].
pub fn resume_project_with(
    config: &Config,
    git: &dyn GitOperations,
    shell: &dyn ShellLauncher,
    provider: &dyn SelectionProvider,
) -> Result<i32> {
    let items = config
        .storage
        .recent()
        .top_n(config.settings.resume.limit)?;

    if items.is_empty() {
        status("No Projects to Resume");
        return Ok(0);
    }

    for (index, (project, entry)) in items.iter().enumerate() {
        println!("{} {} {}", index, project, last_access(entry).bright_black());
    }

    let answer = provider.get_text_input("Choose:")?;
    let Some(index) = parse_choice(&answer, items.len()) else {
        status("Not Found");
        return Ok(0);
    };

    let project = &items[index].0;
    if !config.storage.match_path(project).is_dir() {
        status(format!(
            "No Matches Found in {}",
            config.storage.get_root_dir().display()
        ));
        return Ok(0);
    }

    Launcher { config, git, shell }.launch(project)
}

fn last_access(entry: &RecentEntry) -> String {
    DateTime::from_timestamp_millis(entry.last_access_epoch_millis)
        .map(|at| at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}
