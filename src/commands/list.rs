use anyhow::Result;

use crate::config::Config;
use crate::storage::{MatchMode, ProjectMatch, ProjectQuery};

/// Print every project matching `query` (all projects when absent), one per line
///
/// # Errors
/// Returns an error if the query is malformed or the project root cannot be read.
pub fn list_projects(config: &Config, query: Option<&str>) -> Result<()> {
    for project in find_listed(config, query)? {
        println!("{}", project);
    }

    Ok(())
}

/// The projects `list` would print, without printing them
///
/// # Errors
/// See [`list_projects`].
pub fn find_listed(config: &Config, query: Option<&str>) -> Result<Vec<ProjectMatch>> {
    let query = match query {
        Some(raw) => ProjectQuery::parse(raw)?,
        None => ProjectQuery::any(),
    };

    config.storage.find_projects(&query, MatchMode::Exact)
}
