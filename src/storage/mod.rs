//! On-disk layout of the project root.
//!
//! Every project lives at `<root>/<host>/<owner>/<name>`. Tool state lives in
//! `<root>/.g/`, which the three-level match patterns never reach because
//! hidden entries need a literal leading dot.

pub mod query;
pub mod recent;
pub mod url;

use anyhow::{Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};

pub use query::{MatchMode, ProjectQuery};
pub use recent::{RecentEntry, RecentProjects};
pub use url::RemoteUrl;

/// Name of the state directory inside the project root
pub const STATE_DIR: &str = ".g";

/// A `host/owner/name` path relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectMatch(String);

impl ProjectMatch {
    #[must_use]
    pub fn new(relative: impl Into<String>) -> Self {
        Self(relative.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub struct ProjectStorage {
    root_dir: PathBuf,
}

impl ProjectStorage {
    /// Resolves the project root: an explicit path wins, then `~/Projects`.
    ///
    /// Unlike the state directory, the root is not created here; it appears
    /// on the first clone.
    ///
    /// # Errors
    /// Returns an error if no root is given and the home directory is unknown.
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root_dir = if let Some(custom_root) = root {
            custom_root
        } else {
            dirs::home_dir()
                .context("Failed to get user home directory")?
                .join("Projects")
        };

        Ok(Self { root_dir })
    }

    #[must_use]
    pub fn get_root_dir(&self) -> &Path {
        &self.root_dir
    }

    #[must_use]
    pub fn state_dir(&self) -> PathBuf {
        self.root_dir.join(STATE_DIR)
    }

    #[must_use]
    pub fn recent(&self) -> RecentProjects {
        RecentProjects::new(&self.state_dir())
    }

    /// Where a clone of `remote` belongs.
    #[must_use]
    pub fn project_path(&self, remote: &RemoteUrl) -> PathBuf {
        self.root_dir
            .join(&remote.host)
            .join(&remote.owner_path)
            .join(&remote.name)
    }

    /// Absolute directory of a matched project.
    #[must_use]
    pub fn match_path(&self, project: &ProjectMatch) -> PathBuf {
        project
            .as_str()
            .split('/')
            .fold(self.root_dir.clone(), |path, segment| path.join(segment))
    }

    /// Finds project directories matching `query`, in enumeration order.
    ///
    /// Directories that cannot be read are skipped with a warning.
    ///
    /// # Errors
    /// Returns an error if the query is not a valid glob.
    pub fn find_projects(&self, query: &ProjectQuery, mode: MatchMode) -> Result<Vec<ProjectMatch>> {
        let relative = query.pattern(mode);
        let pattern = format!(
            "{}/{}",
            glob::Pattern::escape(&self.root_dir.to_string_lossy()),
            relative
        );
        tracing::debug!(%pattern, "searching projects");

        let options = glob::MatchOptions {
            require_literal_leading_dot: true,
            ..glob::MatchOptions::new()
        };

        let mut matches = Vec::new();
        for entry in glob::glob_with(&pattern, options)
            .with_context(|| format!("Invalid project pattern: {}", relative))?
        {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    tracing::warn!(
                        path = %e.path().display(),
                        error = %e.error(),
                        "skipping unreadable directory"
                    );
                    continue;
                }
            };
            if !path.is_dir() {
                continue;
            }

            let relative = path.strip_prefix(&self.root_dir)?;
            let segments: Vec<_> = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().to_string())
                .collect();
            if segments.len() != 3 {
                continue;
            }
            matches.push(ProjectMatch::new(segments.join("/")));
        }

        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn storage_with(projects: &[&str]) -> Result<(TempDir, ProjectStorage)> {
        let dir = TempDir::new()?;
        for project in projects {
            std::fs::create_dir_all(dir.path().join(project))?;
        }
        let storage = ProjectStorage::new(Some(dir.path().to_path_buf()))?;
        Ok((dir, storage))
    }

    fn find(storage: &ProjectStorage, raw: &str, mode: MatchMode) -> Result<Vec<String>> {
        let query = ProjectQuery::parse(raw)?;
        let mut found: Vec<String> = storage
            .find_projects(&query, mode)?
            .into_iter()
            .map(|m| m.to_string())
            .collect();
        found.sort();
        Ok(found)
    }

    #[test]
    fn test_project_path_layout() -> Result<()> {
        let storage = ProjectStorage::new(Some(PathBuf::from("/projects")))?;
        let remote = RemoteUrl::parse("git@github.com:alice/widget.git")?;
        assert_eq!(
            storage.project_path(&remote),
            PathBuf::from("/projects/github.com/alice/widget")
        );
        Ok(())
    }

    #[test]
    fn test_ambiguous_and_unique_matches() -> Result<()> {
        let (_dir, storage) =
            storage_with(&["github.com/alice/widget", "github.com/bob/widget"])?;

        assert_eq!(
            find(&storage, "widget", MatchMode::Fuzzy)?,
            vec!["github.com/alice/widget", "github.com/bob/widget"]
        );
        assert_eq!(
            find(&storage, "alice/widget", MatchMode::Fuzzy)?,
            vec!["github.com/alice/widget"]
        );
        Ok(())
    }

    #[test]
    fn test_fuzzy_matches_substring_exact_does_not() -> Result<()> {
        let (_dir, storage) = storage_with(&["github.com/alice/my-widget-rs", "gitlab.com/carol/gadget"])?;

        assert_eq!(
            find(&storage, "widget", MatchMode::Fuzzy)?,
            vec!["github.com/alice/my-widget-rs"]
        );
        assert!(find(&storage, "widget", MatchMode::Exact)?.is_empty());
        assert_eq!(
            find(&storage, "widget", MatchMode::Fuzzy)?,
            find(&storage, "*widget*", MatchMode::Exact)?
        );
        Ok(())
    }

    #[test]
    fn test_files_and_state_dir_are_not_projects() -> Result<()> {
        let (dir, storage) = storage_with(&["github.com/alice/widget", ".g/x/y"])?;
        std::fs::write(dir.path().join("github.com/alice/notes.txt"), "")?;

        assert_eq!(
            find(&storage, "", MatchMode::Exact)?,
            vec!["github.com/alice/widget"]
        );
        Ok(())
    }

    #[test]
    fn test_recursive_wildcard_rejected_in_both_modes() -> Result<()> {
        let (_dir, storage) = storage_with(&["github.com/alice/widget/src/deep"])?;

        for mode in [MatchMode::Exact, MatchMode::Fuzzy] {
            for raw in ["**", "alice/**", "**/*/widget", "wid**"] {
                let Err(err) = find(&storage, raw, mode) else {
                    unreachable!("'{}' should be rejected", raw);
                };
                assert!(matches!(
                    err.downcast_ref::<crate::error::ProjectError>(),
                    Some(crate::error::ProjectError::InvalidQuery(_))
                ));
            }
            assert_eq!(find(&storage, "", mode)?, vec!["github.com/alice/widget"]);
        }
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_directory_is_skipped() -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let (dir, storage) =
            storage_with(&["github.com/alice/widget", "gitlab.com/carol/gadget"])?;
        let locked = dir.path().join("gitlab.com");
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000))?;

        // Permission bits do not apply to root.
        if std::fs::read_dir(&locked).is_ok() {
            std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755))?;
            return Ok(());
        }

        let found = find(&storage, "", MatchMode::Exact);
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755))?;

        assert_eq!(found?, vec!["github.com/alice/widget"]);
        Ok(())
    }

    #[test]
    fn test_empty_root_has_no_matches() -> Result<()> {
        let (_dir, storage) = storage_with(&[])?;
        assert!(storage.find_projects(&ProjectQuery::any(), MatchMode::Exact)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_match_path_joins_segments() -> Result<()> {
        let (dir, storage) = storage_with(&["github.com/alice/widget"])?;
        let path = storage.match_path(&ProjectMatch::new("github.com/alice/widget"));
        assert_eq!(path, dir.path().join("github.com").join("alice").join("widget"));
        assert!(path.is_dir());
        Ok(())
    }
}
