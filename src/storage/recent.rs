use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::ProjectMatch;
use crate::error::ProjectError;

/// Last-access record for a single project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentEntry {
    #[serde(rename = "access")]
    pub last_access_epoch_millis: i64,
}

pub type RecentMap = BTreeMap<String, RecentEntry>;

/// Recency log persisted as JSON at `<root>/.g/last`.
///
/// Writes are whole-file and last-writer-wins: two processes recording at the
/// same moment may lose one update.
pub struct RecentProjects {
    path: PathBuf,
}

impl RecentProjects {
    #[must_use]
    pub fn new(state_dir: &Path) -> Self {
        Self {
            path: state_dir.join("last"),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the persisted mapping; a missing file is an empty mapping.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, or
    /// [`ProjectError::CorruptStore`] if it is not valid JSON.
    pub fn load(&self) -> Result<RecentMap> {
        if !self.path.exists() {
            return Ok(RecentMap::new());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        serde_json::from_str(&content).map_err(|source| {
            ProjectError::CorruptStore {
                path: self.path.clone(),
                source,
            }
            .into()
        })
    }

    /// Replaces the persisted mapping.
    ///
    /// # Errors
    /// Returns an error if the state directory or file cannot be written.
    pub fn save(&self, items: &RecentMap) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }

        let content = serde_json::to_string(items)?;

        // Write atomically: write to temp then rename
        let tmp_path = self.path.with_extension("tmp");
        std::fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
        std::fs::rename(&tmp_path, &self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;

        Ok(())
    }

    /// Stamps `project` with the current time.
    ///
    /// # Errors
    /// Returns an error if the store cannot be read, parsed or written.
    pub fn record_access(&self, project: &ProjectMatch) -> Result<()> {
        self.record_access_at(project, chrono::Utc::now().timestamp_millis())
    }

    fn record_access_at(&self, project: &ProjectMatch, millis: i64) -> Result<()> {
        let mut items = self.load()?;
        items.insert(
            project.as_str().to_string(),
            RecentEntry {
                last_access_epoch_millis: millis,
            },
        );
        tracing::debug!(project = %project, millis, "recording access");
        self.save(&items)
    }

    /// Returns at most `n` projects, most recently accessed first.
    ///
    /// # Errors
    /// Returns an error if the store cannot be read, or
    /// [`ProjectError::CorruptStore`] if it cannot be parsed.
    pub fn top_n(&self, n: usize) -> Result<Vec<(ProjectMatch, RecentEntry)>> {
        let mut items: Vec<(ProjectMatch, RecentEntry)> = self
            .load()?
            .into_iter()
            .map(|(key, entry)| (ProjectMatch::new(key), entry))
            .collect();

        items.sort_by(|(_, l), (_, r)| r.last_access_epoch_millis.cmp(&l.last_access_epoch_millis));
        items.truncate(n);

        Ok(items)
    }
}
