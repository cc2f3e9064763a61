//! Runtime configuration.
//!
//! A [`Config`] is assembled once in `main` from three places:
//! - the project root (`--root`, `G_PROJECT_ROOT`, or `~/Projects`)
//! - hosting credentials from `G_GITHUB_USER` / `G_GITHUB_TOKEN`
//! - optional settings in `<root>/.g/config.toml`
//!
//! # Settings Example
//!
//! ```toml
//! [session]
//! shell = "bash"
//! rcfile = "/usr/share/git/completion/git-prompt.sh"
//! bin-dir = "node_modules/.bin"
//!
//! [resume]
//! limit = 5
//!
//! [hosting]
//! host = "github.com"
//! api-url = "https://api.github.com"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ProjectError;
use crate::storage::ProjectStorage;

pub const USER_VAR: &str = "G_GITHUB_USER";
pub const TOKEN_VAR: &str = "G_GITHUB_TOKEN";
pub const SETTINGS_FILE: &str = "config.toml";

/// Optional tunables loaded from `<root>/.g/config.toml`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub session: SessionSettings,
    #[serde(default)]
    pub resume: ResumeSettings,
    #[serde(default)]
    pub hosting: HostingSettings,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SessionSettings {
    /// Program launched for project sessions
    #[serde(default = "default_shell")]
    pub shell: String,
    /// Extra arguments passed after `--rcfile`
    #[serde(default)]
    pub args: Vec<String>,
    /// Startup file handed to the shell via `--rcfile`
    #[serde(default)]
    pub rcfile: Option<PathBuf>,
    /// Project-local tool directory prepended to `PATH`
    #[serde(default = "default_bin_dir")]
    pub bin_dir: String,
    /// File name for shell history inside the git metadata directory
    #[serde(default = "default_history_file")]
    pub history_file: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResumeSettings {
    #[serde(default = "default_resume_limit")]
    pub limit: usize,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct HostingSettings {
    /// Host used when synthesizing clone URLs for new repositories
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_shell() -> String {
    "bash".to_string()
}

fn default_bin_dir() -> String {
    "node_modules/.bin".to_string()
}

fn default_history_file() -> String {
    "bash_history".to_string()
}

fn default_resume_limit() -> usize {
    5
}

fn default_host() -> String {
    "github.com".to_string()
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            shell: default_shell(),
            args: Vec::new(),
            rcfile: None,
            bin_dir: default_bin_dir(),
            history_file: default_history_file(),
        }
    }
}

impl Default for ResumeSettings {
    fn default() -> Self {
        Self {
            limit: default_resume_limit(),
        }
    }
}

impl Default for HostingSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            api_url: default_api_url(),
        }
    }
}

impl Settings {
    /// Loads settings from a state directory.
    ///
    /// A missing or blank file yields defaults. Invalid TOML prints a warning
    /// and also yields defaults.
    ///
    /// # Errors
    /// Only returns an error if the file exists but cannot be read.
    pub fn load_from_dir(state_dir: &Path) -> Result<Self> {
        let settings_path = state_dir.join(SETTINGS_FILE);

        if !settings_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&settings_path)
            .with_context(|| format!("Failed to read config file: {}", settings_path.display()))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        match toml::from_str::<Settings>(&content) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                eprintln!("Warning: Invalid TOML syntax in {}:", settings_path.display());
                eprintln!("  {}", e);
                eprintln!("  Using default configuration. Please fix the syntax and try again.");
                Ok(Self::default())
            }
        }
    }
}

/// Account identifier and access token for the repository host.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub user: Option<String>,
    pub token: Option<String>,
}

impl Credentials {
    /// Reads credentials from the environment; empty values count as unset.
    #[must_use]
    pub fn from_env() -> Self {
        let read = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());
        Self {
            user: read(USER_VAR),
            token: read(TOKEN_VAR),
        }
    }

    /// Returns `(user, token)`, or the first missing variable.
    ///
    /// # Errors
    /// Returns [`ProjectError::MissingCredentials`] naming the unset variable.
    pub fn require(&self) -> Result<(&str, &str), ProjectError> {
        let user = self
            .user
            .as_deref()
            .ok_or(ProjectError::MissingCredentials(USER_VAR))?;
        let token = self
            .token
            .as_deref()
            .ok_or(ProjectError::MissingCredentials(TOKEN_VAR))?;
        Ok((user, token))
    }
}

/// Everything a command needs, built once per process.
pub struct Config {
    pub storage: ProjectStorage,
    pub credentials: Credentials,
    pub settings: Settings,
}

impl Config {
    /// Builds the configuration for this process.
    ///
    /// # Errors
    /// Returns an error if the project root cannot be determined or the
    /// settings file cannot be read.
    pub fn load(root: Option<PathBuf>) -> Result<Self> {
        let storage = ProjectStorage::new(root)?;
        let settings = Settings::load_from_dir(&storage.state_dir())?;
        tracing::debug!(root = %storage.get_root_dir().display(), "configuration loaded");

        Ok(Self {
            storage,
            credentials: Credentials::from_env(),
            settings,
        })
    }
}
