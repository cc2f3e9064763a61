//! Project shell sessions.
//!
//! A session is an interactive shell started in a project directory with an
//! environment derived from the parent process: project tools first on
//! `PATH`, per-project shell history, a git-aware prompt naming the project,
//! and any overrides from the project's `.env` file.

pub mod dotenv;

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::{Config, SessionSettings};
use crate::output::status;
use crate::process::exit_code;
use crate::storage::ProjectMatch;
use crate::traits::{GitOperations, ShellLauncher};

pub use dotenv::parse_dotenv;

const WHITE: &str = r"\[\033[0;37m\]";
const GRAY: &str = r"\[\033[0;90m\]";
const CLEAR: &str = r"\[\033[0m\]";

/// Environment variables for a project shell.
///
/// Names and values are kept as raw OS strings so variables that are not
/// valid UTF-8 pass through to the shell untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionEnvironment {
    vars: BTreeMap<OsString, OsString>,
}

impl SessionEnvironment {
    /// Copies the current process environment.
    #[must_use]
    pub fn inherit() -> Self {
        Self::from_vars(std::env::vars_os())
    }

    #[must_use]
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// The value of `key`, if set and valid UTF-8.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_os(key).and_then(OsStr::to_str)
    }

    #[must_use]
    pub fn get_os(&self, key: &str) -> Option<&OsStr> {
        self.vars.get(OsStr::new(key)).map(OsString::as_os_str)
    }

    pub fn set(&mut self, key: impl Into<OsString>, value: impl Into<OsString>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.vars.iter().map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }

    /// Applies the fixed project overlay: tool path, history and prompt.
    pub fn apply_project(&mut self, project: &ProjectMatch, bins: &Path, history_file: &Path) {
        let mut path = bins.as_os_str().to_os_string();
        if let Some(existing) = self.get_os("PATH").filter(|p| !p.is_empty()) {
            path.push(":");
            path.push(existing);
        }
        self.set("PATH", path);

        self.set("HISTFILE", history_file.as_os_str());
        self.set("HISTSIZE", "-1");
        self.set("HISTFILESIZE", "-1");

        self.set("GIT_PS1_SHOWCOLORHINTS", "1");
        self.set("GIT_PS1_SHOWDIRTYSTATE", "1");
        self.set("GIT_PS1_SHOWUNTRACKEDFILES", "1");
        self.set("GIT_PS1_SHOWUPSTREAM", "git");

        self.set("PS1", prompt(project));
    }

    /// Applies `.env` pairs in order, so later keys win.
    pub fn overlay(&mut self, pairs: Vec<(String, String)>) {
        for (key, value) in pairs {
            status(format!("Setting: {}={}", key, value));
            if let Some(previous) = self.get_os(&key) {
                tracing::debug!(%key, ?previous, "overriding inherited variable");
            }
            self.set(key, value);
        }
    }
}

fn prompt(project: &ProjectMatch) -> String {
    format!(
        "{}Project: {}({}){}$(__git_ps1 2>/dev/null)\n[\\!]> ",
        GRAY, WHITE, project, CLEAR
    )
}

/// Runs the configured shell program with inherited standard streams.
pub struct InteractiveShell {
    program: String,
    args: Vec<String>,
}

impl InteractiveShell {
    #[must_use]
    pub fn from_settings(settings: &SessionSettings) -> Self {
        let mut args = Vec::new();
        if let Some(rcfile) = &settings.rcfile {
            args.push("--rcfile".to_string());
            args.push(rcfile.display().to_string());
        }
        args.extend(settings.args.iter().cloned());

        Self {
            program: settings.shell.clone(),
            args,
        }
    }
}

impl ShellLauncher for InteractiveShell {
    fn launch(&self, cwd: &Path, env: &SessionEnvironment) -> Result<i32> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(cwd)
            .env_clear()
            .envs(env.iter())
            .status()
            .with_context(|| format!("Failed to start shell '{}'", self.program))?;

        Ok(exit_code(status))
    }
}

/// Starts sessions for matched projects.
pub struct Launcher<'a> {
    pub config: &'a Config,
    pub git: &'a dyn GitOperations,
    pub shell: &'a dyn ShellLauncher,
}

impl Launcher<'_> {
    /// Builds the session environment for `project` without side effects
    /// beyond reading its `.env` file.
    ///
    /// # Errors
    /// Returns an error if the project's `.env` file exists but cannot be read.
    pub fn environment(
        &self,
        project: &ProjectMatch,
        base: SessionEnvironment,
    ) -> Result<(PathBuf, PathBuf, SessionEnvironment)> {
        let settings = &self.config.settings.session;
        let cwd = self.config.storage.match_path(project);
        let bins = cwd.join(&settings.bin_dir);
        let history_file = self.git.metadata_dir(&cwd).join(&settings.history_file);

        let mut env = base;
        env.apply_project(project, &bins, &history_file);

        let env_file = cwd.join(".env");
        if env_file.is_file() {
            status(format!("Loading Environment: {}", env_file.display()));
            let content = std::fs::read_to_string(&env_file)
                .with_context(|| format!("Failed to read {}", env_file.display()))?;
            env.overlay(parse_dotenv(&content));
        }

        Ok((cwd, bins, env))
    }

    /// Records the access and runs a shell in `project`, returning its exit code.
    ///
    /// # Errors
    /// Returns an error if the environment cannot be built, the recent
    /// projects store cannot be updated, or the shell cannot be started.
    pub fn launch(&self, project: &ProjectMatch) -> Result<i32> {
        let (cwd, bins, env) = self.environment(project, SessionEnvironment::inherit())?;

        status(format!("Working Directory: {}", cwd.display()));
        status(format!("Appending to Bin Path: {}", bins.display()));

        self.config.storage.recent().record_access(project)?;

        let code = self.shell.launch(&cwd, &env)?;
        status(format!("Goodbye! {}", code));

        Ok(code)
    }
}
