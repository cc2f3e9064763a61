#![allow(clippy::unwrap_used)] // Tests use unwrap for simplicity

use anyhow::{Context, Result};
use assert_fs::TempDir;
use assert_fs::prelude::*;

/// Test environment with a temporary project root and isolated process environment
pub struct CliTestEnvironment {
    pub root_dir: assert_fs::fixture::ChildPath,
    pub home_dir: assert_fs::fixture::ChildPath,
    _temp_dir: TempDir, // Keep temp_dir private to ensure cleanup, but don't expose it
}

impl CliTestEnvironment {
    /// Creates a new test environment with an empty project root
    ///
    /// # Errors
    /// Returns an error if the temporary directories cannot be created
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new().context("Failed to create temporary directory")?;
        let root_dir = temp_dir.child("projects");
        let home_dir = temp_dir.child("home");

        root_dir.create_dir_all()?;
        home_dir.create_dir_all()?;

        Ok(Self {
            root_dir,
            home_dir,
            _temp_dir: temp_dir,
        })
    }

    /// Creates a project directory at `host/owner/name` under the root
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created
    pub fn add_project(&self, relative: &str) -> Result<assert_fs::fixture::ChildPath> {
        let project = self.root_dir.child(relative);
        project.create_dir_all()?;
        Ok(project)
    }

    /// Writes `<root>/.g/config.toml`
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    pub fn write_settings(&self, toml: &str) -> Result<()> {
        self.state_dir().create_dir_all()?;
        self.state_dir().child("config.toml").write_str(toml)?;
        Ok(())
    }

    /// Configures sessions to run `script` through `sh -c` instead of an interactive shell
    ///
    /// # Errors
    /// Returns an error if the settings file cannot be written
    pub fn use_script_shell(&self, script: &str) -> Result<()> {
        let args = serde_json::to_string(&["-c", script])?;
        self.write_settings(&format!("[session]\nshell = \"sh\"\nargs = {}\n", args))
    }

    /// Seeds the recent projects store with `(project, epoch millis)` pairs
    ///
    /// # Errors
    /// Returns an error if the store file cannot be written
    pub fn seed_recent(&self, entries: &[(&str, i64)]) -> Result<()> {
        let mut items = serde_json::Map::new();
        for (project, millis) in entries {
            items.insert(
                (*project).to_string(),
                serde_json::json!({ "access": millis }),
            );
        }
        self.state_dir().create_dir_all()?;
        self.recent_file()
            .write_str(&serde_json::Value::Object(items).to_string())?;
        Ok(())
    }

    /// Reads the recent projects store as JSON
    ///
    /// # Errors
    /// Returns an error if the file is missing or not JSON
    pub fn read_recent(&self) -> Result<serde_json::Value> {
        let content = std::fs::read_to_string(self.recent_file().path())
            .context("Failed to read recent projects store")?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn state_dir(&self) -> assert_fs::fixture::ChildPath {
        self.root_dir.child(".g")
    }

    pub fn recent_file(&self) -> assert_fs::fixture::ChildPath {
        self.state_dir().child("last")
    }

    /// Execute a non-interactive CLI command with proper environment setup
    ///
    /// # Errors
    /// Returns an error if the command setup fails
    pub fn run_command(&self, args: &[&str]) -> Result<assert_cmd::Command> {
        let mut cmd =
            assert_cmd::Command::cargo_bin("g").context("Failed to find g binary")?;

        cmd.current_dir(self.root_dir.path())
            .env("G_PROJECT_ROOT", self.root_dir.path())
            .env("HOME", self.home_dir.path())
            .env("NO_COLOR", "1")
            .env_remove("G_GITHUB_USER")
            .env_remove("G_GITHUB_TOKEN")
            .env_remove("G_LOG");

        cmd.args(args);
        Ok(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use predicates::prelude::*;

    #[test]
    fn test_cli_test_environment_creation() -> Result<()> {
        let env = CliTestEnvironment::new()?;

        env.root_dir.assert(predicate::path::is_dir());
        env.home_dir.assert(predicate::path::is_dir());
        env.state_dir().assert(predicate::path::missing());

        Ok(())
    }

    #[test]
    fn test_seed_and_read_recent() -> Result<()> {
        let env = CliTestEnvironment::new()?;
        env.seed_recent(&[("github.com/alice/widget", 42)])?;

        let recent = env.read_recent()?;
        assert_eq!(recent["github.com/alice/widget"]["access"], 42);

        Ok(())
    }
}
