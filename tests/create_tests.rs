//! Integration tests for the create command
//!
//! Only the credential checks are exercised here; they must fail before any
//! network call or directory creation.

use anyhow::Result;
use predicates::prelude::*;

use test_support::CliTestEnvironment;

#[test]
fn test_create_without_credentials_fails_immediately() -> Result<()> {
    let env = CliTestEnvironment::new()?;

    env.run_command(&["create", "widget"])?
        .assert()
        .failure()
        .stderr(predicate::str::contains("G_GITHUB_USER"));

    assert_eq!(std::fs::read_dir(env.root_dir.path())?.count(), 0);

    Ok(())
}

#[test]
fn test_create_without_token_names_token() -> Result<()> {
    let env = CliTestEnvironment::new()?;

    env.run_command(&["create", "widget"])?
        .env("G_GITHUB_USER", "alice")
        .assert()
        .failure()
        .stderr(predicate::str::contains("G_GITHUB_TOKEN"));

    assert_eq!(std::fs::read_dir(env.root_dir.path())?.count(), 0);

    Ok(())
}
