use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Serialize;
use std::time::Duration;

use crate::error::ProjectError;
use crate::traits::RepositoryHost;

#[derive(Serialize)]
struct CreateRepoRequest<'a> {
    name: &'a str,
}

/// Minimal GitHub REST client: just enough to create a repository.
pub struct GitHubClient {
    client: Client,
    api_url: String,
    token: String,
}

impl GitHubClient {
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(api_url: &str, token: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("g/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }
}

impl RepositoryHost for GitHubClient {
    fn create_repository(&self, name: &str) -> Result<()> {
        let response = self
            .client
            .post(format!("{}/user/repos", self.api_url))
            .bearer_auth(&self.token)
            .header("accept", "application/vnd.github+json")
            .json(&CreateRepoRequest { name })
            .send()
            .context("Failed to connect to the repository host (check network connection)")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ProjectError::RemoteApi {
                status: status.as_u16(),
                hint: status_hint(status),
                body,
            }
            .into());
        }

        tracing::debug!(%name, %status, "repository created");
        Ok(())
    }
}

fn status_hint(status: StatusCode) -> &'static str {
    match status.as_u16() {
        401 | 403 => " (check G_GITHUB_TOKEN)",
        422 => " (repository may already exist)",
        429 => " (rate limited, try again later)",
        500..=599 => " (host server error, try again later)",
        _ => "",
    }
}
