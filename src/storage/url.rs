use std::fmt;

use crate::error::ProjectError;

const URL_SCHEMES: &[&str] = &["ssh://", "git+ssh://", "git://", "https://", "http://"];

/// A remote repository location broken into the parts that decide where it
/// lives on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteUrl {
    pub host: String,
    /// One or more path segments between the host and the repository name
    pub owner_path: String,
    pub name: String,
}

impl RemoteUrl {
    /// Parses an SSH-style (`git@host:owner/name.git`) or scheme-style
    /// (`ssh://git@host/owner/name.git`) remote URL.
    ///
    /// # Errors
    /// Returns [`ProjectError::InvalidUrl`] when no host, owner or name can be
    /// extracted, or when a path segment would escape the project root.
    pub fn parse(raw: &str) -> Result<Self, ProjectError> {
        let invalid = || ProjectError::InvalidUrl(raw.to_string());
        let trimmed = raw.trim();

        let (authority, path) = if let Some(rest) = URL_SCHEMES
            .iter()
            .find_map(|scheme| trimmed.strip_prefix(scheme))
        {
            rest.split_once('/').ok_or_else(invalid)?
        } else {
            // scp-like syntax: [user@]host:path
            let (authority, path) = trimmed.split_once(':').ok_or_else(invalid)?;
            if authority.contains('/') {
                return Err(invalid());
            }
            (authority, path)
        };

        let host = authority
            .rsplit_once('@')
            .map_or(authority, |(_, host)| host);
        // Drop an explicit port, e.g. ssh://git@host:2222/owner/name
        let host = host.split_once(':').map_or(host, |(host, _)| host);
        if host.is_empty() {
            return Err(invalid());
        }

        let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if segments.iter().any(|s| *s == "." || *s == "..") {
            return Err(invalid());
        }

        let last = segments.pop().ok_or_else(invalid)?;
        let name = last.strip_suffix(".git").unwrap_or(last);
        if name.is_empty() || segments.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            host: host.to_string(),
            owner_path: segments.join("/"),
            name: name.to_string(),
        })
    }

    /// Builds the conventional SSH clone URL for a repository on `host`.
    #[must_use]
    pub fn ssh(host: &str, owner: &str, name: &str) -> String {
        format!("git@{}:{}/{}.git", host, owner, name)
    }
}

impl fmt::Display for RemoteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.host, self.owner_path, self.name)
    }
}
