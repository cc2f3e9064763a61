use std::path::PathBuf;
use thiserror::Error;

/// Domain failures that callers may want to tell apart from generic I/O errors.
///
/// Commands return `anyhow::Result`; these stay reachable through
/// `anyhow::Error::downcast_ref`.
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("invalid remote URL '{0}': expected [user@]host:owner/name or scheme://host/owner/name")]
    InvalidUrl(String),

    #[error("invalid project query '{0}': expected name, owner/name or host/owner/name without '**'")]
    InvalidQuery(String),

    #[error("missing credentials: please set {0}")]
    MissingCredentials(&'static str),

    #[error("recent projects store is corrupt: {}", path.display())]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("repository host returned {status}{hint}: {body}")]
    RemoteApi {
        status: u16,
        hint: &'static str,
        body: String,
    },
}
