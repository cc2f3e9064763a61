use crate::error::ProjectError;

/// How the name segment of a query is turned into a glob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// `sh`: the name matches as a substring (`*name*`)
    Fuzzy,
    /// `list`: the name is used verbatim
    Exact,
}

/// A user-supplied `[host/][owner/]name` locator, bound right to left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectQuery {
    host: String,
    owner: String,
    name: String,
}

impl ProjectQuery {
    /// Parses a query of one to three `/`-separated segments.
    ///
    /// Missing leading segments and empty segments become `*`.
    ///
    /// # Errors
    /// Returns [`ProjectError::InvalidQuery`] for more than three segments,
    /// or when a segment contains the recursive wildcard `**`.
    pub fn parse(raw: &str) -> Result<Self, ProjectError> {
        if raw.split('/').count() > 3 || raw.contains("**") {
            return Err(ProjectError::InvalidQuery(raw.to_string()));
        }

        let mut segments = raw.split('/').rev();
        let mut next = || {
            segments
                .next()
                .filter(|s| !s.is_empty())
                .unwrap_or("*")
                .to_string()
        };

        let name = next();
        let owner = next();
        let host = next();

        Ok(Self { host, owner, name })
    }

    /// The query that matches every project.
    #[must_use]
    pub fn any() -> Self {
        Self {
            host: "*".to_string(),
            owner: "*".to_string(),
            name: "*".to_string(),
        }
    }

    /// Builds the three-segment glob pattern, relative to the project root.
    #[must_use]
    pub fn pattern(&self, mode: MatchMode) -> String {
        let name = match mode {
            MatchMode::Exact => self.name.clone(),
            MatchMode::Fuzzy => {
                let mut wrapped = self.name.clone();
                if !wrapped.starts_with('*') {
                    wrapped.insert(0, '*');
                }
                if !wrapped.ends_with('*') {
                    wrapped.push('*');
                }
                wrapped
            }
        };

        format!("{}/{}/{}", self.host, self.owner, name)
    }
}
