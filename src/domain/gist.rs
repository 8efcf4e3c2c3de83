use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A gist as returned by the GitHub API, reduced to the fields a sweep reads.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Gist {
    /// Opaque, unique gist identifier.
    pub id: String,
    /// Free-text description; GitHub reports `null` for gists without one.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the gist is publicly listed.
    #[serde(default)]
    pub public: bool,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

impl Gist {
    /// Description text, with a missing description read as empty.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}
