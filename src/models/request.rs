use serde::{Deserialize, Serialize};

use super::repo::{ProfileInput, RepoRecord};

/// One NDJSON session request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaRequest {
    pub command: Command,
    /// Bundle file (profile) or repo file (score)
    #[serde(default)]
    pub path: String,
    /// Inline bundle, used instead of `path` for profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<ProfileInput>,
    /// Inline repo, used instead of `path` for score
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<RepoRecord>,
    /// Activation threshold override (0-100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<u8>,
    /// Reference time override (RFC 3339 or YYYY-MM-DD)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_of: Option<String>,
    /// Group filter (for taxonomy command)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Include non-evidence scores (for score command)
    #[serde(default)]
    pub all: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    Profile,
    Score,
    Taxonomy,
    Doctor,
}
