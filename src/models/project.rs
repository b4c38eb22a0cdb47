use serde::{Deserialize, Serialize};

/// An owned repo tagged with the categories it is evidence for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCard {
    pub name: String,
    pub description: String,
    pub url: String,
    /// Language first, then title-cased topics.
    pub tech: Vec<String>,
    /// Matching category ids, best match first. Never empty.
    pub categories: Vec<String>,
    pub language: String,
    pub stars: u64,
    pub forks: u64,
}
