use serde::{Deserialize, Serialize};

use crate::taxonomy::{Category, Group};

/// Score of one repo against one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryMatch {
    pub category_id: String,
    pub title: String,
    pub score: f64,
    /// Score reached the evidence floor.
    pub evidence: bool,
}

/// Per-category scores for a single repo, best first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoScoreResult {
    pub repo: String,
    pub matches: Vec<CategoryMatch>,
}

/// Listing entry for the `taxonomy` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: String,
    pub title: String,
    pub group: Group,
    pub icon: String,
    pub accent_color: String,
}

impl From<&Category> for CategorySummary {
    fn from(c: &Category) -> Self {
        Self {
            id: c.id.clone(),
            title: c.title.clone(),
            group: c.group,
            icon: c.icon.clone(),
            accent_color: c.accent_color.clone(),
        }
    }
}
