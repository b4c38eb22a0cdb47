use serde::{Deserialize, Serialize};

/// A group of starred repos that share a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarInterestCluster {
    pub category_id: String,
    pub label: String,
    /// Human bucket: "15+ repos", "10+ repos", "5+ repos" or "N repos".
    pub count: String,
    pub examples: Vec<String>,
    pub match_count: usize,
}
