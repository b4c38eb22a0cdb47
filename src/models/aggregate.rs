use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateKind {
    Language,
    Framework,
    Topic,
    Tooling,
}

/// One row of a top-10 chart table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregate {
    #[serde(rename = "type")]
    pub kind: AggregateKind,
    pub item: String,
    pub count: usize,
    pub from_owned: usize,
    pub from_starred: usize,
}
