use serde::{Deserialize, Serialize};

use super::aggregate::Aggregate;
use super::interest::StarInterestCluster;
use super::persona::PersonaCard;
use super::project::ProjectCard;

/// One spoke of the skill radar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarAxis {
    pub category_id: String,
    pub label: String,
    pub value: u8,
    pub color: String,
}

/// The full engine output for one account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedProfile {
    pub login: String,
    /// Digest of the input summary; changes when the underlying data does.
    pub fingerprint: String,
    pub personas: Vec<PersonaCard>,
    pub projects: Vec<ProjectCard>,
    pub radar: Vec<RadarAxis>,
    pub interests: Vec<StarInterestCluster>,
    pub aggregates: Vec<Aggregate>,
}
