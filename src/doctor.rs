use serde::Serialize;

use crate::engine::legacy::TEMPLATES;
use crate::engine::personas::PersonaRegistry;
use crate::taxonomy::{Group, Taxonomy};

#[derive(Debug, Serialize)]
pub struct DoctorReport {
    pub version: String,
    pub categories: usize,
    pub groups: Vec<GroupStatus>,
    pub legacy_templates: usize,
    /// Distinct persona ids that resolve to a card definition.
    pub personas: usize,
    pub healthy: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct GroupStatus {
    pub group: Group,
    pub categories: usize,
}

/// Run the doctor check: structural validation plus coverage counts.
pub fn run_doctor(taxonomy: &Taxonomy) -> DoctorReport {
    let mut issues = taxonomy.validate();

    let groups: Vec<GroupStatus> = taxonomy
        .group_counts()
        .into_iter()
        .map(|(group, categories)| GroupStatus { group, categories })
        .collect();
    for g in groups.iter().filter(|g| g.categories == 0) {
        issues.push(format!("Group '{}' has no categories", g.group.as_str()));
    }

    DoctorReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        categories: taxonomy.len(),
        groups,
        legacy_templates: TEMPLATES.len(),
        personas: PersonaRegistry::new(taxonomy).len(),
        healthy: issues.is_empty(),
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_taxonomy_is_healthy() {
        let report = run_doctor(Taxonomy::builtin());
        assert!(report.healthy, "{:?}", report.issues);
        assert_eq!(report.categories, 220);
        assert_eq!(report.groups.len(), Group::ALL.len());
        assert_eq!(report.legacy_templates, 10);
        assert!(report.personas >= report.categories);
    }
}
