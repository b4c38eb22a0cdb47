//! Per-repo signal scoring and the two aggregation profiles built on it.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::matcher::{PreparedRepo, keyword_matches, topics_match};
use crate::models::repo::RepoRecord;
use crate::taxonomy::{Category, CategoryId, Taxonomy};

pub const LANGUAGE_POINTS: f64 = 2.0;
pub const TOPIC_POINTS: f64 = 3.0;
pub const DESCRIPTION_KEYWORD_POINTS: f64 = 1.5;
pub const NAME_KEYWORD_POINTS: f64 = 1.0;

/// Minimum score for a repo to count as matching a category.
pub const EVIDENCE_FLOOR: f64 = 2.0;

/// Score one repo against one category.
pub fn score(repo: &RepoRecord, category: &Category) -> f64 {
    score_prepared(&PreparedRepo::new(repo), category)
}

/// Same as [`score`] over a repo that was already lower-cased.
pub fn score_prepared(repo: &PreparedRepo<'_>, category: &Category) -> f64 {
    let signals = &category.signals;
    let mut total = 0.0;

    if !repo.language.is_empty() && signals.languages.iter().any(|l| *l == repo.language) {
        total += LANGUAGE_POINTS;
    }

    let topic_hits = repo
        .topics
        .iter()
        .filter(|t| signals.topics.iter().any(|ct| topics_match(t, ct)))
        .count();
    total += TOPIC_POINTS * topic_hits as f64;

    for kw in &signals.keywords {
        if keyword_matches(&repo.description, kw) {
            total += DESCRIPTION_KEYWORD_POINTS;
        }
        if keyword_matches(&repo.name, kw) {
            total += NAME_KEYWORD_POINTS;
        }
    }

    total
}

pub fn is_evidence(score: f64) -> bool {
    score >= EVIDENCE_FLOOR
}

/// How owned and starred collections are weighted when summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoringProfile {
    /// Starred repos plus owned repos at 3x. Ranks general interest.
    Aggregate,
    /// Owned repos only, unweighted. Decides which personas activate.
    Activation,
}

impl ScoringProfile {
    pub fn owned_weight(self) -> f64 {
        match self {
            Self::Aggregate => 3.0,
            Self::Activation => 1.0,
        }
    }

    pub fn starred_weight(self) -> f64 {
        match self {
            Self::Aggregate => 1.0,
            Self::Activation => 0.0,
        }
    }
}

/// One value per taxonomy category, indexed by [`CategoryId`].
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryScores {
    values: Vec<f64>,
}

impl CategoryScores {
    pub fn zeroed(taxonomy: &Taxonomy) -> Self {
        Self {
            values: vec![0.0; taxonomy.len()],
        }
    }

    /// Values in taxonomy order. Mostly for tests and overlays.
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn get(&self, id: CategoryId) -> f64 {
        self.values.get(id.index()).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CategoryId, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, v)| (CategoryId::from_index(i), *v))
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn add(&mut self, id: CategoryId, value: f64) {
        if let Some(slot) = self.values.get_mut(id.index()) {
            *slot += value;
        }
    }
}

/// Sum per-repo scores into per-category totals under `profile`.
pub fn aggregate(
    taxonomy: &Taxonomy,
    owned: &[PreparedRepo<'_>],
    starred: &[PreparedRepo<'_>],
    profile: ScoringProfile,
) -> CategoryScores {
    let mut scores = CategoryScores::zeroed(taxonomy);
    let passes = [
        (starred, profile.starred_weight()),
        (owned, profile.owned_weight()),
    ];
    for (repos, weight) in passes {
        if weight == 0.0 {
            continue;
        }
        for repo in repos {
            for (id, category) in taxonomy.iter() {
                let s = score_prepared(repo, category);
                if s > 0.0 {
                    scores.add(id, s * weight);
                }
            }
        }
    }
    trace!(?profile, owned = owned.len(), starred = starred.len(), "aggregated scores");
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::matcher::prepare_all;

    fn category(id: &str) -> &'static Category {
        Taxonomy::builtin().by_id(id).unwrap()
    }

    #[test]
    fn rust_scenario_scores_language_and_topics() {
        let repo = RepoRecord::new("octo/server")
            .with_language("Rust")
            .with_topics(&["rust", "tokio"])
            .with_description("an async web framework");
        let s = score(&repo, category("rust"));
        assert!(s >= 8.0, "score was {s}");
        assert!(is_evidence(s));
    }

    #[test]
    fn score_is_never_negative() {
        let t = Taxonomy::builtin();
        let repos = [
            RepoRecord::new("a/b"),
            RepoRecord::new("a/c").with_language("COBOL"),
            RepoRecord::new("a/d").with_topics(&["", "x"]).with_description(""),
        ];
        for repo in &repos {
            for cat in t.categories() {
                assert!(score(repo, cat) >= 0.0);
            }
        }
    }

    #[test]
    fn language_match_is_case_insensitive() {
        let repo = RepoRecord::new("a/b").with_language("rUsT");
        assert_eq!(score(&repo, category("rust")), LANGUAGE_POINTS);
    }

    #[test]
    fn empty_repo_scores_zero() {
        let repo = RepoRecord::new("a/b");
        for cat in Taxonomy::builtin().categories() {
            assert_eq!(score(&repo, cat), 0.0, "category {}", cat.id);
        }
    }

    #[test]
    fn each_matching_topic_counts_once() {
        let repo = RepoRecord::new("a/b").with_topics(&["rust", "rust-lang", "python"]);
        assert_eq!(score(&repo, category("rust")), 2.0 * TOPIC_POINTS);
    }

    #[test]
    fn name_keywords_score_separately_from_description() {
        let taxonomy = Taxonomy::builtin();
        let cat = taxonomy
            .categories()
            .iter()
            .find(|c| c.signals.keywords.iter().any(|k| k.chars().count() >= 6))
            .unwrap();
        let kw = cat
            .signals
            .keywords
            .iter()
            .find(|k| k.chars().count() >= 6)
            .unwrap();
        let in_name = RepoRecord::new(format!("octo/{kw}"));
        let in_desc = RepoRecord::new("octo/zzzz").with_description(kw);
        assert!(score(&in_name, cat) >= NAME_KEYWORD_POINTS);
        assert!(score(&in_desc, cat) >= DESCRIPTION_KEYWORD_POINTS);
    }

    #[test]
    fn activation_profile_ignores_starred() {
        let t = Taxonomy::builtin();
        let starred = vec![RepoRecord::new("a/b").with_language("Rust")];
        let scores = aggregate(t, &[], &prepare_all(&starred), ScoringProfile::Activation);
        assert_eq!(scores.max(), 0.0);
    }

    #[test]
    fn aggregate_profile_triples_owned() {
        let t = Taxonomy::builtin();
        let rust = t.lookup("rust").unwrap();
        let repo = vec![RepoRecord::new("a/b").with_language("Rust")];
        let prepared = prepare_all(&repo);

        let owned = aggregate(t, &prepared, &[], ScoringProfile::Aggregate);
        let starred = aggregate(t, &[], &prepared, ScoringProfile::Aggregate);
        let activation = aggregate(t, &prepared, &[], ScoringProfile::Activation);

        assert_eq!(owned.get(rust), 3.0 * LANGUAGE_POINTS);
        assert_eq!(starred.get(rust), LANGUAGE_POINTS);
        assert_eq!(activation.get(rust), LANGUAGE_POINTS);
    }

    #[test]
    fn zeroed_covers_every_category() {
        let t = Taxonomy::builtin();
        let scores = CategoryScores::zeroed(t);
        assert_eq!(scores.len(), t.len());
        assert!(scores.iter().all(|(_, v)| v == 0.0));
    }
}
