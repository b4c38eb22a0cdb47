//! Top-10 language, framework, topic and tooling tables.
//!
//! Plain counting, independent of the weighted scorer.

use ahash::{AHashMap, AHashSet};

use super::tally::Tally;
use crate::models::aggregate::{Aggregate, AggregateKind};
use crate::models::repo::RepoRecord;
use crate::taxonomy::{Group, Taxonomy};

pub const TOP_N: usize = 10;

/// Generic topics left out of the topic table.
pub const EXCLUDED_TOPICS: &[&str] = &[
    "hacktoberfest",
    "awesome-list",
    "awesome",
    "list",
    "collection",
    "curated-list",
    "resource",
    "resources",
    "learning",
    "tutorial",
    "example",
    "examples",
    "sample",
    "demo",
    "template",
    "boilerplate",
];

const FRAMEWORK_GROUPS: &[Group] = &[Group::Framework];
const TOOLING_GROUPS: &[Group] = &[Group::Platform, Group::Cli, Group::Editor, Group::Observability];

#[derive(Debug, Clone, Copy, Default)]
struct Split {
    owned: usize,
    starred: usize,
}

impl Split {
    fn total(&self) -> usize {
        self.owned + self.starred
    }

    fn bump(&mut self, owned: bool) {
        if owned {
            self.owned += 1;
        } else {
            self.starred += 1;
        }
    }
}

/// Topic to category titles, for the given groups.
struct LabelTable {
    by_topic: AHashMap<String, Vec<String>>,
}

impl LabelTable {
    fn build(taxonomy: &Taxonomy, groups: &[Group]) -> Self {
        let mut by_topic: AHashMap<String, Vec<String>> = AHashMap::new();
        for group in groups {
            for category in taxonomy.in_group(*group) {
                for topic in &category.signals.topics {
                    let labels = by_topic.entry(topic.clone()).or_default();
                    if !labels.contains(&category.title) {
                        labels.push(category.title.clone());
                    }
                }
            }
        }
        Self { by_topic }
    }

    /// Distinct labels hit by a repo's topics, in first-hit order.
    fn labels_for<'a>(&'a self, repo: &RepoRecord) -> Vec<&'a str> {
        let mut hit: Vec<&str> = Vec::new();
        let mut seen = AHashSet::new();
        for topic in &repo.topics {
            let Some(labels) = self.by_topic.get(&topic.to_lowercase()) else {
                continue;
            };
            for label in labels {
                if seen.insert(label.as_str()) {
                    hit.push(label);
                }
            }
        }
        hit
    }
}

/// All four tables, in language, framework, topic, tooling order.
pub fn compute_aggregates(
    owned: &[RepoRecord],
    starred: &[RepoRecord],
    taxonomy: &Taxonomy,
) -> Vec<Aggregate> {
    let sources = || {
        owned
            .iter()
            .map(|r| (r, true))
            .chain(starred.iter().map(|r| (r, false)))
    };

    let mut languages: Tally<Split> = Tally::new();
    let mut topics: Tally<Split> = Tally::new();
    for (repo, is_owned) in sources() {
        if let Some(lang) = repo.language.as_deref().filter(|l| !l.is_empty()) {
            languages.entry(lang).bump(is_owned);
        }
        for topic in &repo.topics {
            if !EXCLUDED_TOPICS.contains(&topic.to_lowercase().as_str()) {
                topics.entry(topic).bump(is_owned);
            }
        }
    }

    let frameworks = count_labels(&LabelTable::build(taxonomy, FRAMEWORK_GROUPS), sources());
    let tooling = count_labels(&LabelTable::build(taxonomy, TOOLING_GROUPS), sources());

    let mut out = Vec::with_capacity(TOP_N * 4);
    out.extend(top(AggregateKind::Language, languages));
    out.extend(top(AggregateKind::Framework, frameworks));
    out.extend(top(AggregateKind::Topic, topics));
    out.extend(top(AggregateKind::Tooling, tooling));
    out
}

fn count_labels<'r>(
    table: &LabelTable,
    repos: impl Iterator<Item = (&'r RepoRecord, bool)>,
) -> Tally<Split> {
    let mut counts: Tally<Split> = Tally::new();
    for (repo, is_owned) in repos {
        for label in table.labels_for(repo) {
            counts.entry(label).bump(is_owned);
        }
    }
    counts
}

fn top(kind: AggregateKind, tally: Tally<Split>) -> impl Iterator<Item = Aggregate> {
    tally
        .into_ranked_by(Split::total)
        .into_iter()
        .take(TOP_N)
        .map(move |(item, split)| Aggregate {
            kind,
            item,
            count: split.total(),
            from_owned: split.owned,
            from_starred: split.starred,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn of_kind(all: &[Aggregate], kind: AggregateKind) -> Vec<&Aggregate> {
        all.iter().filter(|a| a.kind == kind).collect()
    }

    #[test]
    fn empty_inputs_give_empty_tables() {
        assert!(compute_aggregates(&[], &[], Taxonomy::builtin()).is_empty());
    }

    #[test]
    fn languages_split_owned_and_starred() {
        let owned = vec![
            RepoRecord::new("me/a").with_language("Rust"),
            RepoRecord::new("me/b").with_language("Rust"),
            RepoRecord::new("me/c"),
        ];
        let starred = vec![
            RepoRecord::new("x/a").with_language("Go"),
            RepoRecord::new("x/b").with_language("Rust"),
        ];
        let all = compute_aggregates(&owned, &starred, Taxonomy::builtin());
        let langs = of_kind(&all, AggregateKind::Language);
        assert_eq!(langs.len(), 2);
        assert_eq!(langs[0].item, "Rust");
        assert_eq!((langs[0].count, langs[0].from_owned, langs[0].from_starred), (3, 2, 1));
        assert_eq!(langs[1].item, "Go");
    }

    #[test]
    fn generic_topics_are_excluded() {
        let owned = vec![
            RepoRecord::new("me/a").with_topics(&["awesome-list", "Tutorial", "wasm"]),
            RepoRecord::new("me/b").with_topics(&["wasm", "demo"]),
        ];
        let all = compute_aggregates(&owned, &[], Taxonomy::builtin());
        let topics = of_kind(&all, AggregateKind::Topic);
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].item, "wasm");
        assert_eq!(topics[0].count, 2);
    }

    #[test]
    fn framework_labels_count_once_per_repo() {
        let starred = vec![RepoRecord::new("x/a").with_topics(&["axum", "tokio", "tower"])];
        let all = compute_aggregates(&[], &starred, Taxonomy::builtin());
        let frameworks = of_kind(&all, AggregateKind::Framework);
        let axum_title = &Taxonomy::builtin()
            .in_group(Group::Framework)
            .find(|c| c.signals.topics.iter().any(|t| t == "axum"))
            .unwrap()
            .title;
        let row = frameworks.iter().find(|a| &a.item == axum_title).unwrap();
        assert_eq!((row.count, row.from_starred), (1, 1));
    }

    #[test]
    fn tables_cap_at_ten() {
        let owned: Vec<RepoRecord> = (0..15)
            .map(|i| RepoRecord::new(format!("me/r{i}")).with_topics(&[&format!("topic-{i}")]))
            .collect();
        let all = compute_aggregates(&owned, &[], Taxonomy::builtin());
        let topics = of_kind(&all, AggregateKind::Topic);
        assert_eq!(topics.len(), TOP_N);
        assert_eq!(topics[0].item, "topic-0");
    }

    #[test]
    fn tooling_uses_tooling_groups() {
        let table = LabelTable::build(Taxonomy::builtin(), TOOLING_GROUPS);
        let docker = Taxonomy::builtin().by_id("docker").unwrap();
        let repo = RepoRecord::new("x/y").with_topics(&["DOCKER"]);
        let labels = table.labels_for(&repo);
        assert!(labels.contains(&docker.title.as_str()));
    }
}
