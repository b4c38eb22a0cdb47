//! Owned-repo project cards.

use smallvec::SmallVec;

use super::matcher::PreparedRepo;
use super::scorer::{is_evidence, score_prepared};
use crate::models::project::ProjectCard;
use crate::models::score::CategoryMatch;
use crate::taxonomy::{CategoryId, Taxonomy};

const MAX_TECH: usize = 8;

/// Most repos hit only a handful of categories.
type Hits = SmallVec<[(CategoryId, f64); 8]>;

/// Every category with a positive score for `repo`, best first.
///
/// Ties keep taxonomy order.
pub fn score_repo(repo: &PreparedRepo<'_>, taxonomy: &Taxonomy) -> Vec<CategoryMatch> {
    ranked_hits(repo, taxonomy, |s| s > 0.0)
        .into_iter()
        .map(|(id, score)| {
            let c = taxonomy.get(id);
            CategoryMatch {
                category_id: c.id.clone(),
                title: c.title.clone(),
                score,
                evidence: is_evidence(score),
            }
        })
        .collect()
}

/// Ids of the categories `repo` is evidence for, best first.
pub fn map_repo_to_categories(repo: &PreparedRepo<'_>, taxonomy: &Taxonomy) -> Vec<String> {
    ranked_hits(repo, taxonomy, is_evidence)
        .into_iter()
        .map(|(id, _)| taxonomy.get(id).id.clone())
        .collect()
}

fn ranked_hits(repo: &PreparedRepo<'_>, taxonomy: &Taxonomy, keep: impl Fn(f64) -> bool) -> Hits {
    let mut hits: Hits = taxonomy
        .iter()
        .map(|(id, c)| (id, score_prepared(repo, c)))
        .filter(|(_, s)| keep(*s))
        .collect();
    hits.sort_by(|a, b| b.1.total_cmp(&a.1));
    hits
}

/// Cards for owned repos with at least one category, most starred first.
pub fn generate_project_cards(owned: &[PreparedRepo<'_>], taxonomy: &Taxonomy) -> Vec<ProjectCard> {
    let mut cards: Vec<ProjectCard> = owned
        .iter()
        .filter_map(|repo| {
            let categories = map_repo_to_categories(repo, taxonomy);
            if categories.is_empty() {
                return None;
            }
            let src = repo.source;
            Some(ProjectCard {
                name: src.name().to_string(),
                description: src.description.clone().unwrap_or_default(),
                url: src
                    .html_url
                    .clone()
                    .unwrap_or_else(|| format!("https://github.com/{}", src.full_name)),
                tech: tech_list(repo),
                categories,
                language: src.language.clone().unwrap_or_default(),
                stars: src.stargazers_count,
                forks: src.forks_count,
            })
        })
        .collect();
    cards.sort_by(|a, b| b.stars.cmp(&a.stars));
    cards
}

/// Language first, then title-cased topics that add something new.
fn tech_list(repo: &PreparedRepo<'_>) -> Vec<String> {
    let mut tech = Vec::with_capacity(MAX_TECH);
    if let Some(lang) = repo.source.language.as_deref().filter(|l| !l.is_empty()) {
        tech.push(lang.to_string());
    }
    for topic in &repo.source.topics {
        if tech.len() >= MAX_TECH {
            break;
        }
        let display = title_case(topic);
        if !tech.contains(&display) && display.to_lowercase() != repo.language {
            tech.push(display);
        }
    }
    tech
}

/// `"my-topic"` becomes `"My Topic"`.
pub fn title_case(slug: &str) -> String {
    slug.split('-')
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::matcher::{PreparedRepo, prepare_all};
    use crate::models::repo::RepoRecord;

    #[test]
    fn title_case_slugs() {
        assert_eq!(title_case("my-topic"), "My Topic");
        assert_eq!(title_case("rust"), "Rust");
        assert_eq!(title_case("web-assembly-tools"), "Web Assembly Tools");
    }

    #[test]
    fn mapping_is_deterministic_and_best_first() {
        let repo = RepoRecord::new("me/server")
            .with_language("Rust")
            .with_topics(&["rust", "tokio", "docker"]);
        let t = Taxonomy::builtin();
        let p = PreparedRepo::new(&repo);
        let first = map_repo_to_categories(&p, t);
        let second = map_repo_to_categories(&p, t);
        assert_eq!(first, second);
        assert_eq!(first[0], "rust");

        let scored = score_repo(&p, t);
        assert!(scored.windows(2).all(|w| w[0].score >= w[1].score));
        let evidence: Vec<&str> = scored
            .iter()
            .filter(|m| m.evidence)
            .map(|m| m.category_id.as_str())
            .collect();
        assert_eq!(evidence, first.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn cards_sorted_by_stars() {
        let owned = vec![
            RepoRecord::new("me/small").with_language("Rust").with_stars(10),
            RepoRecord::new("me/big").with_language("Go").with_stars(50),
        ];
        let cards = generate_project_cards(&prepare_all(&owned), Taxonomy::builtin());
        let names: Vec<&str> = cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["big", "small"]);
    }

    #[test]
    fn repos_without_categories_are_skipped() {
        let owned = vec![RepoRecord::new("me/x")];
        assert!(generate_project_cards(&prepare_all(&owned), Taxonomy::builtin()).is_empty());
    }

    #[test]
    fn card_fields_and_tech_list() {
        let mut repo = RepoRecord::new("me/tool")
            .with_language("Rust")
            .with_topics(&["rust", "command-line", "cli", "a", "b", "c", "d", "e", "f"])
            .with_description("Handy tool");
        repo.forks_count = 3;
        let owned = vec![repo];
        let cards = generate_project_cards(&prepare_all(&owned), Taxonomy::builtin());
        let card = &cards[0];
        assert_eq!(card.url, "https://github.com/me/tool");
        assert_eq!(card.description, "Handy tool");
        assert_eq!(card.language, "Rust");
        assert_eq!(card.forks, 3);
        assert_eq!(
            card.tech,
            vec!["Rust", "Command Line", "Cli", "A", "B", "C", "D", "E"]
        );
        assert!(card.categories.contains(&"rust".to_string()));
    }
}
