//! Starred-repo interest clustering.

use super::matcher::PreparedRepo;
use super::scorer::{is_evidence, score_prepared};
use crate::models::interest::StarInterestCluster;
use crate::taxonomy::Taxonomy;

/// A category needs at least this many matching stars to form a cluster.
pub const MIN_CLUSTER_SIZE: usize = 2;
pub const MAX_CLUSTERS: usize = 12;
const MAX_EXAMPLES: usize = 5;

/// Bucket starred repos by category, largest clusters first.
pub fn cluster_star_interests(
    starred: &[PreparedRepo<'_>],
    taxonomy: &Taxonomy,
) -> Vec<StarInterestCluster> {
    let mut clusters: Vec<StarInterestCluster> = taxonomy
        .categories()
        .iter()
        .filter_map(|category| {
            let matching: Vec<&PreparedRepo<'_>> = starred
                .iter()
                .filter(|r| is_evidence(score_prepared(r, category)))
                .collect();
            if matching.len() < MIN_CLUSTER_SIZE {
                return None;
            }
            Some(StarInterestCluster {
                category_id: category.id.clone(),
                label: category.title.clone(),
                count: count_bucket(matching.len()),
                examples: matching
                    .iter()
                    .take(MAX_EXAMPLES)
                    .map(|r| r.source.name().to_string())
                    .collect(),
                match_count: matching.len(),
            })
        })
        .collect();

    clusters.sort_by(|a, b| b.match_count.cmp(&a.match_count));
    clusters.truncate(MAX_CLUSTERS);
    clusters
}

/// Human label for a match count.
pub fn count_bucket(n: usize) -> String {
    match n {
        15.. => "15+ repos".to_string(),
        10.. => "10+ repos".to_string(),
        5.. => "5+ repos".to_string(),
        _ => format!("{n} repos"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::matcher::prepare_all;
    use crate::models::repo::RepoRecord;

    #[test]
    fn buckets() {
        assert_eq!(count_bucket(2), "2 repos");
        assert_eq!(count_bucket(4), "4 repos");
        assert_eq!(count_bucket(5), "5+ repos");
        assert_eq!(count_bucket(10), "10+ repos");
        assert_eq!(count_bucket(14), "10+ repos");
        assert_eq!(count_bucket(15), "15+ repos");
        assert_eq!(count_bucket(200), "15+ repos");
    }

    #[test]
    fn no_stars_no_clusters() {
        assert!(cluster_star_interests(&[], Taxonomy::builtin()).is_empty());
    }

    #[test]
    fn single_match_does_not_form_cluster() {
        let stars = vec![
            RepoRecord::new("a/solo").with_language("Rust"),
            RepoRecord::new("b/other"),
        ];
        let clusters = cluster_star_interests(&prepare_all(&stars), Taxonomy::builtin());
        assert!(clusters.iter().all(|c| c.category_id != "rust"));
        assert!(clusters.iter().all(|c| !c.examples.contains(&"solo".to_string())));
    }

    #[test]
    fn clusters_are_sorted_capped_and_floored() {
        let mut stars = Vec::new();
        for i in 0..16 {
            stars.push(RepoRecord::new(format!("o/rs{i}")).with_language("Rust"));
        }
        for i in 0..3 {
            stars.push(RepoRecord::new(format!("o/py{i}")).with_language("Python"));
        }
        for i in 0..6 {
            stars.push(RepoRecord::new(format!("o/go{i}")).with_language("Go"));
        }
        let clusters = cluster_star_interests(&prepare_all(&stars), Taxonomy::builtin());

        assert!(clusters.len() <= MAX_CLUSTERS);
        assert!(clusters.iter().all(|c| c.match_count >= MIN_CLUSTER_SIZE));
        assert!(
            clusters
                .windows(2)
                .all(|w| w[0].match_count >= w[1].match_count)
        );

        let rust = clusters.iter().find(|c| c.category_id == "rust").unwrap();
        assert_eq!(rust.count, "15+ repos");
        assert_eq!(rust.label, "Rustacean");
        assert_eq!(rust.examples, vec!["rs0", "rs1", "rs2", "rs3", "rs4"]);

        let py = clusters.iter().find(|c| c.category_id == "python").unwrap();
        assert_eq!(py.count, "3 repos");
        assert_eq!(py.match_count, 3);
    }
}
