//! The whole classification flow for one account.

use std::time::Instant;

use time::{Duration, OffsetDateTime};
use tracing::debug;

use super::aggregates::compute_aggregates;
use super::experience::{ExperienceEstimator, TenureEstimator};
use super::interests::cluster_star_interests;
use super::matcher::prepare_all;
use super::normalize::normalize;
use super::personas::{
    PERSONA_THRESHOLD, PersonaContext, PersonaRegistry, generate_persona_cards, select_personas,
};
use super::projects::generate_project_cards;
use super::radar::radar_axes;
use super::scorer::{ScoringProfile, aggregate};
use crate::models::profile::ComputedProfile;
use crate::models::repo::{ProfileInput, RepoRecord, parse_timestamp};
use crate::taxonomy::Taxonomy;

pub const DEFAULT_INACTIVE_YEARS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileOptions {
    /// Minimum normalized confidence for a persona.
    pub threshold: u8,
    /// Owned repos not pushed within this many years before `as_of` are
    /// ignored. `None` keeps everything.
    pub inactive_years: Option<u32>,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self {
            threshold: PERSONA_THRESHOLD,
            inactive_years: Some(DEFAULT_INACTIVE_YEARS),
        }
    }
}

/// Run every branch of the engine with the default experience estimator.
pub fn compute_profile(
    input: &ProfileInput,
    taxonomy: &Taxonomy,
    options: &ProfileOptions,
) -> ComputedProfile {
    let as_of = input.as_of.as_deref().and_then(parse_timestamp);
    compute_profile_with(input, taxonomy, options, &TenureEstimator::new(as_of))
}

pub fn compute_profile_with(
    input: &ProfileInput,
    taxonomy: &Taxonomy,
    options: &ProfileOptions,
    estimator: &dyn ExperienceEstimator,
) -> ComputedProfile {
    let start = Instant::now();
    let as_of = input.as_of.as_deref().and_then(parse_timestamp);
    let owned = active_owned(&input.owned, as_of, options.inactive_years);
    let starred: Vec<RepoRecord> = input.starred.iter().filter(|r| !r.disabled).cloned().collect();

    let owned_p = prepare_all(&owned);
    let starred_p = prepare_all(&starred);

    // Personas reflect what the account builds; the radar what it follows too.
    let activation = normalize(&aggregate(
        taxonomy,
        &owned_p,
        &starred_p,
        ScoringProfile::Activation,
    ));
    let combined = normalize(&aggregate(
        taxonomy,
        &owned_p,
        &starred_p,
        ScoringProfile::Aggregate,
    ));

    let active = select_personas(&activation, taxonomy, options.threshold);
    let max_confidence = active
        .iter()
        .filter_map(|p| taxonomy.lookup(&p.persona_id))
        .map(|id| activation.get(id))
        .fold(0.0, f64::max);

    let registry = PersonaRegistry::new(taxonomy);
    let ctx = PersonaContext {
        taxonomy,
        registry: &registry,
        confidence: &activation,
        owned: &owned_p,
        starred: &starred_p,
        profile: &input.profile,
        estimator,
        max_confidence,
    };
    let personas = generate_persona_cards(&ctx, &active);
    let projects = generate_project_cards(&owned_p, taxonomy);
    let interests = cluster_star_interests(&starred_p, taxonomy);
    let radar = radar_axes(&combined, taxonomy);
    let aggregates = compute_aggregates(&owned, &starred, taxonomy);

    debug!(
        login = %input.profile.login,
        owned = owned.len(),
        owned_dropped = input.owned.len() - owned.len(),
        starred = starred.len(),
        personas = personas.len(),
        projects = projects.len(),
        interests = interests.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "profile computed"
    );

    ComputedProfile {
        login: input.profile.login.clone(),
        fingerprint: fingerprint(input),
        personas,
        projects,
        radar,
        interests,
        aggregates,
    }
}

/// Owned repos that still say something about the account.
///
/// Forks, archived and disabled repos are dropped, as are repos last pushed
/// more than `inactive_years` before `as_of`. Without `as_of` only the flags
/// are checked.
pub fn active_owned(
    repos: &[RepoRecord],
    as_of: Option<OffsetDateTime>,
    inactive_years: Option<u32>,
) -> Vec<RepoRecord> {
    let cutoff = as_of.zip(inactive_years).map(|(t, y)| years_before(t, y));
    repos
        .iter()
        .filter(|r| !r.fork && !r.archived && !r.disabled)
        .filter(|r| match (cutoff, r.pushed_at.as_deref().and_then(parse_timestamp)) {
            (Some(cutoff), Some(pushed)) => pushed >= cutoff,
            _ => true,
        })
        .cloned()
        .collect()
}

fn years_before(t: OffsetDateTime, years: u32) -> OffsetDateTime {
    let year = i32::try_from(years)
        .ok()
        .and_then(|y| t.year().checked_sub(y));
    year.and_then(|y| t.replace_year(y).ok())
        .unwrap_or_else(|| t - Duration::days(365 * i64::from(years)))
}

/// Stable digest of the input summary, for change detection downstream.
pub fn fingerprint(input: &ProfileInput) -> String {
    let p = &input.profile;
    let summary = format!(
        "{}:{}:{}:{}:{}",
        p.login,
        p.public_repos,
        p.followers,
        input.owned.len(),
        input.starred.len()
    );
    blake3::hash(summary.as_bytes()).to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::repo::ProfileFacts;

    fn input(owned: Vec<RepoRecord>, starred: Vec<RepoRecord>) -> ProfileInput {
        ProfileInput {
            profile: ProfileFacts {
                login: "octo".into(),
                created_at: Some("2012-05-01T00:00:00Z".into()),
                public_repos: 12,
                ..ProfileFacts::default()
            },
            owned,
            starred,
            as_of: Some("2026-05-01T00:00:00Z".into()),
        }
    }

    #[test]
    fn empty_account_yields_empty_profile() {
        let out = compute_profile(
            &input(vec![], vec![]),
            Taxonomy::builtin(),
            &ProfileOptions::default(),
        );
        assert!(out.personas.is_empty());
        assert!(out.interests.is_empty());
        assert!(out.projects.is_empty());
        assert!(out.radar.is_empty());
        assert!(out.aggregates.is_empty());
        assert_eq!(out.login, "octo");
    }

    #[test]
    fn owned_repos_drive_personas_stars_do_not() {
        let owned = vec![
            RepoRecord::new("octo/engine")
                .with_language("Rust")
                .with_topics(&["rust", "tokio"])
                .with_stars(50),
        ];
        let starred = (0..5)
            .map(|i| RepoRecord::new(format!("py/lib{i}")).with_language("Python"))
            .collect();
        let out = compute_profile(
            &input(owned, starred),
            Taxonomy::builtin(),
            &ProfileOptions::default(),
        );

        assert_eq!(out.personas[0].persona_id, "rust");
        assert!(out.personas.iter().all(|p| p.persona_id != "python"));
        assert_eq!(out.personas[0].title, "Principal Rustacean");
        assert!(out.interests.iter().any(|c| c.category_id == "python"));
        assert!(out.radar.iter().any(|a| a.category_id == "python"));
        assert_eq!(out.projects[0].name, "engine");
    }

    #[test]
    fn identical_inputs_identical_outputs() {
        let owned = vec![
            RepoRecord::new("octo/a").with_language("Go").with_topics(&["cli", "docker"]),
            RepoRecord::new("octo/b").with_language("Rust").with_topics(&["wasm"]),
        ];
        let starred = vec![RepoRecord::new("x/y").with_language("Go")];
        let i = input(owned, starred);
        let t = Taxonomy::builtin();
        let opts = ProfileOptions::default();
        assert_eq!(compute_profile(&i, t, &opts), compute_profile(&i, t, &opts));
    }

    #[test]
    fn threshold_option_is_respected() {
        let owned = vec![
            RepoRecord::new("octo/a").with_language("Rust").with_topics(&["rust"]),
            RepoRecord::new("octo/b").with_language("Go"),
        ];
        let t = Taxonomy::builtin();
        let strict = ProfileOptions {
            threshold: 100,
            ..ProfileOptions::default()
        };
        let out = compute_profile(&input(owned, vec![]), t, &strict);
        assert!(out.personas.iter().all(|p| p.confidence >= 1.0));
    }

    #[test]
    fn inactive_forked_and_archived_repos_are_dropped() {
        let mut stale = RepoRecord::new("o/stale").with_language("Rust");
        stale.pushed_at = Some("2020-01-01T00:00:00Z".into());
        let mut fresh = RepoRecord::new("o/fresh").with_language("Rust");
        fresh.pushed_at = Some("2025-12-01T00:00:00Z".into());
        let mut fork = RepoRecord::new("o/fork");
        fork.fork = true;
        let mut archived = RepoRecord::new("o/archived");
        archived.archived = true;
        let undated = RepoRecord::new("o/undated");
        let repos = vec![stale, fresh, fork, archived, undated];

        let as_of = parse_timestamp("2026-05-01");
        let kept: Vec<String> = active_owned(&repos, as_of, Some(3))
            .into_iter()
            .map(|r| r.full_name)
            .collect();
        assert_eq!(kept, vec!["o/fresh", "o/undated"]);

        let no_clock = active_owned(&repos, None, Some(3));
        assert_eq!(no_clock.len(), 3);
    }

    #[test]
    fn years_before_handles_leap_day() {
        let leap = parse_timestamp("2024-02-29").unwrap();
        let cutoff = years_before(leap, 3);
        assert!(cutoff < leap);
        assert_eq!(cutoff.year(), 2021);
    }

    #[test]
    fn fingerprint_tracks_summary() {
        let a = input(vec![RepoRecord::new("o/a")], vec![]);
        let mut b = a.clone();
        assert_eq!(fingerprint(&a), fingerprint(&b));
        b.profile.followers = 1;
        assert_ne!(fingerprint(&a), fingerprint(&b));
        assert_eq!(fingerprint(&a).len(), 64);
    }
}
