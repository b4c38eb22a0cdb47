//! Persona activation and card enrichment.
//!
//! [`select_personas`] thresholds owned-only confidences. [`PersonaRegistry`]
//! resolves each activated id to exactly one [`PersonaDefinition`], and
//! [`PersonaContext::enrich`] turns it into a display card.

use std::borrow::Cow;

use ahash::{AHashMap, AHashSet};
use tracing::debug;

use super::experience::ExperienceEstimator;
use super::legacy::{self, LegacyTemplate};
use super::matcher::{PreparedRepo, topics_match};
use super::scorer::{CategoryScores, is_evidence, score_prepared};
use super::tally::Tally;
use crate::models::persona::{ActivePersona, PersonaCard};
use crate::models::repo::{ProfileFacts, parse_timestamp};
use crate::taxonomy::{Category, CategoryId, Taxonomy, parse_hex_color};

/// Default minimum normalized confidence for a persona to activate.
pub const PERSONA_THRESHOLD: u8 = 45;

/// Per-slot offsets applied to the confidence when generating stats.
const STAT_OFFSETS: [f64; 4] = [-5.0, 3.0, -8.0, 5.0];
const STAT_MIN: f64 = 30.0;
const STAT_MAX: f64 = 100.0;

const MAX_POOL_STACK: usize = 10;
const MAX_DERIVED_STACK: usize = 12;
const MAX_PRIMARY_LANGUAGES: usize = 3;
const MAX_STARRED_EVIDENCE: usize = 8;

const PLACEHOLDER_ICON: &str = "?";
const PLACEHOLDER_ACCENT: &str = "#888888";
const PLACEHOLDER_GRADIENT: &str = "linear-gradient(135deg, #111 0%, #222 100%)";

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Categories whose confidence reaches `threshold`, best first.
///
/// Ties keep taxonomy order. `sort_order` is the dense rank.
pub fn select_personas(
    confidence: &CategoryScores,
    taxonomy: &Taxonomy,
    threshold: u8,
) -> Vec<ActivePersona> {
    let threshold = f64::from(threshold);
    let mut hits: Vec<(CategoryId, f64)> = confidence
        .iter()
        .filter(|(_, c)| *c > 0.0 && *c >= threshold)
        .collect();
    hits.sort_by(|a, b| b.1.total_cmp(&a.1));

    hits.into_iter()
        .enumerate()
        .map(|(rank, (id, c))| ActivePersona {
            persona_id: taxonomy.get(id).id.clone(),
            confidence: c / 100.0,
            sort_order: rank,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub enum PersonaDefinition {
    /// Hand-authored copy, optionally backed by a taxonomy category of the
    /// same id for evidence.
    Authored {
        template: &'static LegacyTemplate,
        category: Option<CategoryId>,
    },
    Derived(CategoryId),
}

impl PersonaDefinition {
    pub fn category(&self) -> Option<CategoryId> {
        match self {
            Self::Authored { category, .. } => *category,
            Self::Derived(id) => Some(*id),
        }
    }
}

/// Every resolvable persona id, authored entries taking priority.
#[derive(Debug, Clone)]
pub struct PersonaRegistry {
    entries: AHashMap<String, PersonaDefinition>,
}

impl PersonaRegistry {
    pub fn new(taxonomy: &Taxonomy) -> Self {
        let mut entries = AHashMap::with_capacity(taxonomy.len() + legacy::TEMPLATES.len());
        for (id, category) in taxonomy.iter() {
            entries.insert(category.id.clone(), PersonaDefinition::Derived(id));
        }
        for template in legacy::TEMPLATES {
            entries.insert(
                template.id.to_string(),
                PersonaDefinition::Authored {
                    template,
                    category: taxonomy.lookup(template.id),
                },
            );
        }
        Self { entries }
    }

    pub fn resolve(&self, id: &str) -> Option<&PersonaDefinition> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Display copy shared by both definition kinds.
struct CardCopy<'a> {
    title: &'a str,
    title_prefixes: Vec<&'a str>,
    taglines: Vec<&'a str>,
    icon: &'a str,
    accent_color: &'a str,
    bg_gradient: Cow<'a, str>,
    stat_labels: [&'a str; 4],
}

impl<'a> CardCopy<'a> {
    fn authored(t: &'static LegacyTemplate) -> Self {
        Self {
            title: t.title,
            title_prefixes: t.title_prefixes.to_vec(),
            taglines: t.taglines.to_vec(),
            icon: t.icon,
            accent_color: t.accent_color,
            bg_gradient: Cow::Borrowed(t.bg_gradient),
            stat_labels: t.stat_labels,
        }
    }

    fn derived(c: &'a Category) -> Self {
        let d = &c.display;
        Self {
            title: &c.title,
            title_prefixes: d.title_prefixes.iter().map(String::as_str).collect(),
            taglines: d.taglines.iter().map(String::as_str).collect(),
            icon: &c.icon,
            accent_color: &c.accent_color,
            bg_gradient: Cow::Owned(accent_to_gradient(&c.accent_color)),
            stat_labels: [
                d.stat_labels[0].as_str(),
                d.stat_labels[1].as_str(),
                d.stat_labels[2].as_str(),
                d.stat_labels[3].as_str(),
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// Enrichment
// ---------------------------------------------------------------------------

/// Everything card generation reads, shared across all active personas.
pub struct PersonaContext<'a> {
    pub taxonomy: &'a Taxonomy,
    pub registry: &'a PersonaRegistry,
    /// Normalized owned-only confidences.
    pub confidence: &'a CategoryScores,
    pub owned: &'a [PreparedRepo<'a>],
    pub starred: &'a [PreparedRepo<'a>],
    pub profile: &'a ProfileFacts,
    pub estimator: &'a dyn ExperienceEstimator,
    /// Highest confidence (0-100) among the active personas.
    pub max_confidence: f64,
}

impl PersonaContext<'_> {
    pub fn enrich(&self, persona: &ActivePersona) -> PersonaCard {
        let Some(def) = self.registry.resolve(&persona.persona_id) else {
            debug!(persona = %persona.persona_id, "unknown persona id, using placeholder");
            return placeholder_card(persona);
        };
        let category = def.category().map(|id| self.taxonomy.get(id));
        let copy = match def {
            PersonaDefinition::Authored { template, .. } => CardCopy::authored(template),
            PersonaDefinition::Derived(id) => CardCopy::derived(self.taxonomy.get(*id)),
        };
        let confidence = def.category().map_or(0.0, |id| self.confidence.get(id));

        let experience = self
            .estimator
            .estimate(self.profile, confidence, self.max_confidence);
        let prefix = experience
            .prefix
            .or_else(|| {
                copy.title_prefixes
                    .iter()
                    .find(|p| !p.is_empty())
                    .map(|p| p.to_string())
            })
            .unwrap_or_default();
        let title = if prefix.is_empty() {
            copy.title.to_string()
        } else {
            format!("{prefix} {}", copy.title)
        };

        let tagline = if copy.taglines.is_empty() {
            String::new()
        } else {
            copy.taglines[persona.sort_order % copy.taglines.len()].to_string()
        };

        let stack = match def {
            PersonaDefinition::Authored { template, .. } if !template.stack_pool.is_empty() => {
                cap_pool(template.stack_pool.iter().copied())
            }
            _ => match category {
                Some(c) if !c.display.stack_pool.is_empty() => {
                    cap_pool(c.display.stack_pool.iter().map(String::as_str))
                }
                Some(c) => self.derive_stack(c),
                None => Vec::new(),
            },
        };

        let (details, starred_repos) = match category {
            Some(c) => (self.details(c), self.relevant_stars(c)),
            None => (Vec::new(), Vec::new()),
        };

        PersonaCard {
            persona_id: persona.persona_id.clone(),
            title,
            tagline,
            icon: copy.icon.to_string(),
            accent_color: copy.accent_color.to_string(),
            bg_gradient: copy.bg_gradient.into_owned(),
            experience_label: experience.label,
            years_active: years_active(self.profile),
            confidence: persona.confidence,
            sort_order: persona.sort_order,
            stats: generate_stats(&copy.stat_labels, confidence),
            stack,
            details,
            starred_repos,
        }
    }

    fn all_repos(&self) -> impl Iterator<Item = &PreparedRepo<'_>> {
        self.owned.iter().chain(self.starred.iter())
    }

    /// Languages and topics of the matching repos, most frequent first.
    fn derive_stack(&self, category: &Category) -> Vec<String> {
        let mut languages: Tally = Tally::new();
        let mut topics: Tally = Tally::new();
        for repo in self.all_repos() {
            if !is_evidence(score_prepared(repo, category)) {
                continue;
            }
            if let Some(lang) = repo.source.language.as_deref()
                && category.signals.languages.contains(&repo.language)
            {
                languages.bump(lang);
            }
            for topic in &repo.topics {
                if category.signals.topics.iter().any(|ct| topics_match(topic, ct)) {
                    topics.bump(topic);
                }
            }
        }

        let mut combined: Vec<(String, usize)> = languages.into_ranked();
        combined.extend(
            topics
                .into_ranked()
                .into_iter()
                .map(|(t, n)| (capitalize(&t), n)),
        );
        combined.sort_by(|a, b| b.1.cmp(&a.1));

        let mut seen = AHashSet::new();
        let mut stack = Vec::new();
        for (name, _) in combined {
            if !seen.insert(name.to_lowercase()) {
                continue;
            }
            stack.push(name);
            if stack.len() >= MAX_DERIVED_STACK {
                break;
            }
        }
        stack
    }

    fn details(&self, category: &Category) -> Vec<String> {
        let evidence = |repos: &[PreparedRepo<'_>]| {
            repos
                .iter()
                .filter(|r| is_evidence(score_prepared(r, category)))
                .count()
        };
        let mut details = Vec::new();

        let owned = evidence(self.owned);
        if owned > 0 {
            details.push(format!("{owned} owned {} in this domain", repos_word(owned)));
        }
        let starred = evidence(self.starred);
        if starred > 0 {
            details.push(format!(
                "{starred} starred {} tracked in this area",
                repos_word(starred)
            ));
        }

        let mut languages: Tally = Tally::new();
        for repo in self.all_repos() {
            if let Some(lang) = repo.source.language.as_deref()
                && category.signals.languages.contains(&repo.language)
            {
                languages.bump(lang);
            }
        }
        let top: Vec<String> = languages
            .into_ranked()
            .into_iter()
            .take(MAX_PRIMARY_LANGUAGES)
            .map(|(l, _)| l)
            .collect();
        if !top.is_empty() {
            details.push(format!("Primary languages: {}", top.join(", ")));
        }

        details
    }

    /// Bare names of the best-scoring starred repos for `category`.
    fn relevant_stars(&self, category: &Category) -> Vec<String> {
        let mut scored: Vec<(&str, f64)> = self
            .starred
            .iter()
            .map(|r| (r.source.name(), score_prepared(r, category)))
            .filter(|(_, s)| is_evidence(*s))
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored
            .into_iter()
            .take(MAX_STARRED_EVIDENCE)
            .map(|(name, _)| name.to_string())
            .collect()
    }
}

/// Enrich every active persona, preserving order.
pub fn generate_persona_cards(
    ctx: &PersonaContext<'_>,
    personas: &[ActivePersona],
) -> Vec<PersonaCard> {
    personas.iter().map(|p| ctx.enrich(p)).collect()
}

fn placeholder_card(persona: &ActivePersona) -> PersonaCard {
    PersonaCard {
        persona_id: persona.persona_id.clone(),
        title: persona.persona_id.clone(),
        tagline: String::new(),
        icon: PLACEHOLDER_ICON.to_string(),
        accent_color: PLACEHOLDER_ACCENT.to_string(),
        bg_gradient: PLACEHOLDER_GRADIENT.to_string(),
        experience_label: String::new(),
        years_active: String::new(),
        confidence: persona.confidence,
        sort_order: persona.sort_order,
        stats: Vec::new(),
        stack: Vec::new(),
        details: Vec::new(),
        starred_repos: Vec::new(),
    }
}

/// Four stat values derived from one confidence with fixed slot offsets.
pub fn generate_stats(labels: &[&str], confidence: f64) -> Vec<(String, u8)> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let offset = STAT_OFFSETS[i % STAT_OFFSETS.len()];
            let value = (confidence + offset).round().clamp(STAT_MIN, STAT_MAX);
            (label.to_string(), value as u8)
        })
        .collect()
}

/// A dark two-stop gradient tinted by `hex`.
pub fn accent_to_gradient(hex: &str) -> String {
    let Some((r, g, b)) = parse_hex_color(hex) else {
        return PLACEHOLDER_GRADIENT.to_string();
    };
    let shade = |factor: f64| {
        let c = |v: u8| (f64::from(v) * factor).floor() as u8;
        format!("#{:02x}{:02x}{:02x}", c(r), c(g), c(b))
    };
    format!(
        "linear-gradient(135deg, {} 0%, {} 100%)",
        shade(0.06),
        shade(0.12)
    )
}

fn years_active(profile: &ProfileFacts) -> String {
    profile
        .created_at
        .as_deref()
        .and_then(parse_timestamp)
        .map(|ts| format!("{} - Present", ts.year()))
        .unwrap_or_default()
}

fn cap_pool<'a>(pool: impl Iterator<Item = &'a str>) -> Vec<String> {
    pool.take(MAX_POOL_STACK).map(str::to_string).collect()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn repos_word(n: usize) -> &'static str {
    if n == 1 { "repo" } else { "repos" }
}
