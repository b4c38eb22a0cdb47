//! Experience-derived title prefixes.
//!
//! The detail generator only asks for a prefix and a label; how those are
//! derived is pluggable through [`ExperienceEstimator`].

use time::{Date, OffsetDateTime};

use crate::models::repo::{ProfileFacts, parse_timestamp};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Experience {
    /// `None` lets the card fall back to the template's own prefix.
    pub prefix: Option<String>,
    /// e.g. `"12+ years"`; empty when the account age is unknown.
    pub label: String,
}

pub trait ExperienceEstimator: Send + Sync {
    /// `confidence` is this persona's normalized score, `max_confidence` the
    /// highest among all active personas (both 0-100).
    fn estimate(&self, profile: &ProfileFacts, confidence: f64, max_confidence: f64)
    -> Experience;
}

/// Tenure thresholds: (minimum years, minimum relative confidence, prefix).
const TIERS: [(i32, f64, &str); 3] = [
    (10, 0.9, "Principal"),
    (8, 0.75, "Staff"),
    (5, 0.6, "Senior"),
];

/// Prefix from account age combined with how dominant the persona is.
#[derive(Debug, Clone, Default)]
pub struct TenureEstimator {
    as_of: Option<OffsetDateTime>,
}

impl TenureEstimator {
    /// Without a reference time no tenure is inferred.
    pub fn new(as_of: Option<OffsetDateTime>) -> Self {
        Self { as_of }
    }

    fn years(&self, profile: &ProfileFacts) -> Option<i32> {
        let as_of = self.as_of?.date();
        let created = parse_timestamp(profile.created_at.as_deref()?)?.date();
        Some(whole_years_between(created, as_of))
    }
}

impl ExperienceEstimator for TenureEstimator {
    fn estimate(
        &self,
        profile: &ProfileFacts,
        confidence: f64,
        max_confidence: f64,
    ) -> Experience {
        let Some(years) = self.years(profile) else {
            return Experience::default();
        };
        let relative = if max_confidence > 0.0 {
            confidence / max_confidence
        } else {
            0.0
        };
        let prefix = TIERS
            .iter()
            .find(|(min_years, min_rel, _)| years >= *min_years && relative >= *min_rel)
            .map(|(_, _, p)| p.to_string());
        let label = if years >= 1 {
            format!("{years}+ years")
        } else {
            "< 1 year".to_string()
        };
        Experience { prefix, label }
    }
}

fn whole_years_between(from: Date, to: Date) -> i32 {
    let mut years = to.year() - from.year();
    if (to.month() as u8, to.day()) < (from.month() as u8, from.day()) {
        years -= 1;
    }
    years.max(0)
}
