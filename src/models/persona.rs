use serde::{Deserialize, Serialize};

/// A category that cleared the activation threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivePersona {
    pub persona_id: String,
    /// Normalized confidence / 100, in [0, 1].
    pub confidence: f64,
    /// Dense 0-based rank by descending confidence.
    pub sort_order: usize,
}

/// An active persona enriched for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaCard {
    pub persona_id: String,
    pub title: String,
    pub tagline: String,
    pub icon: String,
    pub accent_color: String,
    pub bg_gradient: String,
    pub experience_label: String,
    pub years_active: String,
    pub confidence: f64,
    pub sort_order: usize,
    /// `[label, value]` pairs, one per stat label.
    pub stats: Vec<(String, u8)>,
    pub stack: Vec<String>,
    pub details: Vec<String>,
    /// Bare names of the starred repos that best support this persona.
    pub starred_repos: Vec<String>,
}
