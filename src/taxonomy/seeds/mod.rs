//! Built-in category seeds.
//!
//! Each group lives in its own file as a `const` slice of [`CategorySeed`].
//! Seeds only name what differs from the defaults; everything else comes from
//! [`seed`] and is resolved into owned [`Category`](super::Category) records
//! when the registry is built.

mod ai_ml;
mod cli;
mod cloud;
mod data;
mod database;
mod editor;
mod framework;
mod gamedev;
mod industry;
mod iot;
mod language;
mod linux;
mod networking;
mod observability;
mod platform;
mod role;
mod security;
mod systems;
mod testing;
mod web;

use super::Group;

/// Stat labels used when a seed does not author its own.
pub const DEFAULT_STAT_LABELS: [&str; 4] = ["Skill", "Depth", "Breadth", "Activity"];

/// Title prefixes used when a seed does not author its own.
pub const DEFAULT_TITLE_PREFIXES: &[&str] = &["Principal", "Staff", "Senior"];

/// Compact, `const`-friendly description of one built-in category.
#[derive(Debug, Clone, Copy)]
pub struct CategorySeed {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub accent_color: &'static str,
    pub languages: &'static [&'static str],
    pub topics: &'static [&'static str],
    pub keywords: &'static [&'static str],
    pub stat_labels: Option<[&'static str; 4]>,
    pub stack_pool: &'static [&'static str],
    /// `None` means "generate from the title".
    pub taglines: Option<&'static [&'static str]>,
    pub title_prefixes: Option<&'static [&'static str]>,
}

/// A seed with no signals and default display metadata.
pub const fn seed(
    id: &'static str,
    title: &'static str,
    icon: &'static str,
    accent_color: &'static str,
) -> CategorySeed {
    CategorySeed {
        id,
        title,
        icon,
        accent_color,
        languages: &[],
        topics: &[],
        keywords: &[],
        stat_labels: None,
        stack_pool: &[],
        taglines: None,
        title_prefixes: None,
    }
}

/// Generic taglines for a category that has none authored.
pub fn default_taglines(title: &str) -> Vec<String> {
    vec![
        format!("{title} enthusiast."),
        format!("Living and breathing {}.", title.to_lowercase()),
        format!("{title} is my jam."),
    ]
}

/// All built-in seeds in registry order, grouped.
pub const BUILTIN: &[(Group, &[CategorySeed])] = &[
    (Group::Language, language::SEEDS),
    (Group::Framework, framework::SEEDS),
    (Group::Platform, platform::SEEDS),
    (Group::Cloud, cloud::SEEDS),
    (Group::Database, database::SEEDS),
    (Group::AiMl, ai_ml::SEEDS),
    (Group::Security, security::SEEDS),
    (Group::Systems, systems::SEEDS),
    (Group::Linux, linux::SEEDS),
    (Group::Cli, cli::SEEDS),
    (Group::Editor, editor::SEEDS),
    (Group::Web, web::SEEDS),
    (Group::Data, data::SEEDS),
    (Group::Testing, testing::SEEDS),
    (Group::Observability, observability::SEEDS),
    (Group::Networking, networking::SEEDS),
    (Group::Iot, iot::SEEDS),
    (Group::Gamedev, gamedev::SEEDS),
    (Group::Role, role::SEEDS),
    (Group::Industry, industry::SEEDS),
];
