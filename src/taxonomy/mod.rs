//! The category taxonomy: an immutable registry of categories and groups.
//!
//! Built once (see [`Taxonomy::builtin`]) and never mutated afterwards.
//! Categories are stored in an arena and addressed by [`CategoryId`], which is
//! also the iteration order used to break every ranking tie in the engine.

pub mod overlay;
pub mod seeds;

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use self::seeds::{CategorySeed, DEFAULT_STAT_LABELS, DEFAULT_TITLE_PREFIXES};

// ---------------------------------------------------------------------------
// Groups
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Group {
    Language,
    Framework,
    Platform,
    Cloud,
    Database,
    AiMl,
    Security,
    Systems,
    Linux,
    Cli,
    Editor,
    Web,
    Data,
    Testing,
    Observability,
    Networking,
    Iot,
    Gamedev,
    Role,
    Industry,
}

impl Group {
    pub const ALL: [Group; 20] = [
        Self::Language,
        Self::Framework,
        Self::Platform,
        Self::Cloud,
        Self::Database,
        Self::AiMl,
        Self::Security,
        Self::Systems,
        Self::Linux,
        Self::Cli,
        Self::Editor,
        Self::Web,
        Self::Data,
        Self::Testing,
        Self::Observability,
        Self::Networking,
        Self::Iot,
        Self::Gamedev,
        Self::Role,
        Self::Industry,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Language => "language",
            Self::Framework => "framework",
            Self::Platform => "platform",
            Self::Cloud => "cloud",
            Self::Database => "database",
            Self::AiMl => "ai-ml",
            Self::Security => "security",
            Self::Systems => "systems",
            Self::Linux => "linux",
            Self::Cli => "cli",
            Self::Editor => "editor",
            Self::Web => "web",
            Self::Data => "data",
            Self::Testing => "testing",
            Self::Observability => "observability",
            Self::Networking => "networking",
            Self::Iot => "iot",
            Self::Gamedev => "gamedev",
            Self::Role => "role",
            Self::Industry => "industry",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Group {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|g| g.as_str() == wanted)
            .ok_or_else(|| format!("Unknown category group: \"{s}\""))
    }
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// Handle into the taxonomy arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CategoryId(u16);

impl CategoryId {
    pub(crate) fn from_index(i: usize) -> Self {
        Self(u16::try_from(i).unwrap_or(u16::MAX))
    }

    pub fn index(self) -> usize {
        usize::from(self.0)
    }
}

/// Match signals, stored lower-cased (the form the scorer compares against).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Signals {
    pub languages: Vec<String>,
    pub topics: Vec<String>,
    pub keywords: Vec<String>,
}

impl Signals {
    fn lowered(languages: &[&str], topics: &[&str], keywords: &[&str]) -> Self {
        let lower = |xs: &[&str]| xs.iter().map(|x| x.to_lowercase()).collect::<Vec<_>>();
        Self {
            languages: lower(languages),
            topics: lower(topics),
            keywords: lower(keywords),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDisplay {
    pub stat_labels: [String; 4],
    /// Fixed stack shown on the persona card; empty means "derive from repos".
    pub stack_pool: Vec<String>,
    pub taglines: Vec<String>,
    /// May contain the empty-string sentinel ("no prefix").
    pub title_prefixes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub group: Group,
    pub icon: String,
    pub accent_color: String,
    pub signals: Signals,
    pub display: CategoryDisplay,
}

impl Category {
    fn from_seed(group: Group, s: &CategorySeed) -> Self {
        let to_owned = |xs: &[&str]| xs.iter().map(|x| x.to_string()).collect::<Vec<_>>();
        Self {
            id: s.id.to_string(),
            title: s.title.to_string(),
            group,
            icon: s.icon.to_string(),
            accent_color: s.accent_color.to_string(),
            signals: Signals::lowered(s.languages, s.topics, s.keywords),
            display: CategoryDisplay {
                stat_labels: s.stat_labels.unwrap_or(DEFAULT_STAT_LABELS).map(String::from),
                stack_pool: to_owned(s.stack_pool),
                taglines: match s.taglines {
                    Some(t) => to_owned(t),
                    None => seeds::default_taglines(s.title),
                },
                title_prefixes: to_owned(s.title_prefixes.unwrap_or(DEFAULT_TITLE_PREFIXES)),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

static BUILTIN: LazyLock<Taxonomy> = LazyLock::new(|| {
    let categories = seeds::BUILTIN
        .iter()
        .flat_map(|(group, list)| list.iter().map(move |s| Category::from_seed(*group, s)))
        .collect();
    Taxonomy::from_categories_unchecked(categories)
});

#[derive(Debug, Clone)]
pub struct Taxonomy {
    categories: Vec<Category>,
    index: AHashMap<String, CategoryId>,
}

impl Taxonomy {
    /// The built-in taxonomy, frozen on first use.
    pub fn builtin() -> &'static Taxonomy {
        &BUILTIN
    }

    /// Build a registry from categories, rejecting structural problems.
    pub fn from_categories(categories: Vec<Category>) -> Result<Self, Vec<String>> {
        let taxonomy = Self::from_categories_unchecked(categories);
        let issues = taxonomy.validate();
        if issues.is_empty() {
            Ok(taxonomy)
        } else {
            Err(issues)
        }
    }

    fn from_categories_unchecked(categories: Vec<Category>) -> Self {
        let mut index = AHashMap::with_capacity(categories.len());
        for (i, cat) in categories.iter().enumerate() {
            // First entry wins on duplicates; validate() reports them.
            index
                .entry(cat.id.clone())
                .or_insert(CategoryId::from_index(i));
        }
        Self { categories, index }
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Categories with their handles, in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (CategoryId, &Category)> {
        self.categories
            .iter()
            .enumerate()
            .map(|(i, c)| (CategoryId::from_index(i), c))
    }

    pub fn get(&self, id: CategoryId) -> &Category {
        &self.categories[id.index()]
    }

    pub fn lookup(&self, id: &str) -> Option<CategoryId> {
        self.index.get(id).copied()
    }

    pub fn by_id(&self, id: &str) -> Option<&Category> {
        self.lookup(id).map(|h| self.get(h))
    }

    pub fn in_group(&self, group: Group) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(move |c| c.group == group)
    }

    /// Number of categories per group, in [`Group::ALL`] order.
    pub fn group_counts(&self) -> Vec<(Group, usize)> {
        Group::ALL
            .into_iter()
            .map(|g| (g, self.in_group(g).count()))
            .collect()
    }

    /// Structural problems that would break scoring or card generation.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.categories.len() > usize::from(u16::MAX) {
            issues.push(format!(
                "Too many categories ({} > {})",
                self.categories.len(),
                u16::MAX
            ));
        }

        let mut seen: AHashMap<&str, usize> = AHashMap::new();
        for (i, cat) in self.categories.iter().enumerate() {
            if cat.id.trim().is_empty() {
                issues.push(format!("Category #{i}: id must not be empty"));
            }
            if let Some(first) = seen.insert(cat.id.as_str(), i) {
                issues.push(format!(
                    "Category '{}': duplicate id (first defined at #{first})",
                    cat.id
                ));
            }
            if cat.title.trim().is_empty() {
                issues.push(format!("Category '{}': title must not be empty", cat.id));
            }
            if cat.display.taglines.is_empty() {
                issues.push(format!("Category '{}': needs at least one tagline", cat.id));
            }
            if parse_hex_color(&cat.accent_color).is_none() {
                issues.push(format!(
                    "Category '{}': accent color '{}' is not #RRGGBB",
                    cat.id, cat.accent_color
                ));
            }
        }

        issues
    }
}

/// Parse `#RRGGBB` into its channels.
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_expected_shape() {
        let t = Taxonomy::builtin();
        assert_eq!(t.len(), 220);
        for (group, count) in t.group_counts() {
            assert!(count > 0, "group {group} is empty");
        }
        assert!(t.validate().is_empty(), "{:?}", t.validate());
    }

    #[test]
    fn lookup_roundtrips_through_handle() {
        let t = Taxonomy::builtin();
        let id = t.lookup("rust").unwrap();
        assert_eq!(t.get(id).title, "Rustacean");
        assert_eq!(t.get(id).group, Group::Language);
        assert!(t.lookup("no-such-category").is_none());
    }

    #[test]
    fn signals_are_lowercased() {
        let rust = Taxonomy::builtin().by_id("rust").unwrap();
        assert_eq!(rust.signals.languages, vec!["rust"]);
        let ts = Taxonomy::builtin().by_id("typescript").unwrap();
        assert_eq!(ts.signals.languages, vec!["typescript"]);
    }

    #[test]
    fn defaults_fill_missing_display_fields() {
        let fintech = Taxonomy::builtin().by_id("fintech").unwrap();
        assert_eq!(
            fintech.display.stat_labels,
            ["Skill", "Depth", "Breadth", "Activity"].map(String::from)
        );
        assert_eq!(fintech.display.taglines[0], "Fintech Dev enthusiast.");
        assert_eq!(fintech.display.taglines[1], "Living and breathing fintech dev.");
        assert_eq!(
            fintech.display.title_prefixes,
            vec!["Principal", "Staff", "Senior"]
        );
    }

    #[test]
    fn group_parses_from_kebab_case() {
        assert_eq!("ai-ml".parse::<Group>().unwrap(), Group::AiMl);
        assert_eq!(" Framework ".parse::<Group>().unwrap(), Group::Framework);
        assert!("nope".parse::<Group>().is_err());
    }

    #[test]
    fn validate_reports_duplicates_and_bad_colors() {
        let mut cats = Taxonomy::builtin().categories()[..2].to_vec();
        cats[1].id = cats[0].id.clone();
        cats[1].accent_color = "orange".to_string();
        let issues = Taxonomy::from_categories(cats).unwrap_err();
        assert!(issues.iter().any(|i| i.contains("duplicate id")));
        assert!(issues.iter().any(|i| i.contains("not #RRGGBB")));
    }

    #[test]
    fn parse_hex_color_variants() {
        assert_eq!(parse_hex_color("#FF6B35"), Some((0xFF, 0x6B, 0x35)));
        assert_eq!(parse_hex_color("FF6B35"), None);
        assert_eq!(parse_hex_color("#FFF"), None);
        assert_eq!(parse_hex_color("#GG0000"), None);
    }
}
