//! YAML category overlays merged on top of the built-in taxonomy.
//!
//! ```yaml
//! - id: tauri
//!   title: Tauri Dev
//!   group: framework
//!   accent_color: "#FFC131"
//!   languages: [Rust]
//!   topics: [tauri, tauri-app]
//!   keywords: [tauri]
//! ```

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use super::seeds::{self, DEFAULT_STAT_LABELS, DEFAULT_TITLE_PREFIXES};
use super::{Category, CategoryDisplay, Group, Signals, Taxonomy};
use crate::error::{ErrorCode, PersonaError};

/// One category as written in an overlay file.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryDef {
    pub id: String,
    pub title: String,
    pub group: Group,
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default = "default_accent")]
    pub accent_color: String,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub stat_labels: Option<[String; 4]>,
    #[serde(default)]
    pub stack_pool: Vec<String>,
    #[serde(default)]
    pub taglines: Option<Vec<String>>,
    #[serde(default)]
    pub title_prefixes: Option<Vec<String>>,
}

fn default_icon() -> String {
    "?".to_string()
}

fn default_accent() -> String {
    "#888888".to_string()
}

impl CategoryDef {
    pub fn into_category(self) -> Category {
        let lower = |xs: Vec<String>| xs.into_iter().map(|x| x.to_lowercase()).collect();
        let taglines = self
            .taglines
            .unwrap_or_else(|| seeds::default_taglines(&self.title));
        Category {
            signals: Signals {
                languages: lower(self.languages),
                topics: lower(self.topics),
                keywords: lower(self.keywords),
            },
            display: CategoryDisplay {
                stat_labels: self
                    .stat_labels
                    .unwrap_or_else(|| DEFAULT_STAT_LABELS.map(String::from)),
                stack_pool: self.stack_pool,
                taglines,
                title_prefixes: self.title_prefixes.unwrap_or_else(|| {
                    DEFAULT_TITLE_PREFIXES.iter().map(|p| p.to_string()).collect()
                }),
            },
            id: self.id,
            title: self.title,
            group: self.group,
            icon: self.icon,
            accent_color: self.accent_color,
        }
    }
}

/// Parse overlay YAML (a list of categories).
pub fn parse_overlay(yaml: &str) -> Result<Vec<CategoryDef>> {
    let defs: Vec<CategoryDef> = serde_yaml::from_str(yaml).map_err(|e| {
        PersonaError::new(
            ErrorCode::InvalidTaxonomy,
            format!("Invalid taxonomy overlay: {e}"),
        )
    })?;
    Ok(defs)
}

/// Load overlay categories from a YAML file.
pub fn load_overlay_from_file(path: &Path) -> Result<Vec<CategoryDef>> {
    if !path.exists() {
        bail!(PersonaError::file_not_found(&path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read taxonomy overlay: {}", path.display()))?;
    parse_overlay(&content)
}

impl Taxonomy {
    /// A new registry with `defs` merged in: known ids are replaced in place,
    /// new ids are appended in file order.
    pub fn with_overlay(&self, defs: Vec<CategoryDef>) -> Result<Taxonomy> {
        let mut categories = self.categories.clone();
        for def in defs {
            let cat = def.into_category();
            match self.lookup(&cat.id) {
                Some(existing) => categories[existing.index()] = cat,
                None => categories.push(cat),
            }
        }
        Taxonomy::from_categories(categories).map_err(|issues| {
            PersonaError::new(
                ErrorCode::InvalidTaxonomy,
                format!("Invalid taxonomy overlay: {}", issues.join("; ")),
            )
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OVERLAY: &str = r##"
- id: tauri
  title: Tauri Dev
  group: framework
  accent_color: "#FFC131"
  languages: [Rust]
  topics: [tauri, Tauri-App]
  keywords: [tauri]
- id: rust
  title: Crab Person
  group: language
  accent_color: "#FF6B35"
  languages: [Rust]
  taglines: ["Still fearless."]
"##;

    #[test]
    fn overlay_appends_and_replaces() {
        let base = Taxonomy::builtin();
        let merged = base.with_overlay(parse_overlay(OVERLAY).unwrap()).unwrap();

        assert_eq!(merged.len(), base.len() + 1);
        let tauri = merged.by_id("tauri").unwrap();
        assert_eq!(tauri.group, Group::Framework);
        assert_eq!(tauri.signals.topics, vec!["tauri", "tauri-app"]);
        assert_eq!(tauri.display.taglines[2], "Tauri Dev is my jam.");

        // Replaced in place: same handle, new title.
        assert_eq!(merged.lookup("rust"), base.lookup("rust"));
        assert_eq!(merged.by_id("rust").unwrap().title, "Crab Person");
        assert_eq!(merged.by_id("rust").unwrap().display.taglines, vec!["Still fearless."]);
    }

    #[test]
    fn overlay_rejects_empty_taglines() {
        let yaml = r##"
- id: broken
  title: Broken
  group: role
  taglines: []
"##;
        let err = Taxonomy::builtin()
            .with_overlay(parse_overlay(yaml).unwrap())
            .unwrap_err();
        let pe = err.downcast_ref::<PersonaError>().unwrap();
        assert_eq!(pe.code, ErrorCode::InvalidTaxonomy);
        assert!(pe.message.contains("broken"));
    }

    #[test]
    fn overlay_rejects_unknown_group() {
        let yaml = "- id: x\n  title: X\n  group: astrology\n";
        assert!(parse_overlay(yaml).is_err());
    }

    #[test]
    fn load_missing_file_is_file_not_found() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = load_overlay_from_file(&dir.path().join("none.yaml")).unwrap_err();
        let pe = err.downcast_ref::<PersonaError>().unwrap();
        assert_eq!(pe.code, ErrorCode::FileNotFound);
    }
}
