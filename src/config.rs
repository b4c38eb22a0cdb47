//! Configuration loading and generation.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::engine::personas::PERSONA_THRESHOLD;
use crate::engine::pipeline::{DEFAULT_INACTIVE_YEARS, ProfileOptions};

const THRESHOLD_ENV: &str = "REPO_PERSONA_THRESHOLD";
const INACTIVE_YEARS_ENV: &str = "REPO_PERSONA_INACTIVE_YEARS";

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Enable debug logging to file
    pub debug: bool,

    /// Path to log directory
    pub log_path: PathBuf,

    /// Tracing filter used for the log file when `RUST_LOG` is unset
    pub log_level: String,

    /// Minimum normalized confidence (0-100) for a persona to activate
    pub persona_threshold: u8,

    /// Owned repos without a push in this many years are ignored (0 = keep all)
    pub inactive_years: u32,

    /// Optional YAML file with extra or replacement categories
    pub taxonomy_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            log_path: default_log_path(),
            log_level: "debug".to_string(),
            persona_threshold: PERSONA_THRESHOLD,
            inactive_years: DEFAULT_INACTIVE_YEARS,
            taxonomy_path: None,
        }
    }
}

impl Config {
    /// Engine options derived from this configuration.
    pub fn profile_options(&self) -> ProfileOptions {
        ProfileOptions {
            threshold: self.persona_threshold.min(100),
            inactive_years: (self.inactive_years > 0).then_some(self.inactive_years),
        }
    }

    /// Apply `REPO_PERSONA_*` overrides. Unparseable values are ignored.
    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(v) = var(THRESHOLD_ENV).and_then(|v| v.trim().parse().ok()) {
            self.persona_threshold = v;
        }
        if let Some(v) = var(INACTIVE_YEARS_ENV).and_then(|v| v.trim().parse().ok()) {
            self.inactive_years = v;
        }
    }
}

/// Default log path: ~/.config/repo-persona/logs
fn default_log_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("repo-persona")
        .join("logs")
}

/// Configuration service.
pub struct ConfigService;

impl ConfigService {
    /// Get the default configuration file path.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("repo-persona")
            .join("config.toml")
    }

    /// Load configuration from file, then apply environment overrides.
    ///
    /// If `path` is `None`, uses the default path.
    /// If the file doesn't exist, returns default configuration.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let mut config = Self::load_file(path)?;
        config.apply_env(|k| std::env::var(k).ok());
        Ok(config)
    }

    fn load_file(path: Option<&Path>) -> Result<Config> {
        let path = path.map(PathBuf::from).unwrap_or_else(Self::default_path);
        let config_dir = path.parent();

        if !path.exists() {
            // Return defaults, don't auto-create
            let mut config = Config::default();
            if let Some(dir) = config_dir {
                config.log_path = dir.join("logs");
            }
            return Ok(config);
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        // If log_path was not explicitly set, use config file's directory/logs
        if config.log_path == default_log_path()
            && let Some(dir) = config_dir
        {
            config.log_path = dir.join("logs");
        }

        // Relative taxonomy paths are resolved against the config file
        if let Some(tp) = &config.taxonomy_path
            && tp.is_relative()
            && let Some(dir) = config_dir
        {
            config.taxonomy_path = Some(dir.join(tp));
        }

        Ok(config)
    }

    /// Generate default configuration file at the default path.
    pub fn generate_default() -> Result<()> {
        Self::generate_at(&Self::default_path())
    }

    /// Generate default configuration file at the specified path.
    pub fn generate_at(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = Self::default_config_content();
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Generate default configuration content with comments.
    fn default_config_content() -> String {
        format!(
            r#"# repo-persona configuration file

# Enable debug logging to file (default: false)
debug = false

# Path to log directory (default: ~/.config/repo-persona/logs)
# log_path = "~/.config/repo-persona/logs"

# Log filter when RUST_LOG is unset (e.g. "info", "repo_persona=trace")
log_level = "debug"

# Minimum normalized confidence (0-100) for a persona to activate
# Overridden by {THRESHOLD_ENV} and --threshold
persona_threshold = {PERSONA_THRESHOLD}

# Ignore owned repos without a push in this many years (0 = keep all)
# Overridden by {INACTIVE_YEARS_ENV}
inactive_years = {DEFAULT_INACTIVE_YEARS}

# YAML file with extra categories; same ids replace built-ins
# taxonomy_path = "categories.yaml"
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_ends_with_config_toml() {
        let path = ConfigService::default_path();
        assert!(path.ends_with("repo-persona/config.toml"));
    }

    #[test]
    fn test_generate_at_creates_parent_dirs() {
        let dir = tempfile::TempDir::new().unwrap();
        let config_path = dir.path().join("nested").join("dir").join("config.toml");

        ConfigService::generate_at(&config_path).unwrap();

        assert!(config_path.exists());
    }

    #[test]
    fn test_generated_file_parses_to_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");

        ConfigService::generate_at(&config_path).unwrap();
        let config = ConfigService::load_file(Some(&config_path)).unwrap();

        assert!(!config.debug);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.persona_threshold, 45);
        assert_eq!(config.inactive_years, 3);
        assert!(config.taxonomy_path.is_none());
        assert_eq!(config.log_path, dir.path().join("logs"));
    }

    #[test]
    fn test_load_returns_defaults_when_missing() {
        let dir = tempfile::TempDir::new().unwrap();
        let config_path = dir.path().join("nonexistent.toml");

        let config = ConfigService::load_file(Some(&config_path)).unwrap();

        assert!(!config_path.exists());
        assert!(!config.debug);
        assert_eq!(config.profile_options(), ProfileOptions::default());
    }

    #[test]
    fn test_load_invalid_toml_returns_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let config_path = dir.path().join("bad.toml");

        fs::write(&config_path, "not valid [[[").unwrap();

        assert!(ConfigService::load(Some(&config_path)).is_err());
    }

    #[test]
    fn test_load_custom_values() {
        let dir = tempfile::TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(
            &config_path,
            "debug = true\nlog_path = \"/tmp/persona-logs\"\npersona_threshold = 60\ninactive_years = 0\ntaxonomy_path = \"extra.yaml\"\n",
        )
        .unwrap();

        let config = ConfigService::load_file(Some(&config_path)).unwrap();
        assert!(config.debug);
        assert_eq!(config.log_path, PathBuf::from("/tmp/persona-logs"));
        assert_eq!(config.taxonomy_path, Some(dir.path().join("extra.yaml")));

        let opts = config.profile_options();
        assert_eq!(opts.threshold, 60);
        assert_eq!(opts.inactive_years, None);
    }

    #[test]
    fn test_env_overrides_and_bad_values() {
        let mut config = Config::default();
        config.apply_env(|k| match k {
            THRESHOLD_ENV => Some(" 70 ".to_string()),
            INACTIVE_YEARS_ENV => Some("soon".to_string()),
            _ => None,
        });
        assert_eq!(config.persona_threshold, 70);
        assert_eq!(config.inactive_years, 3);
    }

    #[test]
    fn test_threshold_is_capped() {
        let config = Config {
            persona_threshold: 250,
            ..Config::default()
        };
        assert_eq!(config.profile_options().threshold, 100);
    }
}
