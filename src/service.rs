use anyhow::{Result, bail};
use camino::Utf8Path;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::engine::matcher::PreparedRepo;
use crate::engine::pipeline::{self, ProfileOptions};
use crate::engine::projects;
use crate::error::{ErrorCode, PersonaError};
use crate::models::profile::ComputedProfile;
use crate::models::repo::{ProfileFacts, ProfileInput, RepoRecord, parse_timestamp};
use crate::models::score::{CategorySummary, RepoScoreResult};
use crate::taxonomy::overlay::load_overlay_from_file;
use crate::taxonomy::{Group, Taxonomy};

// ---------------------------------------------------------------------------
// AppService: unified core logic for CLI / Session / MCP
// ---------------------------------------------------------------------------

pub struct AppService {
    workspace_root: Option<PathBuf>,
    max_input_size: usize,
    taxonomy: Cow<'static, Taxonomy>,
    options: ProfileOptions,
}

/// Per-call overrides on top of the configured options.
#[derive(Debug, Clone, Default)]
pub struct ProfileOverrides {
    pub threshold: Option<u8>,
    /// Reference time; defaults to the bundle's `as_of`, then to now.
    pub as_of: Option<String>,
}

/// Where the collections of a profile come from when not bundled.
pub struct SplitInputPaths<'a> {
    pub owned: &'a str,
    pub starred: Option<&'a str>,
    pub profile: Option<&'a str>,
}

impl Default for AppService {
    fn default() -> Self {
        Self::new()
    }
}

impl AppService {
    /// Create an unrestricted service (CLI mode).
    pub fn new() -> Self {
        Self {
            workspace_root: None,
            max_input_size: 0,
            taxonomy: Cow::Borrowed(Taxonomy::builtin()),
            options: ProfileOptions::default(),
        }
    }

    /// Create a sandboxed service (MCP mode) that restricts paths to `root`.
    /// The root is canonicalized and must be a valid, non-empty directory.
    pub fn sandboxed(root: PathBuf) -> Result<Self> {
        let canonical_root = std::fs::canonicalize(&root).map_err(|_| {
            PersonaError::new(
                ErrorCode::InvalidRequest,
                format!("Invalid workspace root: {}", root.display()),
            )
        })?;
        if canonical_root.as_os_str().is_empty() {
            bail!(PersonaError::new(
                ErrorCode::InvalidRequest,
                "Workspace root must not be empty",
            ));
        }
        Ok(Self {
            workspace_root: Some(canonical_root),
            max_input_size: 100 * 1024 * 1024, // 100 MB
            ..Self::new()
        })
    }

    /// Create a sandboxed service from `REPO_PERSONA_WORKSPACE` (Session mode).
    pub fn from_env() -> Self {
        match std::env::var("REPO_PERSONA_WORKSPACE") {
            Ok(ws) if !ws.is_empty() => {
                Self::sandboxed(PathBuf::from(ws)).unwrap_or_else(|_| Self::new())
            }
            _ => Self::new(),
        }
    }

    /// Apply threshold, inactivity window and taxonomy overlay from config.
    pub fn configure(mut self, config: &Config) -> Result<Self> {
        self.options = config.profile_options();
        if let Some(path) = &config.taxonomy_path {
            let defs = load_overlay_from_file(path)?;
            let added = defs.len();
            self.taxonomy = Cow::Owned(self.taxonomy.with_overlay(defs)?);
            info!(
                path = %path.display(),
                overlay = added,
                categories = self.taxonomy.len(),
                "taxonomy overlay loaded"
            );
        }
        Ok(self)
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn options(&self) -> &ProfileOptions {
        &self.options
    }

    // -----------------------------------------------------------------------
    // Validation helpers
    // -----------------------------------------------------------------------

    /// Validate and canonicalize a file path. Returns the canonical path.
    fn validate_path(&self, path: &str) -> Result<PathBuf> {
        let canonical = std::fs::canonicalize(path).map_err(|_| {
            warn!(path = path, "validate_path: file not found");
            PersonaError::file_not_found(path)
        })?;
        if let Some(root) = &self.workspace_root
            && !canonical.starts_with(root)
        {
            warn!(
                path = path,
                "validate_path: path outside workspace boundary"
            );
            bail!(PersonaError::new(
                ErrorCode::PathOutOfBounds,
                format!("Path outside workspace boundary: {path}"),
            ));
        }
        Ok(canonical)
    }

    /// Validate and canonicalize a directory path. Returns the canonical path.
    fn validate_dir(&self, dir: &str) -> Result<PathBuf> {
        let canonical = std::fs::canonicalize(dir).map_err(|_| {
            PersonaError::new(
                ErrorCode::FileNotFound,
                format!("Directory not found: {dir}"),
            )
        })?;
        if let Some(root) = &self.workspace_root
            && !canonical.starts_with(root)
        {
            bail!(PersonaError::new(
                ErrorCode::PathOutOfBounds,
                format!("Directory outside workspace boundary: {dir}"),
            ));
        }
        Ok(canonical)
    }

    fn validate_input_size(&self, path: &str, len: usize) -> Result<()> {
        if self.max_input_size > 0 && len > self.max_input_size {
            bail!(PersonaError::new(
                ErrorCode::InvalidRequest,
                format!(
                    "Input {path} exceeds maximum size ({len} bytes > {} bytes)",
                    self.max_input_size
                ),
            ));
        }
        Ok(())
    }

    /// Read and deserialize one JSON file.
    fn read_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let canonical = self.validate_path(path)?;
        let content = std::fs::read_to_string(&canonical).map_err(|e| {
            PersonaError::new(ErrorCode::IoError, format!("Failed to read {path}: {e}"))
        })?;
        self.validate_input_size(path, content.len())?;
        serde_json::from_str(&content).map_err(|e| PersonaError::parse_error(path, e).into())
    }

    // -----------------------------------------------------------------------
    // Input loading
    // -----------------------------------------------------------------------

    /// Load a `{profile, owned, starred, as_of}` bundle.
    pub fn load_bundle(&self, path: &str) -> Result<ProfileInput> {
        let input: ProfileInput = self.read_json(path)?;
        debug!(
            path = path,
            owned = input.owned.len(),
            starred = input.starred.len(),
            "bundle loaded"
        );
        Ok(input)
    }

    /// Assemble a bundle from separate repo-array and profile files.
    pub fn load_split(&self, paths: &SplitInputPaths<'_>) -> Result<ProfileInput> {
        let owned: Vec<RepoRecord> = self.read_json(paths.owned)?;
        let starred: Vec<RepoRecord> = match paths.starred {
            Some(p) => self.read_json(p)?,
            None => Vec::new(),
        };
        let profile: ProfileFacts = match paths.profile {
            Some(p) => self.read_json(p)?,
            None => ProfileFacts::default(),
        };
        Ok(ProfileInput {
            profile,
            owned,
            starred,
            as_of: None,
        })
    }

    pub fn load_repo(&self, path: &str) -> Result<RepoRecord> {
        self.read_json(path)
    }

    /// Bundle files under `dir`, .gitignore aware, sorted.
    pub fn collect_bundles(&self, dir: &str, glob: Option<&str>) -> Result<Vec<String>> {
        let canonical_dir = self.validate_dir(dir)?;
        let mut files = collect_json_files(&canonical_dir, glob)?;
        files.sort();
        debug!(dir = dir, glob = ?glob, files = files.len(), "bundles collected");
        Ok(files)
    }

    // -----------------------------------------------------------------------
    // Core operations
    // -----------------------------------------------------------------------

    /// Run the engine over an already loaded bundle.
    pub fn compute_profile(
        &self,
        mut input: ProfileInput,
        overrides: &ProfileOverrides,
    ) -> Result<ComputedProfile> {
        let mut options = self.options;
        if let Some(t) = overrides.threshold {
            if t > 100 {
                bail!(PersonaError::new(
                    ErrorCode::InvalidRequest,
                    format!("threshold must be 0..=100, got {t}"),
                ));
            }
            options.threshold = t;
        }

        if let Some(as_of) = &overrides.as_of {
            input.as_of = Some(as_of.clone());
        }
        if let Some(s) = input.as_of.as_deref()
            && parse_timestamp(s).is_none()
        {
            bail!(PersonaError::invalid_input(format!(
                "as_of is not an RFC 3339 timestamp or YYYY-MM-DD date: {s}"
            )));
        }
        if input.as_of.is_none() {
            input.as_of = Some(now_rfc3339()?);
        }

        debug!(
            login = %input.profile.login,
            owned = input.owned.len(),
            starred = input.starred.len(),
            threshold = options.threshold,
            as_of = ?input.as_of,
            "compute_profile called"
        );
        let profile = pipeline::compute_profile(&input, &self.taxonomy, &options);
        info!(
            login = %profile.login,
            personas = ?profile.personas.iter().map(|p| p.persona_id.as_str()).collect::<Vec<_>>(),
            projects = profile.projects.len(),
            interests = profile.interests.len(),
            "compute_profile completed"
        );
        Ok(profile)
    }

    /// Load a bundle file and compute its profile.
    pub fn profile_from_file(
        &self,
        path: &str,
        overrides: &ProfileOverrides,
    ) -> Result<ComputedProfile> {
        let input = self.load_bundle(path)?;
        self.compute_profile(input, overrides)
    }

    /// Category scores for one repo, best first.
    ///
    /// Only evidence categories unless `all` is set.
    pub fn score_repo(&self, repo: &RepoRecord, all: bool) -> RepoScoreResult {
        debug!(repo = %repo.full_name, all = all, "score_repo called");
        let prepared = PreparedRepo::new(repo);
        let mut matches = projects::score_repo(&prepared, &self.taxonomy);
        if !all {
            matches.retain(|m| m.evidence);
        }
        RepoScoreResult {
            repo: repo.full_name.clone(),
            matches,
        }
    }

    /// Category listing, optionally narrowed to one group.
    pub fn list_taxonomy(&self, group: Option<&str>) -> Result<Vec<CategorySummary>> {
        let group = match group {
            Some(g) => Some(
                g.parse::<Group>()
                    .map_err(|e| PersonaError::new(ErrorCode::InvalidRequest, e))?,
            ),
            None => None,
        };
        Ok(self
            .taxonomy
            .categories()
            .iter()
            .filter(|c| group.is_none_or(|g| c.group == g))
            .map(CategorySummary::from)
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn now_rfc3339() -> Result<String> {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|e| PersonaError::new(ErrorCode::IoError, e.to_string()).into())
}

/// Collect `*.json` files using the `ignore` crate (.gitignore aware).
fn collect_json_files(dir: &Path, glob_pattern: Option<&str>) -> Result<Vec<String>> {
    use ignore::WalkBuilder;

    let mut builder = WalkBuilder::new(dir);
    builder.hidden(true).git_ignore(true).git_global(true);

    if let Some(pattern) = glob_pattern {
        let mut overrides = ignore::overrides::OverrideBuilder::new(dir);
        overrides.add(pattern)?;
        builder.overrides(overrides.build()?);
    }

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let Some(path) = entry.path().to_str() else {
            continue;
        };
        if Utf8Path::new(path).extension() == Some("json") {
            files.push(path.to_string());
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(dir: &Path, name: &str, content: &str) -> String {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path.to_string_lossy().to_string()
    }

    const BUNDLE: &str = r#"{
        "profile": {"login": "octo", "created_at": "2014-01-01T00:00:00Z"},
        "owned": [{"full_name": "octo/engine", "language": "Rust", "topics": ["rust", "tokio"], "stargazers_count": 5}],
        "starred": [],
        "as_of": "2026-01-01"
    }"#;

    #[test]
    fn profile_from_bundle_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write(dir.path(), "octo.json", BUNDLE);
        let out = AppService::new()
            .profile_from_file(&path, &ProfileOverrides::default())
            .unwrap();
        assert_eq!(out.login, "octo");
        assert_eq!(out.personas[0].persona_id, "rust");
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let err = AppService::new()
            .load_bundle("/definitely/not/here.json")
            .unwrap_err();
        let pe = err.downcast_ref::<PersonaError>().unwrap();
        assert_eq!(pe.code, ErrorCode::FileNotFound);
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write(dir.path(), "bad.json", "{ not json");
        let err = AppService::new().load_bundle(&path).unwrap_err();
        assert_eq!(
            err.downcast_ref::<PersonaError>().unwrap().code,
            ErrorCode::ParseError
        );
    }

    #[test]
    fn bad_overrides_are_rejected() {
        let service = AppService::new();
        let too_high = ProfileOverrides {
            threshold: Some(101),
            ..ProfileOverrides::default()
        };
        let err = service
            .compute_profile(ProfileInput::default(), &too_high)
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<PersonaError>().unwrap().code,
            ErrorCode::InvalidRequest
        );

        let bad_date = ProfileOverrides {
            as_of: Some("next tuesday".into()),
            ..ProfileOverrides::default()
        };
        let err = service
            .compute_profile(ProfileInput::default(), &bad_date)
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<PersonaError>().unwrap().code,
            ErrorCode::InvalidInput
        );
    }

    #[test]
    fn split_inputs_assemble_a_bundle() {
        let dir = tempfile::TempDir::new().unwrap();
        let owned = write(dir.path(), "owned.json", r#"[{"full_name": "me/a"}]"#);
        let starred = write(
            dir.path(),
            "starred.json",
            r#"[{"full_name": "x/b"}, {"full_name": "x/c"}]"#,
        );
        let input = AppService::new()
            .load_split(&SplitInputPaths {
                owned: &owned,
                starred: Some(&starred),
                profile: None,
            })
            .unwrap();
        assert_eq!(input.owned.len(), 1);
        assert_eq!(input.starred.len(), 2);
        assert!(input.profile.login.is_empty());
    }

    #[test]
    fn sandbox_rejects_outside_paths() {
        let root = tempfile::TempDir::new().unwrap();
        let outside = tempfile::TempDir::new().unwrap();
        let path = write(outside.path(), "x.json", BUNDLE);
        let service = AppService::sandboxed(root.path().to_path_buf()).unwrap();
        let err = service.load_bundle(&path).unwrap_err();
        assert_eq!(
            err.downcast_ref::<PersonaError>().unwrap().code,
            ErrorCode::PathOutOfBounds
        );
    }

    #[test]
    fn score_repo_filters_evidence() {
        let service = AppService::new();
        let repo = RepoRecord::new("a/b").with_language("Rust");
        let evidence = service.score_repo(&repo, false);
        assert!(evidence.matches.iter().all(|m| m.evidence));
        assert!(evidence.matches.iter().any(|m| m.category_id == "rust"));
        let all = service.score_repo(&repo, true);
        assert!(all.matches.len() >= evidence.matches.len());
    }

    #[test]
    fn list_taxonomy_by_group() {
        let service = AppService::new();
        assert_eq!(service.list_taxonomy(None).unwrap().len(), 220);
        let langs = service.list_taxonomy(Some("language")).unwrap();
        assert!(langs.iter().all(|c| c.group == Group::Language));
        assert!(service.list_taxonomy(Some("nonsense")).is_err());
    }

    #[test]
    fn configure_loads_overlay() {
        let dir = tempfile::TempDir::new().unwrap();
        let overlay = dir.path().join("extra.yaml");
        fs::write(
            &overlay,
            "- id: homelab\n  title: Homelabber\n  group: linux\n  topics: [homelab, self-hosted]\n",
        )
        .unwrap();
        let config = Config {
            taxonomy_path: Some(overlay),
            persona_threshold: 50,
            ..Config::default()
        };
        let service = AppService::new().configure(&config).unwrap();
        assert_eq!(service.taxonomy().len(), 221);
        assert!(service.taxonomy().by_id("homelab").is_some());
        assert_eq!(service.options().threshold, 50);
    }

    #[test]
    fn collect_bundles_keeps_json_only() {
        let dir = tempfile::TempDir::new().unwrap();
        write(dir.path(), "b.json", "{}");
        write(dir.path(), "a.json", "{}");
        write(dir.path(), "notes.txt", "");
        let files = AppService::new()
            .collect_bundles(&dir.path().to_string_lossy(), None)
            .unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.json"));
    }
}
