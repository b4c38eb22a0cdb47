use serde::{Deserialize, Deserializer, Serialize};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// A repository as handed over by the data-fetching side.
///
/// Provenance (owned vs. starred) is carried by which collection the record
/// sits in, never by a field. Missing or `null` fields are empty evidence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepoRecord {
    pub full_name: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub topics: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub stargazers_count: u64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub forks_count: u64,
    #[serde(default)]
    pub html_url: Option<String>,
    /// Only read by the active-repo filter.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub fork: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub archived: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pushed_at: Option<String>,
}

impl RepoRecord {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            ..Self::default()
        }
    }

    pub fn with_language(mut self, language: &str) -> Self {
        self.language = Some(language.to_string());
        self
    }

    pub fn with_topics(mut self, topics: &[&str]) -> Self {
        self.topics = topics.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_stars(mut self, stars: u64) -> Self {
        self.stargazers_count = stars;
        self
    }

    /// The repo name without its owning account.
    pub fn name(&self) -> &str {
        self.full_name.rsplit('/').next().unwrap_or(&self.full_name)
    }
}

/// Account facts, only interpreted by the experience estimator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileFacts {
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    /// RFC 3339 account creation time.
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub followers: u64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub following: u64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub public_repos: u64,
}

/// Everything one profile computation needs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileInput {
    #[serde(default)]
    pub profile: ProfileFacts,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub owned: Vec<RepoRecord>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub starred: Vec<RepoRecord>,
    /// Reference time for tenure and inactivity; the caller supplies "now".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of: Option<String>,
}

/// Parse an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (midnight UTC).
pub fn parse_timestamp(s: &str) -> Option<OffsetDateTime> {
    let s = s.trim();
    if let Ok(ts) = OffsetDateTime::parse(s, &Rfc3339) {
        return Some(ts);
    }
    Date::parse(s, format_description!("[year]-[month]-[day]"))
        .ok()
        .map(|d| d.midnight().assume_utc())
}

fn null_as_empty<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(d)?.unwrap_or_default())
}

fn null_as_zero<'de, D>(d: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(d)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_github_shape_with_nulls() {
        let json = r#"{
            "full_name": "octo/hello",
            "language": null,
            "topics": null,
            "description": null,
            "stargazers_count": 12,
            "forks_count": null,
            "html_url": "https://github.com/octo/hello",
            "owner": {"login": "octo"},
            "archived": true
        }"#;
        let repo: RepoRecord = serde_json::from_str(json).unwrap();
        assert_eq!(repo.name(), "hello");
        assert!(repo.language.is_none());
        assert!(repo.topics.is_empty());
        assert_eq!(repo.stargazers_count, 12);
        assert_eq!(repo.forks_count, 0);
        assert!(repo.archived);
    }

    #[test]
    fn name_without_owner() {
        assert_eq!(RepoRecord::new("plain").name(), "plain");
        assert_eq!(RepoRecord::new("a/b").name(), "b");
    }

    #[test]
    fn parse_timestamp_accepts_both_forms() {
        let full = parse_timestamp("2011-01-25T18:44:36Z").unwrap();
        assert_eq!(full.year(), 2011);
        let day = parse_timestamp("2024-06-01").unwrap();
        assert_eq!(day.month(), time::Month::June);
        assert!(parse_timestamp("yesterday").is_none());
    }
}
