//! String-level match rules shared by every scorer call.

use memchr::memmem;

use crate::models::repo::RepoRecord;

/// Tokens shorter than this only match a topic exactly.
const MIN_SUBSTRING_TOPIC_LEN: usize = 3;

/// Keywords shorter than this never match.
const MIN_KEYWORD_LEN: usize = 4;

/// Keywords at least this long match as plain substrings; shorter ones need
/// word boundaries.
const PLAIN_KEYWORD_LEN: usize = 6;

/// Lower-cased view of a repo, built once and scored against every category.
#[derive(Debug, Clone)]
pub struct PreparedRepo<'a> {
    pub source: &'a RepoRecord,
    /// Empty when the repo has no language.
    pub language: String,
    pub topics: Vec<String>,
    pub description: String,
    /// Bare repo name (no owner).
    pub name: String,
}

impl<'a> PreparedRepo<'a> {
    pub fn new(source: &'a RepoRecord) -> Self {
        Self {
            source,
            language: source
                .language
                .as_deref()
                .unwrap_or_default()
                .to_lowercase(),
            topics: source.topics.iter().map(|t| t.to_lowercase()).collect(),
            description: source
                .description
                .as_deref()
                .unwrap_or_default()
                .to_lowercase(),
            name: source.name().to_lowercase(),
        }
    }
}

/// Prepare a whole collection.
pub fn prepare_all(repos: &[RepoRecord]) -> Vec<PreparedRepo<'_>> {
    repos.iter().map(PreparedRepo::new).collect()
}

/// Bidirectional substring match, exact-only for short tokens.
///
/// Keeps a category topic like `"r"` from matching every repo topic that
/// happens to contain the letter.
pub fn topics_match(repo_topic: &str, category_topic: &str) -> bool {
    if repo_topic == category_topic {
        return true;
    }
    if repo_topic.chars().count() < MIN_SUBSTRING_TOPIC_LEN
        || category_topic.chars().count() < MIN_SUBSTRING_TOPIC_LEN
    {
        return false;
    }
    repo_topic.contains(category_topic) || category_topic.contains(repo_topic)
}

/// Whether `keyword` occurs in `text` (both lower-cased).
///
/// 4-5 character keywords must stand alone, so "edge" does not hit
/// "knowledge"; any occurrence at a word boundary counts.
pub fn keyword_matches(text: &str, keyword: &str) -> bool {
    let len = keyword.chars().count();
    if len < MIN_KEYWORD_LEN {
        return false;
    }
    let haystack = text.as_bytes();
    let needle = keyword.as_bytes();
    if len >= PLAIN_KEYWORD_LEN {
        return memmem::find(haystack, needle).is_some();
    }
    memmem::find_iter(haystack, needle).any(|start| {
        let end = start + needle.len();
        let before = start.checked_sub(1).map(|i| haystack[i]);
        let after = haystack.get(end).copied();
        !before.is_some_and(|b| b.is_ascii_alphanumeric())
            && !after.is_some_and(|b| b.is_ascii_alphanumeric())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topics_exact_match_any_length() {
        assert!(topics_match("r", "r"));
        assert!(topics_match("go", "go"));
    }

    #[test]
    fn short_topics_never_substring_match() {
        assert!(!topics_match("rust", "r"));
        assert!(!topics_match("go", "golang"));
        assert!(!topics_match("ts", "tsx"));
    }

    #[test]
    fn topics_substring_both_directions() {
        assert!(topics_match("async-rust", "rust"));
        assert!(topics_match("tokio", "tokio-rs"));
        assert!(!topics_match("python", "rust"));
    }

    #[test]
    fn keyword_too_short_never_matches() {
        assert!(!keyword_matches("written in go", "go"));
        assert!(!keyword_matches("an stl container", "stl"));
    }

    #[test]
    fn short_keyword_requires_word_boundary() {
        assert!(!keyword_matches("a knowledge base", "edge"));
        assert!(keyword_matches("runs on the edge.", "edge"));
        assert!(keyword_matches("edge", "edge"));
        assert!(!keyword_matches("rusty tools", "rust"));
        assert!(keyword_matches("(rust) tools", "rust"));
    }

    #[test]
    fn short_keyword_checks_every_occurrence() {
        assert!(keyword_matches("knowledge at the edge", "edge"));
    }

    #[test]
    fn long_keyword_is_plain_substring() {
        assert!(keyword_matches("a golangish thing", "golang"));
        assert!(keyword_matches("typescript-first", "typescript"));
        assert!(!keyword_matches("", "typescript"));
    }

    #[test]
    fn prepared_repo_lowercases_and_strips_owner() {
        let repo = RepoRecord::new("Octo/Hello-World")
            .with_language("Rust")
            .with_topics(&["CLI", "Tokio"])
            .with_description("A Fast Tool");
        let p = PreparedRepo::new(&repo);
        assert_eq!(p.language, "rust");
        assert_eq!(p.topics, vec!["cli", "tokio"]);
        assert_eq!(p.description, "a fast tool");
        assert_eq!(p.name, "hello-world");
    }

    #[test]
    fn prepared_repo_missing_fields_are_empty() {
        let repo = RepoRecord::new("octo/empty");
        let p = PreparedRepo::new(&repo);
        assert!(p.language.is_empty());
        assert!(p.topics.is_empty());
        assert!(p.description.is_empty());
    }
}
