use std::path::Path;

use regex::Regex;
use tracing::debug;

use crate::parsing::ParseError;
use crate::utils::validation::check_record_limit;

/// Markers that flag a sign-up line as junk rather than a name
pub const DEFAULT_JUNK_MARKERS: &[&str] = &["delete", "spam", "mess", "pedo"];

/// Cleans free-text sign-up lines into bare names
pub struct SignupCleaner {
    annotation: Regex,

    /// Lowercased junk markers
    junk_markers: Vec<String>,
}

impl SignupCleaner {
    pub fn new(junk_markers: &[String]) -> Self {
        Self {
            // Parenthesised notes such as "(realm)" or "(Longbow)"
            annotation: Regex::new(r"\s*\([^)]*\)\s*").expect("annotation pattern is valid"),
            junk_markers: junk_markers
                .iter()
                .map(|m| m.trim().to_lowercase())
                .filter(|m| !m.is_empty())
                .collect(),
        }
    }

    /// Strip annotations and surrounding whitespace.
    /// Returns `None` for lines that are empty or contain a junk marker.
    pub fn clean(&self, line: &str) -> Option<String> {
        let cleaned = self.annotation.replace_all(line, "");
        let cleaned = cleaned.trim();
        if cleaned.is_empty() {
            return None;
        }

        let lowered = cleaned.to_lowercase();
        if let Some(marker) = self
            .junk_markers
            .iter()
            .find(|m| lowered.contains(m.as_str()))
        {
            debug!(line = %line, marker = %marker, "dropping junk sign-up line");
            return None;
        }

        Some(cleaned.to_string())
    }
}

impl Default for SignupCleaner {
    fn default() -> Self {
        let markers: Vec<String> = DEFAULT_JUNK_MARKERS
            .iter()
            .map(|s| (*s).to_string())
            .collect();
        Self::new(&markers)
    }
}

/// Parse a sign-up list file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::TooManyRecords` if the limit is exceeded.
pub fn parse_signups_file(path: &Path, cleaner: &SignupCleaner) -> Result<Vec<String>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    let names = parse_signups_text(&content, cleaner)?;
    debug!(path = %path.display(), count = names.len(), "parsed sign-up list");
    Ok(names)
}

/// Parse sign-up text, one name per line
///
/// # Errors
///
/// Returns `ParseError::TooManyRecords` if the number of names exceeds the maximum.
pub fn parse_signups_text(text: &str, cleaner: &SignupCleaner) -> Result<Vec<String>, ParseError> {
    let mut names = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some(name) = cleaner.clean(line) else {
            continue;
        };

        if check_record_limit(names.len()).is_some() {
            return Err(ParseError::TooManyRecords(names.len() + 1));
        }

        names.push(name);
    }

    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::MAX_RECORDS;

    #[test]
    fn test_clean_strips_annotations() {
        let cleaner = SignupCleaner::default();
        assert_eq!(cleaner.clean("Alice (realm)").as_deref(), Some("Alice"));
        assert_eq!(cleaner.clean("  Bob(Longbow)  ").as_deref(), Some("Bob"));
        assert_eq!(cleaner.clean("(alt) Carol").as_deref(), Some("Carol"));
        assert_eq!(cleaner.clean("(only a note)"), None);
    }

    #[test]
    fn test_clean_drops_junk() {
        let cleaner = SignupCleaner::default();
        assert_eq!(cleaner.clean("please DELETE me"), None);
        assert_eq!(cleaner.clean("spammer"), None);
        assert_eq!(cleaner.clean("Messalina"), None);
        assert_eq!(cleaner.clean("Dave").as_deref(), Some("Dave"));
    }

    #[test]
    fn test_custom_junk_markers() {
        let cleaner = SignupCleaner::new(&["test".to_string(), String::new()]);
        assert_eq!(cleaner.clean("TestUser"), None);
        assert_eq!(cleaner.clean("Messalina").as_deref(), Some("Messalina"));
    }

    #[test]
    fn test_parse_signups_text() {
        let text = "alice (main)\n\n  Bob  \nspam entry\nCarol\n";
        let names = parse_signups_text(text, &SignupCleaner::default()).unwrap();
        assert_eq!(names, ["alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_record_limit() {
        let cleaner = SignupCleaner::default();

        let at_limit = "name\n".repeat(MAX_RECORDS);
        assert_eq!(
            parse_signups_text(&at_limit, &cleaner).unwrap().len(),
            MAX_RECORDS
        );

        let over_limit = "name\n".repeat(MAX_RECORDS + 1);
        let err = parse_signups_text(&over_limit, &cleaner).unwrap_err();
        assert!(matches!(err, ParseError::TooManyRecords(n) if n == MAX_RECORDS + 1));
        assert!(err.to_string().contains(&MAX_RECORDS.to_string()));
    }
}
