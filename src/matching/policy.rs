use serde::{Deserialize, Serialize};

/// Role labels excluded from the "missing" report by default
pub const DEFAULT_EXCLUDED_ROLES: &[&str] = &["Bomber", "Guild Master"];

/// Name fragments accepted as a pattern match by default
pub const DEFAULT_IGNORED_FRAGMENTS: &[&str] = &["sarge"];

/// Fixed configuration for a reconciliation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExclusionPolicy {
    /// Unmatched online members holding any of these roles are reported as
    /// excluded instead of missing (case-insensitive)
    pub excluded_roles: Vec<String>,

    /// Substrings that count as a match when both names contain one
    pub ignored_fragments: Vec<String>,
}

impl Default for ExclusionPolicy {
    fn default() -> Self {
        Self {
            excluded_roles: DEFAULT_EXCLUDED_ROLES
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            ignored_fragments: DEFAULT_IGNORED_FRAGMENTS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}

impl ExclusionPolicy {
    /// A policy that excludes no roles and has no pattern fallback
    pub fn none() -> Self {
        Self {
            excluded_roles: Vec::new(),
            ignored_fragments: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_excluded_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_roles = roles.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_ignored_fragments<I, S>(mut self, fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_fragments = fragments.into_iter().map(Into::into).collect();
        self
    }
}
