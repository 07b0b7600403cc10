use serde::{Deserialize, Serialize};

/// Rule that produced a match, in precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Case-insensitive exact equality
    Direct,
    /// Declared in the alias table
    Alias,
    /// Both names share an ignored fragment (legacy, approximate)
    Pattern,
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Direct => write!(f, "direct"),
            Self::Alias => write!(f, "alias"),
            Self::Pattern => write!(f, "pattern"),
        }
    }
}

/// A successful match between an authoritative name and a sign-up name.
///
/// A failed lookup is represented as `None` rather than a variant here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameMatch {
    pub kind: MatchKind,

    /// Name on the authoritative roster, as stored there
    pub canonical: String,

    /// Name on the sign-up list, as stored there
    pub matched: String,

    /// Ignored fragment shared by both names (pattern matches only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fragment: Option<String>,
}

impl NameMatch {
    pub fn new(kind: MatchKind, canonical: impl Into<String>, matched: impl Into<String>) -> Self {
        Self {
            kind,
            canonical: canonical.into(),
            matched: matched.into(),
            fragment: None,
        }
    }

    #[must_use]
    pub fn with_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = Some(fragment.into());
        self
    }
}
